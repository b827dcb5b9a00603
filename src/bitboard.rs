//! A square bitboard packed into a single unsigned integer.
//!
//! The type is `no_std` friendly and avoids heap allocations. Boards are
//! represented as an `size×size` grid packed into an unsigned integer `T`;
//! the side length is chosen at runtime and checked against the capacity of
//! `T` on construction.

use core::{any, fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitBoardError {
    /// Requested board size N*N exceeds capacity of `T::BITS`.
    SizeTooLarge { n: usize, capacity: usize },
    /// Row or column index is out of bounds [0..N).
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::SizeTooLarge { n, capacity } => {
                write!(
                    f,
                    "SizeTooLarge: N*N={} exceeds T::BITS={}",
                    n * n,
                    capacity
                )
            }
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BitBoardError {}

/// A `size×size` bitboard stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
    size: usize,
}

impl<T> BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of bits available in `T`.
    pub fn capacity() -> usize {
        mem::size_of::<T>() * 8
    }

    /// Fallible constructor: returns `Err(SizeTooLarge)` if size*size > T::BITS.
    pub fn try_new(size: usize) -> Result<Self, BitBoardError> {
        let capacity = Self::capacity();
        if size * size > capacity {
            Err(BitBoardError::SizeTooLarge { n: size, capacity })
        } else {
            Ok(BitBoard {
                bits: T::zero(),
                size,
            })
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of set bits (occupied cells).
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no bits are set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Gets the bit at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitBoardError> {
        let idx = self.index(row, col)?;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Sets the bit at (row, col) to 1.
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        let idx = self.index(row, col)?;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    /// Clears the bit at (row, col) to 0.
    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        let idx = self.index(row, col)?;
        self.bits = self.bits & !(T::one() << idx);
        Ok(())
    }

    /// Clears all bits to `0`.
    #[inline]
    pub fn clear_all(&mut self) {
        self.bits = T::zero();
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Result<usize, BitBoardError> {
        if row >= self.size || col >= self.size {
            Err(BitBoardError::IndexOutOfBounds { row, col })
        } else {
            Ok(row * self.size + col)
        }
    }

    /// Iterator over the set bits of the board.
    #[inline]
    pub fn iter_set_bits(&self) -> SetBits<'_, T> {
        SetBits {
            board: self,
            idx: 0,
        }
    }
}

impl<T> fmt::Debug for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}>({}x{}):", any::type_name::<T>(), self.size, self.size)?;
        for r in 0..self.size {
            for c in 0..self.size {
                let bit = if self.get(r, c).unwrap_or(false) {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the set bits of a bitboard, in row-major order.
#[derive(Clone, Copy)]
pub struct SetBits<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    board: &'a BitBoard<T>,
    idx: usize,
}

impl<'a, T> Iterator for SetBits<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let n = self.board.size;
        while self.idx < n * n {
            let idx = self.idx;
            self.idx += 1;
            if ((self.board.bits >> idx) & T::one()) != T::zero() {
                return Some((idx / n, idx % n));
            }
        }
        None
    }
}
