//! Ship geometry and damage tracking.

use core::fmt;

use crate::common::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Cells extend along the row, column index grows.
    Horizontal,
    /// Cells extend down the column, row index grows.
    Vertical,
}

impl Orientation {
    /// Unit step (row, col) from one cell of a ship to the next.
    pub fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// A straight run of cells starting at the bow.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    origin: Coord,
    length: usize,
    orientation: Orientation,
    health: usize,
}

impl Ship {
    /// Create an undamaged ship with its bow at `origin`.
    pub fn new(origin: Coord, length: usize, orientation: Orientation) -> Self {
        Self {
            origin,
            length,
            orientation,
            health: length,
        }
    }

    /// Occupied cells, from the bow outward.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let (dr, dc) = self.orientation.step();
        let origin = self.origin;
        (0..self.length as i32).map(move |i| origin.offset(dr * i, dc * i))
    }

    /// `true` if `target` is one of this ship's cells, damaged or not.
    pub fn is_hit_by(&self, target: Coord) -> bool {
        self.cells().any(|c| c == target)
    }

    /// Record one hit; health never drops below zero.
    pub fn take_hit(&mut self) {
        self.health = self.health.saturating_sub(1);
    }

    pub fn is_sunk(&self) -> bool {
        self.health == 0
    }

    /// Cells not yet hit.
    pub fn health(&self) -> usize {
        self.health
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn origin(&self) -> Coord {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ origin: ({}, {}), length: {}, orientation: {:?}, health: {} }}",
            self.origin.row, self.origin.col, self.length, self.orientation, self.health,
        )
    }
}
