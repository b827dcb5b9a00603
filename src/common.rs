//! Common types for the game: coordinates, shot outcomes and board errors.

use core::fmt;

use crate::bitboard::BitBoardError;

/// A zero-based board position.
///
/// Components are signed so that neighbours of edge cells, and a `0` typed by
/// a human player, can be expressed and then rejected by the bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// This coordinate shifted by (`dr`, `dc`).
    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// The 3×3 block centred on this coordinate, the coordinate itself included.
    pub fn neighbours8(self) -> impl Iterator<Item = Coord> {
        (-1..=1).flat_map(move |dr| (-1..=1).map(move |dc| self.offset(dr, dc)))
    }
}

/// Shown 1-based, the way players type coordinates.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row + 1, self.col + 1)
    }
}

/// Result of a legal shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// No ship at the target.
    Miss,
    /// A ship was hit and still floats.
    Wounded,
    /// The last healthy cell of a ship was hit.
    Sunk,
}

impl ShotOutcome {
    /// Hits grant the shooter another shot.
    pub fn repeats_turn(self) -> bool {
        matches!(self, ShotOutcome::Wounded | ShotOutcome::Sunk)
    }
}

/// Errors returned when placing a ship on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Some ship cell lies outside the board.
    OutOfBounds,
    /// Some ship cell overlaps or touches an already placed ship.
    Overlap,
    /// Ships must occupy at least one cell.
    ZeroLength,
    /// Play has started; the fleet can no longer change.
    Locked,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "Ship placement is out of bounds"),
            PlacementError::Overlap => {
                write!(f, "Ship placement overlaps or touches another ship")
            }
            PlacementError::ZeroLength => write!(f, "Ship must have at least one cell"),
            PlacementError::Locked => write!(f, "Board is locked for placement"),
        }
    }
}

/// Errors returned by shots at a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotError {
    /// Target lies outside the board.
    OutOfBounds,
    /// Target was already fired at, or is known to be empty water.
    AlreadyShot,
}

impl fmt::Display for ShotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotError::OutOfBounds => write!(f, "You are trying to shoot off the board!"),
            ShotError::AlreadyShot => write!(f, "You have already shot at this cell"),
        }
    }
}

/// Errors returned by the fleet placement generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FleetError {
    /// The global attempt ceiling was exceeded for one board.
    BudgetExhausted { attempts: usize },
    /// Every restart of the board ran out of attempts.
    RestartsExhausted { restarts: usize },
    /// The board could not be created at the requested size.
    Board(BitBoardError),
}

impl From<BitBoardError> for FleetError {
    fn from(err: BitBoardError) -> Self {
        FleetError::Board(err)
    }
}

impl fmt::Display for FleetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FleetError::BudgetExhausted { attempts } => {
                write!(f, "Fleet placement gave up after {} attempts", attempts)
            }
            FleetError::RestartsExhausted { restarts } => {
                write!(f, "Fleet placement failed on {} fresh boards", restarts)
            }
            FleetError::Board(e) => write!(f, "BitBoard error: {}", e),
        }
    }
}

/// Errors returned by configuration validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Board side is zero or does not fit the busy-set bitboard.
    InvalidSize { size: usize, max: usize },
    /// No ships configured.
    EmptyFleet,
    /// A ship length is zero or longer than the board side.
    InvalidShipLength { length: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSize { size, max } => {
                write!(f, "Board size {} must be between 1 and {}", size, max)
            }
            ConfigError::EmptyFleet => write!(f, "Fleet must contain at least one ship"),
            ConfigError::InvalidShipLength { length } => {
                write!(f, "Ship length {} does not fit the board", length)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
#[cfg(feature = "std")]
impl std::error::Error for ShotError {}
#[cfg(feature = "std")]
impl std::error::Error for FleetError {}
#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
