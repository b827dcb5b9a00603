use alloc::vec::Vec;

use crate::common::ConfigError;

pub const BOARD_SIZE: usize = 6;
/// Largest side whose cells fit the `u128` busy set.
pub const MAX_BOARD_SIZE: usize = 11;
pub const FLEET: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];
/// Placement attempts allowed for a whole fleet before the board is abandoned.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 2000;
/// Fresh boards tried before fleet generation is reported as impossible.
pub const MAX_BOARD_RESTARTS: usize = 1000;

/// Settings for one match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: usize,
    /// Ship lengths, placed in this order.
    pub fleet: Vec<usize>,
    pub max_placement_attempts: usize,
    pub max_board_restarts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            fleet: FLEET.to_vec(),
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
            max_board_restarts: MAX_BOARD_RESTARTS,
        }
    }
}

impl GameConfig {
    /// Default fleet on a board of `board_size`.
    pub fn with_size(board_size: usize) -> Self {
        Self {
            board_size,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 || self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::InvalidSize {
                size: self.board_size,
                max: MAX_BOARD_SIZE,
            });
        }
        if self.fleet.is_empty() {
            return Err(ConfigError::EmptyFleet);
        }
        if let Some(&length) = self
            .fleet
            .iter()
            .find(|&&len| len == 0 || len > self.board_size)
        {
            return Err(ConfigError::InvalidShipLength { length });
        }
        Ok(())
    }

    /// Total number of cells covered by the fleet.
    pub fn total_ship_cells(&self) -> usize {
        self.fleet.iter().sum()
    }
}
