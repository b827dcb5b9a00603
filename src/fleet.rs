//! Random fleet placement with a bounded retry budget.
//!
//! Random placement of ships that may not touch can dead-end with no legal
//! spot left for a later ship. Rather than backtrack, a board that runs out of
//! attempts is thrown away and generation starts over on an empty one.

use log::{debug, trace, warn};
use rand::Rng;

use crate::board::Board;
use crate::common::{Coord, FleetError};
use crate::config::GameConfig;
use crate::ship::{Orientation, Ship};

/// Sample a ship of `length` anywhere on a `size×size` board.
///
/// The bow may land one row or column past the edge; `Board::place_ship`
/// rejects such ships like any other illegal placement.
fn random_ship<R: Rng + ?Sized>(rng: &mut R, size: usize, length: usize) -> Ship {
    let n = size as i32;
    let origin = Coord::new(rng.random_range(0..=n), rng.random_range(0..=n));
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    Ship::new(origin, length, orientation)
}

/// Place ships of the given `lengths`, in order, on a fresh board.
///
/// `max_attempts` bounds the placement attempts for the whole fleet. When it
/// is exceeded the partial board is dropped and `BudgetExhausted` returned.
/// A returned board has every ship placed and an empty shot history.
pub fn try_place_fleet<R: Rng + ?Sized>(
    size: usize,
    lengths: &[usize],
    max_attempts: usize,
    rng: &mut R,
) -> Result<Board, FleetError> {
    let mut board = Board::new(size)?;
    let mut attempts = 0;
    for &length in lengths {
        loop {
            attempts += 1;
            if attempts > max_attempts {
                return Err(FleetError::BudgetExhausted {
                    attempts: max_attempts,
                });
            }
            let ship = random_ship(rng, size, length);
            match board.place_ship(ship) {
                Ok(()) => break,
                Err(e) => trace!("rejected {:?}: {}", ship, e),
            }
        }
    }
    board.reset_shot_history();
    debug!(
        "placed {} ships on {}x{} board in {} attempts",
        lengths.len(),
        size,
        size,
        attempts
    );
    Ok(board)
}

/// Generate a fully populated board for `config`, starting over on an empty
/// board each time the attempt budget runs out.
pub fn random_board<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Board, FleetError> {
    for restart in 0..config.max_board_restarts {
        match try_place_fleet(
            config.board_size,
            &config.fleet,
            config.max_placement_attempts,
            rng,
        ) {
            Ok(board) => return Ok(board),
            Err(FleetError::BudgetExhausted { .. }) => {
                trace!("fleet placement restart {}", restart + 1);
            }
            Err(e) => return Err(e),
        }
    }
    warn!(
        "no legal fleet found after {} boards",
        config.max_board_restarts
    );
    Err(FleetError::RestartsExhausted {
        restarts: config.max_board_restarts,
    })
}
