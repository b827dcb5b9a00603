//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete implementations:
//! - AiPlayer: hunt/finish automated opponent
//! - CliPlayer: interactive command-line player

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{Coord, ShotError, ShotOutcome};

/// Interface implemented by different player types.
///
/// A Player is responsible for:
/// - Selecting targets on the opponent's board
/// - Handling feedback from its own shots and the opponent's
///
/// The opponent board is only ever lent out immutably; shots go through the
/// match controller.
pub trait Player {
    /// Choose the next target on `enemy`.
    fn select_target(&mut self, rng: &mut SmallRng, enemy: &Board) -> anyhow::Result<Coord>;

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _target: Coord, _outcome: ShotOutcome) {}

    /// Inform the player that its last target was refused. It will be asked
    /// for another one without losing the turn.
    fn handle_rejected_shot(&mut self, _target: Coord, _error: ShotError) {}

    /// Inform the player of an opponent shot against its board.
    fn handle_opponent_shot(&mut self, _target: Coord, _outcome: ShotOutcome) {}
}

pub mod ai;
pub use ai::AiPlayer;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::{parse_coord, CliPlayer, InputError};
