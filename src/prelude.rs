//! Commonly used types and utilities for ease of import.

pub use crate::{
    random_board, AiPlayer, Board, Coord, Game, GameConfig, MatchSummary, Player, ShotOutcome,
    Side,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, CliPlayer};
