#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod ai;
mod bitboard;
mod board;
mod common;
mod config;
pub mod fleet;
mod game;
#[cfg(feature = "std")]
mod logging;
pub mod player;
pub mod prelude;
mod ship;
pub mod ui;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use fleet::{random_board, try_place_fleet};
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, init_logging_with};
pub use player::*;
pub use ship::*;
pub use ui::{outcome_message, render_board, render_side_by_side};
