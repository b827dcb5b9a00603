//! Text rendering of boards and shot outcomes.

use alloc::string::String;
use core::fmt::Write;

use crate::{
    board::{Board, Cell},
    common::{Coord, ShotOutcome},
};

/// Gap between two boards printed next to each other.
const SEPARATOR: &str = "      ";

fn glyph(cell: Cell, hidden: bool) -> char {
    match cell {
        Cell::Empty => 'O',
        Cell::Ship if hidden => 'O',
        Cell::Ship => '■',
        Cell::Hit => 'X',
        Cell::Miss | Cell::Cleared => '.',
    }
}

/// Render `board` as a table with 1-based row and column labels.
///
/// With `hidden`, undamaged ship segments are drawn as plain water, which is
/// how a player sees the opponent's board.
pub fn render_board(board: &Board, hidden: bool) -> String {
    let n = board.size();
    let mut out = String::from("  |");
    for c in 0..n {
        let _ = write!(out, " {} |", c + 1);
    }
    for r in 0..n {
        let _ = write!(out, "\n{} |", r + 1);
        for c in 0..n {
            let cell = board
                .cell(Coord::new(r as i32, c as i32))
                .unwrap_or(Cell::Empty);
            let _ = write!(out, " {} |", glyph(cell, hidden));
        }
    }
    out
}

/// Render two boards line by line next to each other.
pub fn render_side_by_side(left: &Board, right: &Board, right_hidden: bool) -> String {
    let left = render_board(left, false);
    let right = render_board(right, right_hidden);
    let mut out = String::new();
    for (i, (l, r)) in left.lines().zip(right.lines()).enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(l);
        out.push_str(SEPARATOR);
        out.push_str(r);
    }
    out
}

/// Human-readable result line for a shot.
pub fn outcome_message(outcome: ShotOutcome) -> &'static str {
    match outcome {
        ShotOutcome::Miss => "Miss!",
        ShotOutcome::Wounded => "Hit! The ship is wounded!",
        ShotOutcome::Sunk => "Hit! The ship is destroyed!",
    }
}
