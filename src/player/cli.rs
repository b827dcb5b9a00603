#![cfg(feature = "std")]

use std::fmt;
use std::io::{self, BufRead, Write};
use std::string::String;

use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{Coord, ShotError, ShotOutcome},
    ui::outcome_message,
};

use super::Player;

/// Reasons a line of input is not a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Expected exactly two tokens, got this many.
    WrongTokenCount(usize),
    /// A token is not a non-negative integer.
    NotANumber,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::WrongTokenCount(_) => write!(f, "Enter 2 coordinates!"),
            InputError::NotANumber => write!(f, "Enter numbers!"),
        }
    }
}

impl std::error::Error for InputError {}

/// Parse `"row col"`, both 1-based, into a zero-based coordinate.
///
/// Bounds are left to the board, so `0 3` parses to a row of `-1`.
pub fn parse_coord(input: &str) -> Result<Coord, InputError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let &[row, col] = tokens.as_slice() else {
        return Err(InputError::WrongTokenCount(tokens.len()));
    };
    let number = |token: &str| -> Result<i32, InputError> {
        if !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InputError::NotANumber);
        }
        token.parse().map_err(|_| InputError::NotANumber)
    };
    Ok(Coord::new(number(row)? - 1, number(col)? - 1))
}

/// Human player reading targets line by line.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
}

impl CliPlayer<io::StdinLock<'static>, io::Stdout> {
    /// Player bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output sink, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, args: fmt::Arguments<'_>) {
        if let Err(e) = self.output.write_fmt(args).and_then(|()| self.output.flush()) {
            log::warn!("failed to write to player: {}", e);
        }
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn select_target(&mut self, _rng: &mut SmallRng, _enemy: &Board) -> anyhow::Result<Coord> {
        loop {
            write!(self.output, "Your move: ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                anyhow::bail!("input closed");
            }
            match parse_coord(&line) {
                Ok(target) => return Ok(target),
                Err(e) => writeln!(self.output, " {} ", e)?,
            }
        }
    }

    fn handle_shot_result(&mut self, _target: Coord, outcome: ShotOutcome) {
        self.say(format_args!("{}\n", outcome_message(outcome)));
    }

    fn handle_rejected_shot(&mut self, _target: Coord, error: ShotError) {
        self.say(format_args!("{}\n", error));
    }

    fn handle_opponent_shot(&mut self, target: Coord, outcome: ShotOutcome) {
        self.say(format_args!(
            "Opponent fires at {}: {}\n",
            target,
            outcome_message(outcome)
        ));
    }
}
