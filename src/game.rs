use alloc::boxed::Box;
use log::{debug, info};
use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{Coord, ShotOutcome},
    config::GameConfig,
    fleet,
    player::Player,
};

/// One of the two sides of a match. `First` moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

/// What happened on a single legal shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub shooter: Side,
    pub target: Coord,
    pub outcome: ShotOutcome,
}

/// Final result of a completed match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchSummary {
    pub winner: Side,
    /// Legal shots fired by each side, indexed `[First, Second]`.
    pub shots: [usize; 2],
    /// Turns played; a turn lasts until its side misses.
    pub turns: usize,
}

/// Match controller: each side's own board and the player aiming at the
/// other one.
pub struct Game {
    boards: [Board; 2],
    players: [Box<dyn Player>; 2],
    turn: Side,
    shots: [usize; 2],
    turns: usize,
}

impl Game {
    /// Start a match with freshly generated boards for both sides.
    pub fn new(
        config: &GameConfig,
        players: [Box<dyn Player>; 2],
        rng: &mut SmallRng,
    ) -> anyhow::Result<Self> {
        config.validate().map_err(|e| anyhow::anyhow!(e))?;
        let first = fleet::random_board(config, rng).map_err(|e| anyhow::anyhow!(e))?;
        let second = fleet::random_board(config, rng).map_err(|e| anyhow::anyhow!(e))?;
        Ok(Self::from_boards([first, second], players))
    }

    /// Start a match on boards that are already populated.
    pub fn from_boards(boards: [Board; 2], players: [Box<dyn Player>; 2]) -> Self {
        Self {
            boards,
            players,
            turn: Side::First,
            shots: [0; 2],
            turns: 1,
        }
    }

    /// The board owned by `side`.
    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    /// Side due to shoot next.
    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn shots(&self, side: Side) -> usize {
        self.shots[side.index()]
    }

    /// The side whose opponent has lost every ship, if any.
    pub fn winner(&self) -> Option<Side> {
        if self.board(Side::Second).is_defeated() {
            Some(Side::First)
        } else if self.board(Side::First).is_defeated() {
            Some(Side::Second)
        } else {
            None
        }
    }

    /// Fire one legal shot for the side to move.
    ///
    /// Refused targets are reported to the shooter, who is asked again
    /// without losing the turn. A miss passes the turn; a hit keeps it.
    pub fn step(&mut self, rng: &mut SmallRng) -> anyhow::Result<TurnReport> {
        if let Some(winner) = self.winner() {
            anyhow::bail!("match is over, {:?} side won", winner);
        }
        let shooter = self.turn;
        let (me, them) = (shooter.index(), shooter.other().index());
        loop {
            let target = self.players[me].select_target(rng, &self.boards[them])?;
            let outcome = match self.boards[them].fire_at(target) {
                Ok(outcome) => outcome,
                Err(e) => {
                    debug!("{:?} shot at {} refused: {}", shooter, target, e);
                    self.players[me].handle_rejected_shot(target, e);
                    continue;
                }
            };
            self.shots[me] += 1;
            self.players[me].handle_shot_result(target, outcome);
            self.players[them].handle_opponent_shot(target, outcome);
            debug!("{:?} fired at {}: {:?}", shooter, target, outcome);
            if !outcome.repeats_turn() {
                self.turn = shooter.other();
                self.turns += 1;
            }
            return Ok(TurnReport {
                shooter,
                target,
                outcome,
            });
        }
    }

    /// Play until one side has no ships left.
    pub fn run(&mut self, rng: &mut SmallRng) -> anyhow::Result<MatchSummary> {
        let winner = loop {
            if let Some(winner) = self.winner() {
                break winner;
            }
            self.step(rng)?;
        };
        info!(
            "{:?} side wins after {} turns ({} vs {} shots)",
            winner, self.turns, self.shots[0], self.shots[1]
        );
        Ok(MatchSummary {
            winner,
            shots: self.shots,
            turns: self.turns,
        })
    }
}
