use log::debug;
use rand::rngs::SmallRng;

use crate::{
    ai,
    board::Board,
    common::{Coord, ShotError, ShotOutcome},
};

use super::Player;

/// Automated player that hunts at random and finishes wounded ships.
///
/// All hunt/finish state lives on the opponent's board as its damage trail,
/// so the player itself only keeps a shot counter.
#[derive(Debug, Default)]
pub struct AiPlayer {
    shots: usize,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of legal shots fired so far.
    pub fn shots(&self) -> usize {
        self.shots
    }
}

impl Player for AiPlayer {
    fn select_target(&mut self, rng: &mut SmallRng, enemy: &Board) -> anyhow::Result<Coord> {
        let target = ai::choose_target(enemy, rng)
            .ok_or_else(|| anyhow::anyhow!("no legal target left on the opponent board"))?;
        debug!(
            "AI targets {} (trail {:?})",
            target,
            enemy.damage_trail()
        );
        Ok(target)
    }

    fn handle_shot_result(&mut self, _target: Coord, _outcome: ShotOutcome) {
        self.shots += 1;
    }

    fn handle_rejected_shot(&mut self, target: Coord, error: ShotError) {
        log::warn!("AI target {} rejected: {}", target, error);
    }
}
