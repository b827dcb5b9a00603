// Hunt-then-finish targeting against an opponent board.
// Reads only the opponent's busy set and damage trail.

use alloc::vec::Vec;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::{board::Board, common::Coord};

const ALL_AXES: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const ROW_AXIS: [(i32, i32); 2] = [(0, 1), (0, -1)];
const COL_AXIS: [(i32, i32); 2] = [(1, 0), (-1, 0)];

fn is_open(enemy: &Board, target: Coord) -> bool {
    !enemy.is_out_of_bounds(target) && !enemy.is_busy(target)
}

/// Every cell of the opponent board that may still be fired at, row-major.
pub fn hunt_candidates(enemy: &Board) -> Vec<Coord> {
    let n = enemy.size() as i32;
    (0..n)
        .flat_map(|r| (0..n).map(move |c| Coord::new(r, c)))
        .filter(|&c| is_open(enemy, c))
        .collect()
}

/// Offsets to try around a wounded ship.
///
/// A single hit says nothing about orientation. With two or more, the ship
/// lies along the row shared by the first and last hit, or else along the
/// column.
pub fn finish_offsets(trail: &[Coord]) -> &'static [(i32, i32)] {
    match trail {
        [] | [_] => &ALL_AXES,
        [first, .., last] if first.row == last.row => &ROW_AXIS,
        _ => &COL_AXIS,
    }
}

/// Follow-up targets for the wounded ship on the opponent board.
///
/// Each offset is applied to the most recent and to the first hit of the
/// trail; illegal targets are dropped. Duplicates are kept so that choosing
/// uniformly from the list weighs candidates exactly as drawing an offset and
/// an end at random would.
pub fn finish_candidates(enemy: &Board) -> Vec<Coord> {
    let trail = enemy.damage_trail();
    let (Some(&first), Some(&last)) = (trail.first(), trail.last()) else {
        return Vec::new();
    };
    finish_offsets(trail)
        .iter()
        .flat_map(|&(dr, dc)| [last.offset(dr, dc), first.offset(dr, dc)])
        .filter(|&c| is_open(enemy, c))
        .collect()
}

/// Pick the next target: finish a wounded ship if there is one, otherwise a
/// uniformly random open cell. `None` when no legal target remains.
pub fn choose_target<R: Rng + ?Sized>(enemy: &Board, rng: &mut R) -> Option<Coord> {
    if !enemy.damage_trail().is_empty() {
        if let Some(&target) = finish_candidates(enemy).choose(rng) {
            return Some(target);
        }
        log::warn!(
            "no follow-up around {:?}, falling back to hunting",
            enemy.damage_trail()
        );
    }
    hunt_candidates(enemy).choose(rng).copied()
}
