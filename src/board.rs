//! One side's board: cell states, ships, shot history and damage tracking.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use log::{debug, trace};

use crate::bitboard::{BitBoard, BitBoardError};
use crate::common::{Coord, PlacementError, ShotError, ShotOutcome};
use crate::ship::Ship;

type BB = BitBoard<u128>;

/// Visible state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Untouched water, or a cell whose contents are unknown.
    Empty,
    /// Undamaged ship segment.
    Ship,
    /// Damaged ship segment.
    Hit,
    /// Shot that found water.
    Miss,
    /// Water next to a sunk ship, known to be empty without a shot.
    Cleared,
}

/// Main board state: ship placements, busy cells, hits in progress.
///
/// The busy set holds every cell that may not be targeted: during placement
/// that is ship cells and the ring around them, during play it is cells
/// already fired at plus the rings around sunk ships.
#[derive(Clone)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    ships: Vec<Ship>,
    busy: BB,
    sunk: usize,
    trail: Vec<Coord>,
    locked: bool,
}

impl Board {
    /// Create an empty `size×size` board.
    pub fn new(size: usize) -> Result<Self, BitBoardError> {
        let busy = BB::try_new(size)?;
        Ok(Board {
            size,
            cells: vec![Cell::Empty; size * size],
            ships: Vec::new(),
            busy,
            sunk: 0,
            trail: Vec::new(),
            locked: false,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// `true` if either axis of `target` falls outside `[0, size)`.
    pub fn is_out_of_bounds(&self, target: Coord) -> bool {
        self.index(target).is_none()
    }

    fn index(&self, target: Coord) -> Option<(usize, usize)> {
        let n = self.size as i32;
        if (0..n).contains(&target.row) && (0..n).contains(&target.col) {
            Some((target.row as usize, target.col as usize))
        } else {
            None
        }
    }

    /// Visible state at `target`, or `None` off the board.
    pub fn cell(&self, target: Coord) -> Option<Cell> {
        self.index(target).map(|(r, c)| self.cells[r * self.size + c])
    }

    fn set_cell(&mut self, target: Coord, cell: Cell) {
        if let Some((r, c)) = self.index(target) {
            self.cells[r * self.size + c] = cell;
        }
    }

    /// `true` if `target` is on the board and may not be fired at.
    pub fn is_busy(&self, target: Coord) -> bool {
        self.index(target)
            .map(|(r, c)| self.busy.get(r, c).unwrap_or(false))
            .unwrap_or(false)
    }

    fn mark_busy(&mut self, target: Coord) {
        if let Some((r, c)) = self.index(target) {
            let _ = self.busy.set(r, c);
        }
    }

    /// Reserve the ring around `ship`. With `reveal`, newly reserved cells are
    /// also drawn as cleared water.
    fn mark_contour(&mut self, ship: &Ship, reveal: bool) {
        for cell in ship.cells() {
            for near in cell.neighbours8() {
                if self.is_out_of_bounds(near) || self.is_busy(near) {
                    continue;
                }
                if reveal {
                    self.set_cell(near, Cell::Cleared);
                }
                self.mark_busy(near);
            }
        }
    }

    /// Place `ship`, reserving the ring around it so no later ship can touch it.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), PlacementError> {
        if self.locked {
            return Err(PlacementError::Locked);
        }
        if ship.length() == 0 {
            return Err(PlacementError::ZeroLength);
        }
        for cell in ship.cells() {
            if self.is_out_of_bounds(cell) {
                return Err(PlacementError::OutOfBounds);
            }
            if self.is_busy(cell) {
                return Err(PlacementError::Overlap);
            }
        }
        for cell in ship.cells() {
            self.set_cell(cell, Cell::Ship);
            self.mark_busy(cell);
        }
        self.ships.push(ship);
        self.mark_contour(&ship, false);
        trace!("placed {:?}", ship);
        Ok(())
    }

    /// Forget placement reservations and lock the fleet; from here on the busy
    /// set only tracks shots.
    pub fn reset_shot_history(&mut self) {
        self.busy.clear_all();
        self.locked = true;
    }

    /// Fire at `target`, updating ship health and the damage trail.
    pub fn fire_at(&mut self, target: Coord) -> Result<ShotOutcome, ShotError> {
        if self.is_out_of_bounds(target) {
            return Err(ShotError::OutOfBounds);
        }
        if self.is_busy(target) {
            return Err(ShotError::AlreadyShot);
        }
        self.mark_busy(target);

        let Some(idx) = self.ships.iter().position(|s| s.is_hit_by(target)) else {
            self.set_cell(target, Cell::Miss);
            debug!("shot at {} missed", target);
            return Ok(ShotOutcome::Miss);
        };

        self.ships[idx].take_hit();
        self.set_cell(target, Cell::Hit);
        let ship = self.ships[idx];
        if ship.is_sunk() {
            self.sunk += 1;
            self.mark_contour(&ship, true);
            self.trail.clear();
            debug!("shot at {} sank {:?}", target, ship);
            Ok(ShotOutcome::Sunk)
        } else {
            self.trail.push(target);
            debug!("shot at {} wounded {:?}", target, ship);
            Ok(ShotOutcome::Wounded)
        }
    }

    /// Returns `true` once every placed ship is sunk.
    pub fn is_defeated(&self) -> bool {
        self.sunk == self.ships.len()
    }

    /// Cells that may not be fired at.
    pub fn busy(&self) -> &BB {
        &self.busy
    }

    /// Hits on the ship currently wounded but afloat, in the order they landed.
    pub fn damage_trail(&self) -> &[Coord] {
        &self.trail
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship_count(&self) -> usize {
        self.ships.len()
    }

    pub fn sunk_count(&self) -> usize {
        self.sunk
    }

    /// `true` once placement is over and the board only takes shots.
    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  size: {},\n  busy: {:?},\n  sunk: {},\n  trail: {:?},\n  ships: {:?}\n}}",
            self.size, self.busy, self.sunk, self.trail, self.ships
        )
    }
}
