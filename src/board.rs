//! Shot tracking for one side of the game.

use crate::bitboard::Grid;
use crate::common::{Coord, ShotResult};
use crate::fleet::Fleet;

/// Per-cell view of a shot board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct TriedCell {
    pub tried: bool,
    pub hit: bool,
}

/// Cells the opponent has tried against a board, and which of them hit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShotBoard {
    tried: Grid,
    hits: Grid,
}

impl ShotBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tried(&self) -> Grid {
        self.tried
    }

    pub fn hits(&self) -> Grid {
        self.hits
    }

    /// Tried cells that did not hit.
    pub fn misses(&self) -> Grid {
        self.tried & !self.hits
    }

    pub fn is_tried(&self, at: Coord) -> bool {
        self.tried.contains(at)
    }

    pub fn cell(&self, at: Coord) -> TriedCell {
        TriedCell {
            tried: self.tried.contains(at),
            hit: self.hits.contains(at),
        }
    }

    /// Whether every cell has been tried.
    pub fn is_exhausted(&self) -> bool {
        (!self.tried).is_empty()
    }
}

/// Resolve a shot at `at` against `fleet`.
///
/// A repeat shot leaves the board untouched and reports the recorded outcome.
pub fn resolve_shot(board: &ShotBoard, fleet: &Fleet, at: Coord) -> (ShotBoard, ShotResult) {
    if board.is_tried(at) {
        let hit = board.hits.contains(at);
        return (*board, ShotResult::Repeat { hit });
    }
    let mut next = *board;
    next.tried.insert(at);
    let result = match fleet.ship_at(at) {
        Some(ship) => {
            next.hits.insert(at);
            if ship.is_sunk(&next.hits) {
                ShotResult::Sunk(ship.def().name())
            } else {
                ShotResult::Hit
            }
        }
        None => ShotResult::Miss,
    };
    (next, result)
}
