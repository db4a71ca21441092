//! Targeting logic for the computer opponent.
//!
//! Each turn the engine tries three strategies in strict priority order:
//!
//! 1. **Streak continuation**: two orthogonally adjacent hits among the most
//!    recent hits fix a line; extend it past either end.
//! 2. **Directional hunting**: probe around the last hit, preferring the axis
//!    implied by an adjacent hit, then fall back to queued candidates.
//! 3. **Probability-density search**: weight every untried cell by how many
//!    fleet placements could cover it and sample among the best few.
//!
//! The engine only sees its own shot history and the tried grid of the
//! opponent board; it never looks at the opponent's ships and does not track
//! which ship a hit belongs to.

use alloc::vec::Vec;

use log::debug;
use rand::Rng;

use crate::board::ShotBoard;
use crate::common::{Coord, Direction};
use crate::config::{
    ADJACENT_HIT_BONUS, BOARD_SIZE, JITTER, PARITY_BONUS, SHIPS, STREAK_WINDOW, TOP_CANDIDATES,
};
use crate::ship::{footprint, Orientation};

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// One shot fired by the engine and its outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiShot {
    pub at: Coord,
    pub hit: bool,
}

/// Which tier produced a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Extending a line of adjacent hits in the given direction.
    Streak(Direction),
    /// Probing from the last hit in the given direction.
    Hunt(Direction),
    /// Popped from the candidate stack.
    Candidate,
    /// Sampled from the probability-density map.
    Search,
}

/// A proposed shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aim {
    pub at: Coord,
    pub strategy: Strategy,
}

/// A run of contiguous hits along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Streak {
    /// End the streak started from.
    tail: Coord,
    /// End the streak is growing towards.
    head: Coord,
    direction: Direction,
}

/// Memory the engine keeps between turns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Targeting {
    history: Vec<AiShot>,
    hunting: bool,
    last_hit: Option<Coord>,
    direction: Option<Direction>,
    candidates: Vec<Coord>,
}

impl Targeting {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shots fired so far, oldest first.
    pub fn history(&self) -> &[AiShot] {
        &self.history
    }

    pub fn is_hunting(&self) -> bool {
        self.hunting
    }

    pub fn last_hit(&self) -> Option<Coord> {
        self.last_hit
    }

    /// Direction between the two most recent consecutive adjacent hits.
    ///
    /// Reported to front-ends only; the streak and hunt tiers rebuild lines
    /// from the shot history.
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Follow-up cells queued around hits; the last entry is tried first.
    pub fn candidates(&self) -> &[Coord] {
        &self.candidates
    }

    /// Choose the next cell to fire at on `board`.
    ///
    /// Returns `None` only once every cell of the board has been tried.
    pub fn next_shot<R: Rng + ?Sized>(&self, board: &ShotBoard, rng: &mut R) -> Option<Aim> {
        let aim = self
            .continue_streak(board)
            .or_else(|| self.hunt(board))
            .or_else(|| self.search(board, rng))?;
        debug!("ai targets {} via {:?}", aim.at, aim.strategy);
        Some(aim)
    }

    /// Record the outcome of a shot. `tried` is the opponent grid after the
    /// shot was resolved.
    pub fn record(&mut self, at: Coord, hit: bool, tried: &ShotBoard) {
        self.history.push(AiShot { at, hit });
        if hit {
            self.direction = self.last_hit.and_then(|prev| prev.direction_to(at));
            self.hunting = true;
            self.last_hit = Some(at);
            for next in at.neighbors() {
                if !tried.is_tried(next) && !self.candidates.contains(&next) {
                    self.candidates.push(next);
                }
            }
        }
        self.candidates.retain(|&c| !tried.is_tried(c));
        if !hit && self.hunting && self.candidates.is_empty() {
            debug!("ai lead exhausted at {}, back to searching", at);
            self.hunting = false;
            self.last_hit = None;
            self.direction = None;
        }
    }

    fn was_hit(&self, at: Coord) -> bool {
        self.history.iter().any(|shot| shot.hit && shot.at == at)
    }

    /// Most recent hits, oldest first.
    fn recent_hits(&self) -> Vec<Coord> {
        let mut hits: Vec<Coord> = self
            .history
            .iter()
            .rev()
            .filter(|shot| shot.hit)
            .take(STREAK_WINDOW)
            .map(|shot| shot.at)
            .collect();
        hits.reverse();
        hits
    }

    fn find_streak(&self) -> Option<Streak> {
        let recent = self.recent_hits();
        for (j, &newer) in recent.iter().enumerate().rev() {
            for &older in recent[..j].iter().rev() {
                let Some(direction) = older.direction_to(newer) else {
                    continue;
                };
                return Some(Streak {
                    tail: self.run_end(older, direction.opposite()),
                    head: self.run_end(newer, direction),
                    direction,
                });
            }
        }
        None
    }

    /// Walk from `from` along `dir` while the next cell is a recorded hit.
    fn run_end(&self, from: Coord, dir: Direction) -> Coord {
        let mut end = from;
        while let Some(next) = end.step(dir).filter(|&c| self.was_hit(c)) {
            end = next;
        }
        end
    }

    fn continue_streak(&self, board: &ShotBoard) -> Option<Aim> {
        let streak = self.find_streak()?;
        let back = streak.direction.opposite();
        if let Some(at) = open(streak.head.step(streak.direction), board) {
            return Some(Aim {
                at,
                strategy: Strategy::Streak(streak.direction),
            });
        }
        open(streak.tail.step(back), board).map(|at| Aim {
            at,
            strategy: Strategy::Streak(back),
        })
    }

    fn hunt(&self, board: &ShotBoard) -> Option<Aim> {
        if !self.hunting {
            return None;
        }
        let last = self.last_hit?;

        for dir in Direction::ALL {
            let Some(neighbor) = last.step(dir) else {
                continue;
            };
            if !self.was_hit(neighbor) {
                continue;
            }
            let away = dir.opposite();
            if let Some(at) = open(last.step(away), board) {
                return Some(Aim {
                    at,
                    strategy: Strategy::Hunt(away),
                });
            }
            if let Some(at) = open(neighbor.step(dir), board) {
                return Some(Aim {
                    at,
                    strategy: Strategy::Hunt(dir),
                });
            }
        }

        for dir in Direction::ALL {
            if let Some(at) = open(last.step(dir), board) {
                return Some(Aim {
                    at,
                    strategy: Strategy::Hunt(dir),
                });
            }
        }

        self.candidates
            .iter()
            .rev()
            .copied()
            .find(|&c| !board.is_tried(c))
            .map(|at| Aim {
                at,
                strategy: Strategy::Candidate,
            })
    }

    fn search<R: Rng + ?Sized>(&self, board: &ShotBoard, rng: &mut R) -> Option<Aim> {
        let weights = search_weights(board, self.hunting);

        let mut cells: Vec<(Coord, f64)> = Vec::new();
        for at in Coord::all() {
            if board.is_tried(at) {
                continue;
            }
            let weight = weights[at.row()][at.col()] as f64 + rng.random_range(0.0..JITTER);
            if weight > 0.0 {
                cells.push((at, weight));
            }
        }

        let at = if cells.is_empty() {
            Coord::all().find(|&c| !board.is_tried(c))?
        } else {
            cells.sort_by(|a, b| b.1.total_cmp(&a.1));
            cells.truncate(TOP_CANDIDATES);
            weighted_pick(&cells, rng)
        };
        Some(Aim {
            at,
            strategy: Strategy::Search,
        })
    }
}

/// `cell` if it is on the board and untried.
fn open(cell: Option<Coord>, board: &ShotBoard) -> Option<Coord> {
    cell.filter(|&c| !board.is_tried(c))
}

/// Pick from a non-empty shortlist with probability proportional to weight.
fn weighted_pick<R: Rng + ?Sized>(cells: &[(Coord, f64)], rng: &mut R) -> Coord {
    let first = cells[0].0;
    let total: f64 = cells.iter().map(|&(_, w)| w).sum();
    if total <= 0.0 {
        return first;
    }
    let mut threshold = rng.random_range(0.0..total);
    for &(at, weight) in cells {
        if threshold < weight {
            return at;
        }
        threshold -= weight;
    }
    first
}

/// Deterministic base weights used by the search tier.
///
/// Tried cells weigh zero. Every untried cell collects, for each fleet ship
/// and orientation, the ship's size when a placement starting there avoids
/// all known misses, plus `ADJACENT_HIT_BONUS` when that placement borders a
/// known hit. While no lead is active, cells on the `(row + col)` even
/// lattice also get `PARITY_BONUS`.
pub fn search_weights(board: &ShotBoard, hunting: bool) -> [[u32; GRID_SIZE]; GRID_SIZE] {
    let misses = board.misses();
    let hits = board.hits();
    let mut matrix = [[0u32; GRID_SIZE]; GRID_SIZE];

    for at in Coord::all() {
        if board.is_tried(at) {
            continue;
        }
        let mut weight = 0u32;
        if !hunting && (at.row() + at.col()) % 2 == 0 {
            weight += PARITY_BONUS;
        }
        for def in SHIPS.iter() {
            for orientation in [Orientation::Horizontal, Orientation::Vertical] {
                let Some(mask) = footprint(at, def.size(), orientation) else {
                    continue;
                };
                if !(mask & misses).is_empty() {
                    continue;
                }
                weight += def.size() as u32;
                let borders_hit = mask
                    .coords()
                    .flat_map(Coord::neighbors)
                    .any(|n| !mask.contains(n) && hits.contains(n));
                if borders_hit {
                    weight += ADJACENT_HIT_BONUS;
                }
            }
        }
        matrix[at.row()][at.col()] = weight;
    }

    matrix
}
