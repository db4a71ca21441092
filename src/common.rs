//! Common types for Broadside: coordinates, directions, board errors and
//! shot results.

use core::fmt;

use crate::config::BOARD_SIZE;

/// A cell on the 10×10 board. Both components are always in `0..BOARD_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Build a coordinate, rejecting anything off the board.
    pub fn new(row: usize, col: usize) -> Result<Self, BoardError> {
        if row >= BOARD_SIZE as usize || col >= BOARD_SIZE as usize {
            return Err(BoardError::OutOfBounds { row, col });
        }
        Ok(Coord {
            row: row as u8,
            col: col as u8,
        })
    }

    pub fn row(&self) -> usize {
        self.row as usize
    }

    pub fn col(&self) -> usize {
        self.col as usize
    }

    /// Row-major cell index in `0..100`.
    pub fn index(&self) -> usize {
        self.row() * BOARD_SIZE as usize + self.col()
    }

    /// The neighbouring cell one step in `dir`, if it is on the board.
    pub fn step(&self, dir: Direction) -> Option<Coord> {
        let (dr, dc) = dir.delta();
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if row < 0 || col < 0 {
            return None;
        }
        Coord::new(row as usize, col as usize).ok()
    }

    /// Orthogonal neighbours in `Direction::ALL` order.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        Direction::ALL.into_iter().filter_map(move |dir| self.step(dir))
    }

    /// Direction leading from `self` to an orthogonally adjacent `other`.
    pub fn direction_to(&self, other: Coord) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&dir| self.step(dir) == Some(other))
    }

    /// Iterate every cell of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        let n = BOARD_SIZE;
        (0..n).flat_map(move |row| (0..n).map(move |col| Coord { row, col }))
    }
}

impl fmt::Display for Coord {
    /// Board notation: column letter then 1-based row, e.g. `C4`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.col) as char, self.row + 1)
    }
}

/// Orthogonal direction on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Fixed probing order used by the hunting logic.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// `(row, col)` delta of a single step.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }
}

/// Result of resolving a shot against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum ShotResult {
    /// Shot hit a ship segment.
    Hit,
    /// Shot missed all ships.
    Miss,
    /// Shot hit the last intact segment of a ship, carrying its name.
    Sunk(&'static str),
    /// Cell had already been tried; carries the recorded outcome.
    Repeat { hit: bool },
}

impl ShotResult {
    pub fn is_hit(&self) -> bool {
        match self {
            ShotResult::Hit | ShotResult::Sunk(_) => true,
            ShotResult::Miss => false,
            ShotResult::Repeat { hit } => *hit,
        }
    }
}

/// Errors returned by board and fleet operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the board.
    OutOfBounds { row: usize, col: usize },
    /// Ship placement runs off the board.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// All ships of the fleet are already placed.
    FleetComplete,
    /// Random placement gave up after exhausting its attempts.
    UnableToPlaceShip,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Coordinate ({}, {}) is off the board", row, col)
            }
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::FleetComplete => write!(f, "All ships are already placed"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
        }
    }
}
