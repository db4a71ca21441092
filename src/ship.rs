//! Ship definitions and placed ships backed by a [`Grid`] mask.

use core::fmt;

use crate::bitboard::Grid;
use crate::common::{BoardError, Coord, Direction};
use crate::config::BOARD_SIZE;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Direction in which successive segments are laid out.
    pub fn direction(self) -> Direction {
        match self {
            Orientation::Horizontal => Direction::Right,
            Orientation::Vertical => Direction::Down,
        }
    }

    /// The other orientation.
    pub fn toggled(self) -> Orientation {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// Kind of ship: name and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShipDef {
    name: &'static str,
    size: usize,
}

impl ShipDef {
    pub const fn new(name: &'static str, size: usize) -> Self {
        Self { name, size }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

/// Cells covered by a ship of `size` laid from `origin`, or `None` if any
/// segment would leave the board.
pub fn footprint(origin: Coord, size: usize, orientation: Orientation) -> Option<Grid> {
    let limit = match orientation {
        Orientation::Horizontal => origin.col(),
        Orientation::Vertical => origin.row(),
    };
    if limit + size > BOARD_SIZE as usize {
        return None;
    }
    let dir = orientation.direction();
    let mut mask = Grid::new();
    let mut cell = Some(origin);
    for _ in 0..size {
        let at = cell?;
        mask.insert(at);
        cell = at.step(dir);
    }
    Some(mask)
}

/// A ship placed on the board.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    def: ShipDef,
    origin: Coord,
    orientation: Orientation,
    mask: Grid,
}

impl Ship {
    /// Place `def` at `origin` with `orientation`.
    pub fn new(def: ShipDef, origin: Coord, orientation: Orientation) -> Result<Self, BoardError> {
        let mask = footprint(origin, def.size(), orientation).ok_or(BoardError::ShipOutOfBounds)?;
        Ok(Ship {
            def,
            origin,
            orientation,
            mask,
        })
    }

    pub fn def(&self) -> ShipDef {
        self.def
    }

    pub fn origin(&self) -> Coord {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupancy mask of the ship on the board.
    pub fn mask(&self) -> Grid {
        self.mask
    }

    pub fn occupies(&self, at: Coord) -> bool {
        self.mask.contains(at)
    }

    /// Whether every segment is set in `hits`.
    pub fn is_sunk(&self, hits: &Grid) -> bool {
        (self.mask & *hits) == self.mask
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", origin: {}, orientation: {:?} }}",
            self.def.name(),
            self.origin,
            self.orientation,
        )
    }
}
