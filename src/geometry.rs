//! Placement checks on the fixed 10×10 grid.

use crate::bitboard::Grid;
use crate::common::Coord;
use crate::ship::{footprint, Orientation, ShipDef};

/// Whether `def` fits at `origin` with `orientation` without leaving the
/// board or touching any cell already set in `occupancy`.
pub fn is_valid_placement(
    origin: Coord,
    def: ShipDef,
    orientation: Orientation,
    occupancy: &Grid,
) -> bool {
    match footprint(origin, def.size(), orientation) {
        Some(mask) => (mask & *occupancy).is_empty(),
        None => false,
    }
}
