//! Commonly used types and utilities for ease of import.

pub use crate::{
    Coord, FireOutcome, GameEngine, GameSnapshot, GameStatus, Orientation, PlaceOutcome,
    ShotResult, Winner,
};

#[cfg(feature = "std")]
pub use crate::{cli::parse_coord, cli::render_snapshot, init_logging};
