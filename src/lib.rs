#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod ai;
mod bitboard;
mod board;
#[cfg(feature = "std")]
pub mod cli;
mod common;
mod config;
mod engine;
mod fleet;
mod game;
mod geometry;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
mod ship;

pub use ai::*;
pub use bitboard::{BitBoard, Grid};
pub use board::*;
pub use common::*;
pub use config::*;
pub use engine::*;
pub use fleet::*;
pub use game::*;
pub use geometry::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, init_logging_with, LOG_ENV};
pub use ship::*;
