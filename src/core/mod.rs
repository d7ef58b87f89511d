//! Core types: coordinates, grids, configuration, RNG, errors.
//!
//! Everything needed to build and inspect a board lives here. The rule that
//! changes a board lives in `rules`.

pub mod coord;
pub mod grid;
pub mod config;
pub mod rng;
pub mod error;

pub use coord::Coordinate;
pub use grid::{create_grid, Grid, LIT_CHAR, MAX_DIMENSION, OFF_CHAR};
pub use config::{BoardConfig, DEFAULT_COLS, DEFAULT_LIT_PROBABILITY, DEFAULT_ROWS};
pub use rng::GameRng;
pub use error::GridError;
