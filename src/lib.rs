//! # lights-out
//!
//! The puzzle logic of Lights Out: a grid of lights where pressing one cell
//! flips it and its orthogonal neighbors, and the goal is to switch every
//! light off.
//!
//! ## Design Principles
//!
//! 1. **Pure core**: Building a board and applying a move never perform I/O.
//!    Rendering and input handling belong to the caller.
//!
//! 2. **Randomness only at setup**: Boards are drawn from a seeded `GameRng`,
//!    so a seed reproduces a board. Moves are deterministic.
//!
//! 3. **Persistent boards**: `Grid` is backed by `im::Vector`, so a move can
//!    return a new board cheaply and the old one stays valid.
//!
//! ## Example
//!
//! ```
//! use lights_out::{create_grid, toggle_around, Coordinate, GameRng};
//!
//! let mut rng = GameRng::new(42);
//! let grid = create_grid(5, 5, 0.25, &mut rng).unwrap();
//!
//! let next = toggle_around(&grid, Coordinate::new(2, 2));
//! assert_eq!(next.grid.rows(), 5);
//! assert_eq!(next.has_won, next.grid.is_all_off());
//! ```
//!
//! ## Modules
//!
//! - `core`: Coordinates, grids, board configuration, RNG, errors
//! - `rules`: The toggle transition and win check
//! - `session`: Caller-owned game session with terminal win state
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod rules;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{create_grid, BoardConfig, Coordinate, GameRng, Grid, GridError};

pub use crate::rules::{apply_toggle, has_won, toggle_around, toggle_set, Status, Transition};

pub use crate::session::GameSession;
