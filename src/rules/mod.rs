//! Transition rules.
//!
//! `toggle_around` is the only way a board changes: it flips a cell and its
//! orthogonal neighbors, clipped to the board, then reports whether every
//! light is off.

pub mod engine;

pub use engine::{apply_toggle, has_won, toggle_around, toggle_set, Status, Transition, TOGGLE_OFFSETS};
