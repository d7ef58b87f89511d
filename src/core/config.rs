//! Board configuration.
//!
//! `BoardConfig` carries the three inputs of board creation. Defaults match
//! the classic puzzle: a 5x5 board where each light starts on with chance 0.25.

use serde::{Deserialize, Serialize};

use super::error::GridError;
use super::grid::{check_dimensions, check_probability, create_grid, Grid};
use super::rng::GameRng;

/// Default row count.
pub const DEFAULT_ROWS: usize = 5;

/// Default column count.
pub const DEFAULT_COLS: usize = 5;

/// Default chance that a light starts on.
pub const DEFAULT_LIT_PROBABILITY: f64 = 0.25;

/// Configuration for a new board.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of rows (at least 1).
    pub rows: usize,

    /// Number of columns (at least 1).
    pub cols: usize,

    /// Independent chance that each cell starts lit, in `[0, 1]`.
    pub lit_probability: f64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            lit_probability: DEFAULT_LIT_PROBABILITY,
        }
    }
}

impl BoardConfig {
    /// Create a configuration with explicit values.
    #[must_use]
    pub fn new(rows: usize, cols: usize, lit_probability: f64) -> Self {
        Self {
            rows,
            cols,
            lit_probability,
        }
    }

    /// Create a configuration from signed dimensions, as passed in from Python.
    ///
    /// Negative values are rejected with the same message as zero ones.
    pub fn from_signed(rows: i64, cols: i64, lit_probability: f64) -> Result<Self, GridError> {
        let out_of_range = || GridError::DimensionOutOfRange { rows, cols };
        let config = Self::new(
            usize::try_from(rows).map_err(|_| out_of_range())?,
            usize::try_from(cols).map_err(|_| out_of_range())?,
            lit_probability,
        );
        config.validate()?;
        Ok(config)
    }

    /// Set the row count.
    #[must_use]
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    /// Set the column count.
    #[must_use]
    pub fn with_cols(mut self, cols: usize) -> Self {
        self.cols = cols;
        self
    }

    /// Set the starting lit probability.
    #[must_use]
    pub fn with_lit_probability(mut self, p: f64) -> Self {
        self.lit_probability = p;
        self
    }

    /// Check the board-creation preconditions.
    pub fn validate(&self) -> Result<(), GridError> {
        check_dimensions(self.rows, self.cols)?;
        check_probability(self.lit_probability)
    }

    /// Create a randomized grid from this configuration.
    pub fn create_grid(&self, rng: &mut GameRng) -> Result<Grid, GridError> {
        create_grid(self.rows, self.cols, self.lit_probability, rng)
    }
}
