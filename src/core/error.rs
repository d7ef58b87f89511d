//! Error types for grid construction and parsing.

use thiserror::Error;

/// Errors raised while building or parsing a grid.
///
/// Every variant is a caller-input error detected before any state changes.
/// Toggling never fails, so the transition engine has no error type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// Rows or columns were zero.
    #[error("invalid grid dimensions {rows}x{cols}: both must be at least 1")]
    InvalidDimension {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },

    /// Signed dimensions from a foreign caller did not fit in `usize`.
    #[error("invalid grid dimensions {rows}x{cols}: both must be at least 1")]
    DimensionOutOfRange {
        /// Requested row count.
        rows: i64,
        /// Requested column count.
        cols: i64,
    },

    /// Lit probability was outside `[0, 1]` or NaN.
    #[error("invalid lit probability {0}: must be within [0, 1]")]
    InvalidProbability(f64),

    /// A row had a different length than the first row.
    #[error("row {row} has {got} cells, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        got: usize,
    },

    /// Text form contained something other than `O` or `.`.
    #[error("unexpected character {ch:?} in row {row}")]
    InvalidCell {
        /// Row the character was found in.
        row: usize,
        /// The character.
        ch: char,
    },

    /// A cell key was not of the form `row-col`.
    #[error("invalid cell key {0:?}: expected \"row-col\"")]
    InvalidCoordinate(String),
}
