//! Cell coordinates.
//!
//! A `Coordinate` is any `(row, col)` pair, including ones that fall outside
//! a grid. Bounds are a property of the grid, not of the coordinate, so the
//! transition engine can clip neighbors at the edge without special cases.
//!
//! ## Cell keys
//!
//! Presentation layers tag each rendered cell with a `"row-col"` key.
//! `Coordinate` formats to that key and parses back from it:
//!
//! ```
//! use lights_out::core::Coordinate;
//!
//! let coord: Coordinate = "2-3".parse().unwrap();
//! assert_eq!(coord, Coordinate::new(2, 3));
//! assert_eq!(coord.to_string(), "2-3");
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::GridError;

/// A `(row, col)` position. Not necessarily inside any grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    /// Row index (0 is the top row).
    pub row: i32,
    /// Column index (0 is the leftmost column).
    pub col: i32,
}

impl Coordinate {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Offset by `(d_row, d_col)`.
    ///
    /// Returns `None` on `i32` overflow; such a position is outside every grid.
    #[must_use]
    pub fn offset(self, d_row: i32, d_col: i32) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add(d_row)?,
            col: self.col.checked_add(d_col)?,
        })
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

impl FromStr for Coordinate {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GridError::InvalidCoordinate(s.to_string());

        // Split on the first '-' past index 0 so a negative row still parses.
        let split = s
            .char_indices()
            .skip(1)
            .find(|&(_, c)| c == '-')
            .map(|(i, _)| i)
            .ok_or_else(invalid)?;

        let row = s[..split].trim().parse().map_err(|_| invalid())?;
        let col = s[split + 1..].trim().parse().map_err(|_| invalid())?;

        Ok(Self::new(row, col))
    }
}
