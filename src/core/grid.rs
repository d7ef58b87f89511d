//! The puzzle grid.
//!
//! ## Layout
//!
//! Cells are stored row-major in an `im::Vector<bool>`, so cloning a grid is
//! O(1) and a transition can hand back a new grid that shares structure with
//! the old one.
//!
//! ## Text form
//!
//! `Display` and `FromStr` use one line per row, `O` for a lit cell and `.`
//! for an unlit one:
//!
//! ```
//! use lights_out::core::{Coordinate, Grid};
//!
//! let grid: Grid = "...\nOO.\n...".parse().unwrap();
//! assert_eq!(grid.rows(), 3);
//! assert_eq!(grid.get(Coordinate::new(1, 0)), Some(true));
//! assert_eq!(grid.to_string(), "...\nOO.\n...\n");
//! ```

use std::str::FromStr;

use im::Vector;
use serde::{Deserialize, Serialize};

use super::coord::Coordinate;
use super::error::GridError;
use super::rng::GameRng;

/// Character for a lit cell in the text form.
pub const LIT_CHAR: char = 'O';

/// Character for an unlit cell in the text form.
pub const OFF_CHAR: char = '.';

/// A `rows × cols` board of lit/unlit cells.
///
/// Dimensions are fixed at construction. Every constructor validates shape,
/// so a `Grid` always has exactly `rows * cols` cells.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<bool>>", into = "Vec<Vec<bool>>")]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vector<bool>,
}

/// Build a randomized grid.
///
/// Each cell is drawn independently in row-major order: lit when a uniform
/// sample in `[0, 1)` is strictly less than `lit_probability`. A probability of
/// `0.0` therefore yields an all-off grid and `1.0` an all-lit one.
///
/// Inputs are checked before anything is sampled.
pub fn create_grid(
    rows: usize,
    cols: usize,
    lit_probability: f64,
    rng: &mut GameRng,
) -> Result<Grid, GridError> {
    let len = check_dimensions(rows, cols)?;
    check_probability(lit_probability)?;

    let cells = (0..len)
        .map(|_| rng.gen_unit() < lit_probability)
        .collect();

    log::trace!("created {}x{} grid (p = {})", rows, cols, lit_probability);

    Ok(Grid { rows, cols, cells })
}

/// Largest row or column count; every cell must be addressable by a `Coordinate`.
pub const MAX_DIMENSION: usize = i32::MAX as usize;

/// Check `rows` and `cols` and return the cell count.
pub(crate) fn check_dimensions(rows: usize, cols: usize) -> Result<usize, GridError> {
    let in_range = |n: usize| (1..=MAX_DIMENSION).contains(&n);
    if !in_range(rows) || !in_range(cols) {
        return Err(GridError::InvalidDimension { rows, cols });
    }
    rows.checked_mul(cols)
        .ok_or(GridError::InvalidDimension { rows, cols })
}

pub(crate) fn check_probability(p: f64) -> Result<(), GridError> {
    // NaN fails `contains` as well.
    if !(0.0..=1.0).contains(&p) {
        return Err(GridError::InvalidProbability(p));
    }
    Ok(())
}

impl Grid {
    /// Create an all-off grid.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        let len = check_dimensions(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: Vector::from(vec![false; len]),
        })
    }

    /// Create a grid from nested rows.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, GridError> {
        let row_count = rows.len();
        let cols = rows.first().map_or(0, Vec::len);
        check_dimensions(row_count, cols)?;

        let mut cells = Vector::new();
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != cols {
                return Err(GridError::RaggedRow {
                    row,
                    expected: cols,
                    got: values.len(),
                });
            }
            cells.extend(values);
        }

        Ok(Self {
            rows: row_count,
            cols,
            cells,
        })
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total cell count (`rows * cols`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; grids have at least one cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Is `coord` inside this grid?
    #[must_use]
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.index_of(coord).is_some()
    }

    /// Cell state, or `None` if `coord` is out of bounds.
    #[must_use]
    pub fn get(&self, coord: Coordinate) -> Option<bool> {
        self.index_of(coord).map(|i| self.cells[i])
    }

    /// Iterate `(coordinate, lit)` pairs in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, bool)> + '_ {
        let cols = self.cols;
        self.cells.iter().enumerate().map(move |(i, &lit)| {
            // Dimensions are capped at MAX_DIMENSION, so both fit in i32.
            let row = i32::try_from(i / cols).unwrap_or(i32::MAX);
            let col = i32::try_from(i % cols).unwrap_or(i32::MAX);
            (Coordinate::new(row, col), lit)
        })
    }

    /// Copy out as nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        let flat: Vec<bool> = self.cells.iter().copied().collect();
        flat.chunks(self.cols).map(<[bool]>::to_vec).collect()
    }

    /// Number of lit cells.
    #[must_use]
    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|&&lit| lit).count()
    }

    /// True when every cell is off.
    #[must_use]
    pub fn is_all_off(&self) -> bool {
        self.cells.iter().all(|&lit| !lit)
    }

    /// Flip one cell. No-op when out of bounds.
    ///
    /// Kept crate-private: the only public mutation is the neighbor spread
    /// in [`crate::rules::apply_toggle`].
    pub(crate) fn flip(&mut self, coord: Coordinate) {
        if let Some(i) = self.index_of(coord) {
            let cell = &mut self.cells[i];
            *cell = !*cell;
        }
    }

    fn index_of(&self, coord: Coordinate) -> Option<usize> {
        let row = usize::try_from(coord.row).ok()?;
        let col = usize::try_from(coord.col).ok()?;
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }
}

impl TryFrom<Vec<Vec<bool>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<bool>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<bool>> {
    fn from(grid: Grid) -> Self {
        grid.to_rows()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, &lit) in self.cells.iter().enumerate() {
            let ch = if lit { LIT_CHAR } else { OFF_CHAR };
            write!(f, "{}", ch)?;
            if (i + 1) % self.cols == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();

        for line in s.lines().filter(|l| !l.trim().is_empty()) {
            let row = rows.len();
            let cells = line
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|ch| match ch {
                    LIT_CHAR => Ok(true),
                    OFF_CHAR => Ok(false),
                    _ => Err(GridError::InvalidCell { row, ch }),
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(cells);
        }

        Self::from_rows(rows)
    }
}
