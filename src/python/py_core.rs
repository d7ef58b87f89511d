//! Core type bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::prelude::*;

use crate::core::{BoardConfig, Coordinate, GameRng, Grid};
use crate::rules::toggle_around as toggle_grid;

/// Python wrapper for Coordinate.
#[pyclass(name = "Coordinate")]
#[derive(Clone, Copy, Debug)]
pub struct PyCoordinate(pub Coordinate);

#[pymethods]
impl PyCoordinate {
    #[new]
    fn new(row: i32, col: i32) -> Self {
        Self(Coordinate::new(row, col))
    }

    /// Parse a `"row-col"` cell key.
    #[staticmethod]
    fn from_key(key: &str) -> PyResult<Self> {
        Ok(Self(key.parse()?))
    }

    #[getter]
    fn row(&self) -> i32 {
        self.0.row
    }

    #[getter]
    fn col(&self) -> i32 {
        self.0.col
    }

    /// The `"row-col"` cell key.
    fn key(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!("Coordinate({}, {})", self.0.row, self.0.col)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut hasher = DefaultHasher::new();
        self.0.hash(&mut hasher);
        hasher.finish()
    }
}

/// Python wrapper for Grid.
///
/// Immutable from Python: moves go through `toggle_around` or a `GameSession`.
#[pyclass(name = "Grid")]
#[derive(Clone, Debug)]
pub struct PyGrid(pub Grid);

#[pymethods]
impl PyGrid {
    /// Build a grid from nested lists of booleans.
    #[new]
    fn new(rows: Vec<Vec<bool>>) -> PyResult<Self> {
        Ok(Self(Grid::from_rows(rows)?))
    }

    /// Parse the `O`/`.` text form.
    #[staticmethod]
    fn parse(text: &str) -> PyResult<Self> {
        Ok(Self(text.parse()?))
    }

    #[getter]
    fn rows(&self) -> usize {
        self.0.rows()
    }

    #[getter]
    fn cols(&self) -> usize {
        self.0.cols()
    }

    /// Cell state, or None when out of bounds.
    fn get(&self, row: i32, col: i32) -> Option<bool> {
        self.0.get(Coordinate::new(row, col))
    }

    fn lit_count(&self) -> usize {
        self.0.lit_count()
    }

    fn is_all_off(&self) -> bool {
        self.0.is_all_off()
    }

    /// Nested lists, one per row.
    fn to_list(&self) -> Vec<Vec<bool>> {
        self.0.to_rows()
    }

    /// `rows x cols` bool array.
    fn to_numpy<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<bool>>> {
        let flat: Vec<bool> = self.0.cells().map(|(_, lit)| lit).collect();
        PyArray1::from_vec_bound(py, flat)
            .reshape([self.0.rows(), self.0.cols()])
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{}", e)))
    }

    fn __len__(&self) -> usize {
        self.0.len()
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!("Grid({}x{}, lit={})", self.0.rows(), self.0.cols(), self.0.lit_count())
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Create a random grid.
///
/// Without a seed the board is drawn from OS entropy.
#[pyfunction]
#[pyo3(signature = (rows = 5, cols = 5, lit_probability = 0.25, seed = None))]
pub fn create_grid(
    rows: i64,
    cols: i64,
    lit_probability: f64,
    seed: Option<u64>,
) -> PyResult<PyGrid> {
    let config = BoardConfig::from_signed(rows, cols, lit_probability)?;
    let mut rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);
    Ok(PyGrid(config.create_grid(&mut rng)?))
}

/// Toggle a cell and its neighbors.
///
/// Returns `(next_grid, has_won)`; the input grid is unchanged.
#[pyfunction]
pub fn toggle_around(grid: &PyGrid, row: i32, col: i32) -> (PyGrid, bool) {
    let next = toggle_grid(&grid.0, Coordinate::new(row, col));
    (PyGrid(next.grid), next.has_won)
}
