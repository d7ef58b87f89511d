//! Session bindings for Python.

use pyo3::prelude::*;

use crate::core::{BoardConfig, Coordinate, GameRng};
use crate::session::GameSession;

use super::py_core::PyGrid;

/// Python wrapper for GameSession.
///
/// Owns one board. A front end calls `toggle` from its click handler and
/// re-renders from `grid` and `has_won`.
#[pyclass(name = "GameSession")]
pub struct PyGameSession {
    inner: GameSession,
}

#[pymethods]
impl PyGameSession {
    /// Start a new game.
    ///
    /// # Arguments
    /// - rows, cols: Board size
    /// - chance_light_starts_on: Probability each light starts on
    /// - seed: RNG seed; OS entropy when omitted
    #[new]
    #[pyo3(signature = (rows = 5, cols = 5, chance_light_starts_on = 0.25, seed = None))]
    fn new(rows: i64, cols: i64, chance_light_starts_on: f64, seed: Option<u64>) -> PyResult<Self> {
        let config = BoardConfig::from_signed(rows, cols, chance_light_starts_on)?;
        let rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Ok(Self {
            inner: GameSession::with_rng(config, rng)?,
        })
    }

    /// Current board (a snapshot).
    #[getter]
    fn grid(&self) -> PyGrid {
        PyGrid(self.inner.grid().clone())
    }

    #[getter]
    fn has_won(&self) -> bool {
        self.inner.has_won()
    }

    /// Press a cell. Returns True when the board is solved.
    fn toggle(&mut self, row: i32, col: i32) -> bool {
        self.inner.toggle(Coordinate::new(row, col)).is_won()
    }

    /// Press the cell named by a `"row-col"` key.
    fn toggle_key(&mut self, key: &str) -> PyResult<bool> {
        Ok(self.inner.toggle_key(key)?.is_won())
    }

    /// Start over with a fresh board.
    fn reset(&mut self) -> PyResult<()> {
        Ok(self.inner.reset()?)
    }

    fn __repr__(&self) -> String {
        let grid = self.inner.grid();
        format!(
            "GameSession({}x{}, has_won={})",
            grid.rows(),
            grid.cols(),
            self.inner.has_won()
        )
    }
}
