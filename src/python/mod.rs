//! Python bindings for the lights-out puzzle core.
//!
//! This module provides PyO3 bindings so a Python front end can drive the
//! puzzle without reimplementing its rules.
//!
//! # Quick Start
//!
//! ```python
//! import lights_out as lo
//!
//! session = lo.GameSession(rows=5, cols=5, chance_light_starts_on=0.25, seed=42)
//!
//! # Press the cell a click handler identified by its key
//! won = session.toggle_key("2-3")
//!
//! # Render from a numpy view of the board
//! board = session.grid.to_numpy()
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::GridError;

mod py_core;
mod py_session;

pub use py_core::*;
pub use py_session::*;

impl From<GridError> for PyErr {
    fn from(err: GridError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// lights_out: Lights Out puzzle logic.
///
/// This module provides:
/// - Grid creation with a seeded lit probability
/// - The neighbor toggle and win check
/// - A game session object for front ends
#[pymodule]
fn lights_out(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core types
    m.add_class::<PyCoordinate>()?;
    m.add_class::<PyGrid>()?;

    // Session
    m.add_class::<PyGameSession>()?;

    // Operations
    m.add_function(wrap_pyfunction!(create_grid, m)?)?;
    m.add_function(wrap_pyfunction!(toggle_around, m)?)?;

    Ok(())
}
