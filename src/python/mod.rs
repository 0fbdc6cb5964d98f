//! Python bindings for the rust-combat engine.
//!
//! # Quick Start
//!
//! ```python
//! import rust_combat as combat
//!
//! text = open("input.txt").read()
//! part1, part2 = combat.solve(text)
//!
//! game = combat.CombatGame(text, recursive=True)
//! winner, score = game.play()
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::CombatError;

mod py_games;

pub use py_games::*;

impl From<CombatError> for PyErr {
    fn from(err: CombatError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// rust-combat: Combat and Recursive Combat card game engine.
#[pymodule]
fn rust_combat(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_play, m)?)?;
    m.add_function(wrap_pyfunction!(py_play_recursive, m)?)?;
    m.add_function(wrap_pyfunction!(py_solve, m)?)?;

    m.add_class::<PyCombatGame>()?;

    Ok(())
}
