//! Python bindings for the automata engines.
//!
//! Grids cross the boundary as NumPy arrays and are copied on the way in, so
//! the caller's array is never modified.
//!
//! # Quick Start
//!
//! ```python
//! import numpy as np
//! import rust_automata as ca
//!
//! pile = np.zeros((5, 5), dtype=np.int64)
//! pile[2, 2] = 16
//! stable = ca.sandpile(pile)
//!
//! glider = np.zeros((5, 5), dtype=bool)
//! glider[[0, 1, 2, 2, 2], [1, 2, 0, 1, 2]] = True
//! later = ca.life(glider, 4, periodic=True)
//! ```

use pyo3::prelude::*;

mod py_engines;

pub use py_engines::*;

/// rust-automata: sandpile and Life engines over NumPy arrays.
#[pymodule]
fn rust_automata(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_engines::sandpile, m)?)?;
    m.add_function(wrap_pyfunction!(py_engines::life, m)?)?;
    m.add_function(wrap_pyfunction!(py_engines::lifetri, m)?)?;
    m.add_function(wrap_pyfunction!(py_engines::life_generic, m)?)?;
    Ok(())
}
