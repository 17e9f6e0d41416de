//! NumPy entry points for the automata engines.

use numpy::{PyArray1, PyArray2, PyArrayMethods, PyReadonlyArray2, PyReadonlyArrayDyn};
use pyo3::prelude::*;

use crate::core::{AutomataError, Grains, Grid};
use crate::life::AdjacencyMatrix;

fn to_py_err(err: AutomataError) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
}

fn bool_grid(array: &PyReadonlyArray2<'_, bool>) -> PyResult<Grid<bool>> {
    let view = array.as_array();
    let (rows, cols) = view.dim();
    Grid::from_vec(rows, cols, view.iter().copied().collect()).map_err(to_py_err)
}

fn to_numpy<'py, T: numpy::Element>(
    py: Python<'py>,
    grid: Grid<T>,
) -> PyResult<Bound<'py, PyArray2<T>>> {
    let (rows, cols) = grid.shape();
    PyArray1::from_vec_bound(py, grid.into_vec())
        .reshape([rows, cols])
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{}", e)))
}

/// Relax an integer sandpile until every pile holds fewer than four grains.
///
/// Returns a new int64 array of the same shape.
#[pyfunction]
#[pyo3(signature = (initial, periodic = false))]
pub fn sandpile<'py>(
    py: Python<'py>,
    initial: PyReadonlyArray2<'py, i64>,
    periodic: bool,
) -> PyResult<Bound<'py, PyArray2<i64>>> {
    let view = initial.as_array();
    let (rows, cols) = view.dim();
    let grid = Grid::<Grains>::from_signed(rows, cols, view.iter().copied()).map_err(to_py_err)?;
    let stable = py
        .allow_threads(|| crate::sandpile::sandpile(&grid, periodic))
        .map_err(to_py_err)?;
    to_numpy(py, stable.map(|&g| i64::from(g)))
}

/// Run Conway's Game of Life on a boolean array.
#[pyfunction]
#[pyo3(signature = (initial, nsteps, periodic = false))]
pub fn life<'py>(
    py: Python<'py>,
    initial: PyReadonlyArray2<'py, bool>,
    nsteps: usize,
    periodic: bool,
) -> PyResult<Bound<'py, PyArray2<bool>>> {
    let grid = bool_grid(&initial)?;
    let next = py
        .allow_threads(|| crate::life::life(&grid, nsteps, periodic))
        .map_err(to_py_err)?;
    to_numpy(py, next)
}

/// Run triangular Life on a boolean array with a sink border.
#[pyfunction]
pub fn lifetri<'py>(
    py: Python<'py>,
    initial: PyReadonlyArray2<'py, bool>,
    nsteps: usize,
) -> PyResult<Bound<'py, PyArray2<bool>>> {
    let grid = bool_grid(&initial)?;
    let next = py
        .allow_threads(|| crate::life::lifetri(&grid, nsteps))
        .map_err(to_py_err)?;
    to_numpy(py, next)
}

/// Run Life over a 0/1 adjacency matrix.
///
/// `initial` may have any shape; it is flattened in row-major order and the
/// result is returned flat.
#[pyfunction]
pub fn life_generic<'py>(
    py: Python<'py>,
    matrix: PyReadonlyArray2<'py, i64>,
    initial: PyReadonlyArrayDyn<'py, bool>,
    nsteps: usize,
    environment: Vec<u32>,
    fertility: Vec<u32>,
) -> PyResult<Bound<'py, PyArray1<bool>>> {
    let view = matrix.as_array();
    let (rows, cols) = view.dim();
    let mut entries = Vec::with_capacity(rows * cols);
    for &v in view.iter() {
        match v {
            0 => entries.push(false),
            1 => entries.push(true),
            _ => {
                return Err(to_py_err(AutomataError::InvalidInput(format!(
                    "adjacency entries must be 0 or 1, got {v}"
                ))))
            }
        }
    }
    let matrix = Grid::from_vec(rows, cols, entries)
        .and_then(AdjacencyMatrix::from_grid)
        .map_err(to_py_err)?;
    let state: Vec<bool> = initial.as_array().iter().copied().collect();

    let next = py
        .allow_threads(|| {
            crate::life::life_generic(&matrix, &state, nsteps, environment, fertility)
        })
        .map_err(to_py_err)?;
    Ok(PyArray1::from_vec_bound(py, next))
}
