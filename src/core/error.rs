//! Error type shared by every engine.
//!
//! All validation happens before any cell is touched, so an `Err` always
//! means the caller's input was rejected and no work was done, except for
//! [`AutomataError::Convergence`], which is raised mid-run.

use thiserror::Error;

/// Errors raised by the automata engines.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AutomataError {
    /// Input is not rectangular, or an adjacency matrix is not square or
    /// does not match the state vector.
    #[error("shape error: {0}")]
    Shape(String),

    /// Grid has no interior cell once the border frame is added.
    #[error("grid {rows}x{cols} is too small: need at least {min_rows}x{min_cols}")]
    DimensionTooSmall {
        rows: usize,
        cols: usize,
        min_rows: usize,
        min_cols: usize,
    },

    /// Sandpile relaxation did not reach a stable state.
    #[error("sandpile did not stabilize after {iterations} relaxation passes")]
    Convergence { iterations: u64 },

    /// Values the engine refuses to coerce (negative grains, bad rule strings).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl AutomataError {
    pub(crate) fn shape(msg: impl Into<String>) -> Self {
        Self::Shape(msg.into())
    }

    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AutomataError>;
