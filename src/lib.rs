//! # rust-automata
//!
//! Deterministic cellular automata on rectangular grids.
//!
//! ## Engines
//!
//! 1. **Abelian sandpile**: piles of four or more grains topple onto their
//!    orthogonal neighbors until the grid is stable.
//!
//! 2. **Life**: Conway's Game of Life on a square grid, a triangular variant,
//!    and a generic form driven by an explicit neighbor graph.
//!
//! Every engine copies its input, so callers keep their grid. Borders are
//! either a sink, where cells beyond the edge are permanently empty, or
//! periodic, where the grid wraps into a torus.
//!
//! ## Modules
//!
//! - `core`: Grid, border policies, Life rules, configuration, errors, RNG
//! - `sandpile`: Sandpile relaxation
//! - `life`: Square, triangular and generic Life
//! - `python`: NumPy bindings (behind the `python` feature)

pub mod core;
pub mod life;
pub mod sandpile;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    AutomataError, Border, Grains, Grid, GridRng, LifeConfig, Result, Rule, SandpileConfig,
};

pub use crate::sandpile::{is_stable, sandpile, Sandpile, SandpileOutcome, TOPPLE_THRESHOLD};

pub use crate::life::{
    life, life_generic, lifetri, AdjacencyMatrix, GenericLife, Orientation, SquareLife, TriLife,
};
