//! Life on a triangular tessellation.
//!
//! Each grid cell is one triangle. Triangles alternate orientation along
//! rows and columns: `(row + col)` even is an upward triangle, odd is a
//! downward one. A triangle touches 12 others across its edges and corners,
//! reaching two columns left and right, so the working grid carries a
//! two-cell sink frame.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::stencil::{next_generation, Offset};
use crate::core::{AutomataError, Border, Grid, Result, Rule};

/// Frame width around the working grid.
const PAD: usize = 2;

/// Neighbors of an upward triangle: three in the row above, five below.
const UP_OFFSETS: &[Offset] = &[
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -2),
    (0, -1),
    (0, 1),
    (0, 2),
    (1, -2),
    (1, -1),
    (1, 0),
    (1, 1),
    (1, 2),
];

/// Neighbors of a downward triangle: mirror image of [`UP_OFFSETS`].
const DOWN_OFFSETS: &[Offset] = &[
    (-1, -2),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (-1, 2),
    (0, -2),
    (0, -1),
    (0, 1),
    (0, 2),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Orientation of a triangle in the tessellation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Apex up; even `row + col`.
    Up,
    /// Apex down; odd `row + col`.
    Down,
}

impl Orientation {
    /// Orientation of the triangle at `(row, col)`.
    #[must_use]
    pub const fn of(row: usize, col: usize) -> Self {
        if (row + col) % 2 == 0 {
            Self::Up
        } else {
            Self::Down
        }
    }

    /// The 12 neighbor displacements for this orientation.
    #[must_use]
    pub const fn offsets(self) -> &'static [Offset] {
        match self {
            Self::Up => UP_OFFSETS,
            Self::Down => DOWN_OFFSETS,
        }
    }
}

/// Triangular Life engine.
///
/// Uses [`Rule::triangular`] by default: a live triangle survives with 4, 5
/// or 6 live neighbors, a dead one is born with exactly 4.
#[derive(Clone, Debug)]
pub struct TriLife {
    rule: Rule,
}

impl Default for TriLife {
    fn default() -> Self {
        Self {
            rule: Rule::triangular(),
        }
    }
}

impl TriLife {
    /// Engine with the default triangular rule.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the rule.
    #[must_use]
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rule = rule;
        self
    }

    /// Active rule.
    #[must_use]
    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// Advance `initial` by exactly `nsteps` generations with a sink border.
    ///
    /// # Errors
    ///
    /// [`AutomataError::DimensionTooSmall`] for a grid without cells.
    pub fn run(&self, initial: &Grid<bool>, nsteps: usize) -> Result<Grid<bool>> {
        let (rows, cols) = initial.shape();
        if rows == 0 || cols == 0 {
            return Err(AutomataError::DimensionTooSmall {
                rows,
                cols,
                min_rows: 1,
                min_cols: 1,
            });
        }

        debug!(
            rows,
            cols,
            nsteps,
            rule = %self.rule,
            population = initial.population(),
            "running triangular life"
        );

        // PAD is even, so padding leaves every cell's orientation unchanged.
        let mut mesh = initial.padded(PAD, false);
        for _ in 0..nsteps {
            Border::Sink.refresh(&mut mesh, PAD, false);
            mesh = next_generation(&mesh, PAD, &self.rule, |r, c| {
                Orientation::of(r, c).offsets()
            });
        }

        let grid = mesh.interior(PAD)?;
        debug!(population = grid.population(), "triangular life finished");
        Ok(grid)
    }
}

/// Run triangular Life for `nsteps` generations with a sink border.
pub fn lifetri(initial: &Grid<bool>, nsteps: usize) -> Result<Grid<bool>> {
    TriLife::new().run(initial, nsteps)
}
