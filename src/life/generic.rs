//! Life on an arbitrary neighbor graph.
//!
//! Cells have no geometry here: an N×N boolean adjacency matrix says which
//! cells neighbor which, and the state is a flat vector in the same cell
//! order. The geometric engines are special cases whose adjacency follows
//! from the grid; [`AdjacencyMatrix::moore`] and
//! [`AdjacencyMatrix::triangular`] build those matrices explicitly.

use rayon::prelude::*;
use smallvec::SmallVec;
use tracing::debug;

use super::square::MOORE_OFFSETS;
use super::stencil::Offset;
use super::triangular::Orientation;
use crate::core::{AutomataError, Border, Grid, Result, Rule};

/// Neighbor indices of one cell. Geometric neighborhoods fit inline.
type NeighborList = SmallVec<[usize; 12]>;

/// Validated square adjacency matrix.
///
/// Row `i`, column `j` is true when cell `j` is a neighbor of cell `i`. The
/// matrix need not be symmetric.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    entries: Grid<bool>,
    neighbors: Vec<NeighborList>,
}

impl AdjacencyMatrix {
    /// Wrap a square boolean grid.
    ///
    /// # Errors
    ///
    /// [`AutomataError::Shape`] when the grid is not square.
    pub fn from_grid(entries: Grid<bool>) -> Result<Self> {
        let (rows, cols) = entries.shape();
        if rows != cols {
            return Err(AutomataError::shape(format!(
                "adjacency matrix must be square, got {rows}x{cols}"
            )));
        }
        Ok(Self::index(entries))
    }

    /// Precompute neighbor lists of a square grid.
    fn index(entries: Grid<bool>) -> Self {
        let neighbors = entries
            .iter_rows()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter(|&(_, &adjacent)| adjacent)
                    .map(|(j, _)| j)
                    .collect()
            })
            .collect();
        Self { entries, neighbors }
    }

    /// Build from rows of booleans.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self> {
        Self::from_grid(Grid::from_rows(rows)?)
    }

    /// Build an N×N matrix from a predicate over `(cell, neighbor)`.
    pub fn from_fn(side: usize, mut adjacent: impl FnMut(usize, usize) -> bool) -> Self {
        let mut entries: Grid<bool> = Grid::new(side, side);
        for i in 0..side {
            for j in 0..side {
                entries[(i, j)] = adjacent(i, j);
            }
        }
        Self::index(entries)
    }

    /// Adjacency of a `rows`×`cols` square grid under the Moore neighborhood.
    ///
    /// Cells are numbered row-major. With [`Border::Periodic`] neighbors wrap
    /// around the edges; on a torus narrower than 3 cells a neighbor reached
    /// twice is still counted once.
    #[must_use]
    pub fn moore(rows: usize, cols: usize, border: Border) -> Self {
        Self::from_offsets(rows, cols, border, |_, _| MOORE_OFFSETS)
    }

    /// Adjacency of a `rows`×`cols` triangular tessellation with a sink
    /// border.
    #[must_use]
    pub fn triangular(rows: usize, cols: usize) -> Self {
        Self::from_offsets(rows, cols, Border::Sink, |r, c| {
            Orientation::of(r, c).offsets()
        })
    }

    fn from_offsets(
        rows: usize,
        cols: usize,
        border: Border,
        offsets_for: impl Fn(usize, usize) -> &'static [Offset],
    ) -> Self {
        let side = rows * cols;
        let mut entries: Grid<bool> = Grid::new(side, side);
        for r in 0..rows {
            for c in 0..cols {
                for &(dr, dc) in offsets_for(r, c) {
                    let target = match border {
                        Border::Sink => in_bounds(r, dr, rows).zip(in_bounds(c, dc, cols)),
                        Border::Periodic => Some((wrapped(r, dr, rows), wrapped(c, dc, cols))),
                    };
                    if let Some((nr, nc)) = target {
                        // A tiny torus can wrap a cell onto itself.
                        if (nr, nc) != (r, c) {
                            entries[(r * cols + c, nr * cols + nc)] = true;
                        }
                    }
                }
            }
        }
        Self::index(entries)
    }

    /// Number of cells.
    #[must_use]
    pub fn side(&self) -> usize {
        self.neighbors.len()
    }

    /// True when `j` is a neighbor of `i`.
    #[must_use]
    pub fn is_neighbor(&self, i: usize, j: usize) -> bool {
        self.entries.get(i, j).copied().unwrap_or(false)
    }

    /// Indices of the neighbors of cell `i`.
    #[must_use]
    pub fn neighbors(&self, i: usize) -> &[usize] {
        self.neighbors.get(i).map(|n| n.as_slice()).unwrap_or_default()
    }

    /// The matrix as a boolean grid.
    #[must_use]
    pub fn as_grid(&self) -> &Grid<bool> {
        &self.entries
    }

    /// Live neighbors of every cell.
    fn live_counts(&self, state: &[bool]) -> Vec<u32> {
        self.neighbors
            .par_iter()
            .map(|ns| ns.iter().filter(|&&j| state[j]).count() as u32)
            .collect()
    }
}

fn in_bounds(i: usize, delta: isize, len: usize) -> Option<usize> {
    i.checked_add_signed(delta).filter(|&n| n < len)
}

fn wrapped(i: usize, delta: isize, len: usize) -> usize {
    (i as isize + delta).rem_euclid(len as isize) as usize
}

/// Adjacency-driven Life engine.
#[derive(Clone, Debug)]
pub struct GenericLife {
    rule: Rule,
}

impl GenericLife {
    /// Engine with the given rule.
    #[must_use]
    pub fn new(rule: Rule) -> Self {
        Self { rule }
    }

    /// Active rule.
    #[must_use]
    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// Advance the state vector by exactly `nsteps` generations.
    ///
    /// # Errors
    ///
    /// [`AutomataError::Shape`] when the matrix side differs from the state
    /// length.
    pub fn run(
        &self,
        matrix: &AdjacencyMatrix,
        initial: &[bool],
        nsteps: usize,
    ) -> Result<Vec<bool>> {
        if matrix.side() != initial.len() {
            return Err(AutomataError::shape(format!(
                "adjacency matrix side {} does not match state length {}",
                matrix.side(),
                initial.len()
            )));
        }

        debug!(
            cells = initial.len(),
            nsteps,
            rule = %self.rule,
            "running generic life"
        );

        let mut state = initial.to_vec();
        for _ in 0..nsteps {
            let counts = matrix.live_counts(&state);
            state = state
                .iter()
                .zip(counts)
                .map(|(&alive, count)| self.rule.next_state(alive, count))
                .collect();
        }

        debug!(
            population = state.iter().filter(|&&c| c).count(),
            "generic life finished"
        );
        Ok(state)
    }
}

/// Run Life over an adjacency matrix for `nsteps` generations.
///
/// Live cells survive when their live-neighbor count is in `environment`;
/// dead cells are born when it is in `fertility`.
pub fn life_generic(
    matrix: &AdjacencyMatrix,
    initial: &[bool],
    nsteps: usize,
    environment: impl IntoIterator<Item = u32>,
    fertility: impl IntoIterator<Item = u32>,
) -> Result<Vec<bool>> {
    GenericLife::new(Rule::new(environment, fertility)).run(matrix, initial, nsteps)
}
