//! Abelian sandpile relaxation.

use tracing::{debug, trace, warn};

use crate::core::{AutomataError, Border, Grains, Grid, Result, SandpileConfig};

/// A pile at or above this many grains topples.
pub const TOPPLE_THRESHOLD: Grains = 4;

/// Frame width around the working grid.
const PAD: usize = 1;

/// Final grid of a relaxation run and the number of passes it took.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SandpileOutcome {
    /// Stable grid, same shape as the input.
    pub grid: Grid<Grains>,
    /// Number of toppling passes performed.
    pub iterations: u64,
}

/// Sandpile engine.
///
/// Every pass finds the full unstable set first, then topples all of it at
/// once: each unstable pile loses [`TOPPLE_THRESHOLD`] grains and every
/// orthogonal neighbor gains one. The final configuration does not depend on
/// toppling order, so this matches sequential relaxation.
#[derive(Clone, Debug, Default)]
pub struct Sandpile {
    config: SandpileConfig,
}

impl Sandpile {
    /// Create an engine with the given configuration.
    #[must_use]
    pub fn new(config: SandpileConfig) -> Self {
        Self { config }
    }

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> &SandpileConfig {
        &self.config
    }

    /// Relax `initial` until no pile holds [`TOPPLE_THRESHOLD`] grains.
    ///
    /// The caller's grid is copied, never modified.
    ///
    /// # Errors
    ///
    /// - [`AutomataError::DimensionTooSmall`] for a grid without cells.
    /// - [`AutomataError::InvalidInput`] when the total mass does not fit in
    ///   [`Grains`].
    /// - [`AutomataError::Convergence`] when a periodic pile is too heavy to
    ///   ever stabilize, or the configured pass cap is exceeded.
    pub fn relax(&self, initial: &Grid<Grains>) -> Result<SandpileOutcome> {
        let (rows, cols) = initial.shape();
        if rows == 0 || cols == 0 {
            return Err(AutomataError::DimensionTooSmall {
                rows,
                cols,
                min_rows: 1,
                min_cols: 1,
            });
        }

        let mass = initial.total();
        if mass > u64::from(Grains::MAX) {
            return Err(AutomataError::invalid(format!(
                "total mass {mass} exceeds {} grains",
                Grains::MAX
            )));
        }

        let border = self.config.border;
        // Without a sink, mass is conserved; a stable grid holds at most
        // threshold - 1 grains per cell.
        let capacity = (initial.len() as u64) * u64::from(TOPPLE_THRESHOLD - 1);
        if border.is_periodic() && mass > capacity {
            warn!(mass, capacity, "periodic sandpile can never stabilize");
            return Err(AutomataError::Convergence { iterations: 0 });
        }

        debug!(rows, cols, ?border, mass, "relaxing sandpile");

        let mut mesh = initial.padded(PAD, 0);
        let stride = mesh.cols();
        let mut unstable: Vec<usize> = Vec::new();
        let mut iterations: u64 = 0;

        loop {
            settle_frame(border, &mut mesh);

            unstable.clear();
            for r in PAD..PAD + rows {
                let start = mesh.index_of(r, PAD);
                let row = &mesh.as_slice()[start..start + cols];
                unstable.extend(
                    row.iter()
                        .enumerate()
                        .filter(|&(_, &g)| g >= TOPPLE_THRESHOLD)
                        .map(|(c, _)| start + c),
                );
            }
            if unstable.is_empty() {
                break;
            }

            if let Some(max) = self.config.max_iterations {
                if iterations >= max {
                    warn!(iterations, "sandpile pass cap reached");
                    return Err(AutomataError::Convergence { iterations });
                }
            }

            let cells = mesh.as_mut_slice();
            for &i in &unstable {
                cells[i] -= TOPPLE_THRESHOLD;
            }
            for &i in &unstable {
                cells[i - stride] += 1;
                cells[i + stride] += 1;
                cells[i - 1] += 1;
                cells[i + 1] += 1;
            }

            iterations += 1;
            trace!(iteration = iterations, toppled = unstable.len(), "relaxation pass");
        }

        let grid = mesh.interior(PAD)?;
        debug!(iterations, remaining = grid.total(), "sandpile stable");
        Ok(SandpileOutcome { grid, iterations })
    }
}

/// Apply the border policy to grains that crossed into the frame.
///
/// A sink discards them. A periodic border hands each one to the interior
/// cell on the opposite edge, which is where it would have landed on a
/// torus, then clears the frame.
fn settle_frame(border: Border, mesh: &mut Grid<Grains>) {
    match border {
        Border::Sink => border.refresh(mesh, PAD, 0),
        Border::Periodic => {
            let (rows, cols) = mesh.shape();
            let (last_row, last_col) = (rows - 1, cols - 1);
            for c in PAD..last_col {
                let top = std::mem::take(&mut mesh[(0, c)]);
                mesh[(last_row - 1, c)] += top;
                let bottom = std::mem::take(&mut mesh[(last_row, c)]);
                mesh[(1, c)] += bottom;
            }
            for r in PAD..last_row {
                let left = std::mem::take(&mut mesh[(r, 0)]);
                mesh[(r, last_col - 1)] += left;
                let right = std::mem::take(&mut mesh[(r, last_col)]);
                mesh[(r, 1)] += right;
            }
        }
    }
}

/// True when no cell holds [`TOPPLE_THRESHOLD`] or more grains.
#[must_use]
pub fn is_stable(grid: &Grid<Grains>) -> bool {
    grid.as_slice().iter().all(|&g| g < TOPPLE_THRESHOLD)
}

/// Relax a sandpile with a sink border, or a periodic one when `periodic`.
///
/// ```
/// use rust_automata::core::Grid;
/// use rust_automata::sandpile::sandpile;
///
/// let pile = Grid::from_rows(&[[0u32, 0, 0], [0, 4, 0], [0, 0, 0]]).unwrap();
/// let stable = sandpile(&pile, false).unwrap();
/// assert_eq!(stable.to_rows(), vec![vec![0, 1, 0], vec![1, 0, 1], vec![0, 1, 0]]);
/// ```
pub fn sandpile(initial: &Grid<Grains>, periodic: bool) -> Result<Grid<Grains>> {
    let config = SandpileConfig::default().with_border(Border::from_periodic(periodic));
    Sandpile::new(config).relax(initial).map(|outcome| outcome.grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[Grains]]) -> Grid<Grains> {
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn test_single_topple() {
        let outcome = Sandpile::default()
            .relax(&grid(&[&[0, 0, 0], &[0, 4, 0], &[0, 0, 0]]))
            .unwrap();
        assert_eq!(outcome.grid, grid(&[&[0, 1, 0], &[1, 0, 1], &[0, 1, 0]]));
        assert_eq!(outcome.iterations, 1);
    }

    #[test]
    fn test_stable_input_is_unchanged() {
        let input = grid(&[&[3, 2], &[0, 1]]);
        let outcome = Sandpile::default().relax(&input).unwrap();
        assert_eq!(outcome.grid, input);
        assert_eq!(outcome.iterations, 0);
    }

    #[test]
    fn test_sink_loses_edge_grains() {
        let out = sandpile(&grid(&[&[4]]), false).unwrap();
        assert_eq!(out, grid(&[&[0]]));
    }

    #[test]
    fn test_cascade() {
        let outcome = Sandpile::default()
            .relax(&grid(&[&[0, 0, 0], &[0, 16, 0], &[0, 0, 0]]))
            .unwrap();
        assert_eq!(outcome.grid, grid(&[&[2, 1, 2], &[1, 0, 1], &[2, 1, 2]]));
        assert_eq!(outcome.iterations, 6);
    }

    #[test]
    fn test_periodic_wraps_donations() {
        let out = sandpile(&grid(&[&[4, 0, 0], &[0, 0, 0], &[0, 0, 0]]), true).unwrap();
        assert_eq!(out, grid(&[&[0, 1, 1], &[1, 0, 0], &[1, 0, 0]]));
    }

    #[test]
    fn test_periodic_narrow_torus_conserves_mass() {
        // Up and down both wrap onto the pile's own row.
        let out = sandpile(&grid(&[&[1, 4, 0]]), true).unwrap();
        assert_eq!(out, grid(&[&[2, 2, 1]]));

        let out = sandpile(&grid(&[&[5, 0], &[0, 0]]), true).unwrap();
        assert_eq!(out, grid(&[&[1, 2], &[2, 0]]));
    }

    #[test]
    fn test_periodic_overweight_pile_rejected() {
        let err = sandpile(&grid(&[&[4, 4], &[4, 1]]), true).unwrap_err();
        assert_eq!(err, AutomataError::Convergence { iterations: 0 });
    }

    #[test]
    fn test_iteration_cap() {
        let config = SandpileConfig::default().with_max_iterations(2);
        let err = Sandpile::new(config)
            .relax(&grid(&[&[0, 0, 0], &[0, 16, 0], &[0, 0, 0]]))
            .unwrap_err();
        assert_eq!(err, AutomataError::Convergence { iterations: 2 });
    }

    #[test]
    fn test_empty_grid_rejected() {
        let empty: Grid<Grains> = Grid::new(0, 4);
        assert!(matches!(
            sandpile(&empty, false),
            Err(AutomataError::DimensionTooSmall { .. })
        ));
    }

    #[test]
    fn test_mass_overflow_rejected() {
        let heavy = grid(&[&[Grains::MAX, 1]]);
        assert!(matches!(
            sandpile(&heavy, false),
            Err(AutomataError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_is_stable() {
        assert!(is_stable(&grid(&[&[3, 3], &[0, 2]])));
        assert!(!is_stable(&grid(&[&[3, 4]])));
    }
}
