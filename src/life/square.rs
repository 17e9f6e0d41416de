//! Life on a square grid with the Moore neighborhood.

use tracing::debug;

use super::stencil::{next_generation, Offset};
use crate::core::{AutomataError, Border, Grid, LifeConfig, Result, Rule};

/// The 8 cells surrounding a square cell.
pub const MOORE_OFFSETS: &[Offset] = &[
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Frame width around the working grid.
const PAD: usize = 1;

/// Square-grid Life engine.
///
/// Defaults to Conway's rule (survive on 2 or 3, born on 3) with a sink
/// border.
#[derive(Clone, Debug)]
pub struct SquareLife {
    config: LifeConfig,
    rule: Rule,
}

impl Default for SquareLife {
    fn default() -> Self {
        Self::new(LifeConfig::default())
    }
}

impl SquareLife {
    /// Conway engine with the given configuration.
    #[must_use]
    pub fn new(config: LifeConfig) -> Self {
        Self {
            config,
            rule: Rule::conway(),
        }
    }

    /// Replace the rule.
    #[must_use]
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rule = rule;
        self
    }

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> &LifeConfig {
        &self.config
    }

    /// Active rule.
    #[must_use]
    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// Advance `initial` by exactly `nsteps` generations.
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

        let border = self.config.border;
        debug!(
            rows,
            cols,
            nsteps,
            ?border,
            rule = %self.rule,
            population = initial.population(),
            "running square life"
        );

        let mut mesh = initial.padded(PAD, false);
        for _ in 0..nsteps {
            border.refresh(&mut mesh, PAD, false);
            mesh = next_generation(&mesh, PAD, &self.rule, |_, _| MOORE_OFFSETS);
        }

        let grid = mesh.interior(PAD)?;
        debug!(population = grid.population(), "square life finished");
        Ok(grid)
    }
}

/// Run Conway's Game of Life for `nsteps` generations with a sink border, or
/// a periodic one when `periodic`.
///
/// ```
/// use rust_automata::core::Grid;
/// use rust_automata::life::life;
///
/// let blinker = Grid::from_rows(&[
///     [false, false, false],
///     [true, true, true],
///     [false, false, false],
/// ])
/// .unwrap();
/// let next = life(&blinker, 1, false).unwrap();
/// assert_eq!(next.population(), 3);
/// assert!(next[(0, 1)] && next[(1, 1)] && next[(2, 1)]);
/// ```
pub fn life(initial: &Grid<bool>, nsteps: usize, periodic: bool) -> Result<Grid<bool>> {
    let config = LifeConfig::default().with_border(Border::from_periodic(periodic));
    SquareLife::new(config).run(initial, nsteps)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block() -> Grid<bool> {
        let mut grid = Grid::new(4, 4);
        for (r, c) in [(1, 1), (1, 2), (2, 1), (2, 2)] {
            grid.set(r, c, true);
        }
        grid
    }

    fn diagonal(n: usize) -> Grid<bool> {
        let mut grid = Grid::new(n, n);
        for i in 0..n {
            grid.set(i, i, true);
        }
        grid
    }

    #[test]
    fn test_still_life() {
        let grid = block();
        assert_eq!(life(&grid, 5, false).unwrap(), grid);
        assert_eq!(life(&grid, 5, true).unwrap(), grid);
    }

    #[test]
    fn test_zero_steps_is_identity() {
        let grid = diagonal(6);
        assert_eq!(life(&grid, 0, false).unwrap(), grid);
        assert_eq!(life(&grid, 0, true).unwrap(), grid);
    }

    #[test]
    fn test_lonely_cell_dies() {
        let mut grid = Grid::new(3, 3);
        grid.set(1, 1, true);
        assert_eq!(life(&grid, 1, false).unwrap().population(), 0);
    }

    #[test]
    fn test_periodic_wraps_across_edges() {
        // A vertical blinker on the left edge of a 5x5 torus flips to a
        // horizontal one that wraps to the right edge.
        let mut grid = Grid::new(5, 5);
        for r in 1..4 {
            grid.set(r, 0, true);
        }
        let next = life(&grid, 1, true).unwrap();
        assert_eq!(next.population(), 3);
        assert!(next[(2, 4)] && next[(2, 0)] && next[(2, 1)]);

        // The sink border cuts the blinker's left arm off.
        let sunk = life(&grid, 1, false).unwrap();
        assert_eq!(sunk.population(), 2);
        assert!(sunk[(2, 0)] && sunk[(2, 1)]);
    }

    #[test]
    fn test_custom_rule() {
        // B1/S: every dead cell touching a live cell is born; live cells die.
        let engine = SquareLife::default().with_rule("B1/S".parse().unwrap());
        let mut grid = Grid::new(3, 3);
        grid.set(1, 1, true);
        let next = engine.run(&grid, 1).unwrap();
        assert_eq!(next.population(), 8);
        assert!(!next[(1, 1)]);
    }

    #[test]
    fn test_empty_grid_rejected() {
        let grid: Grid<bool> = Grid::new(3, 0);
        assert!(matches!(
            life(&grid, 1, false),
            Err(AutomataError::DimensionTooSmall { .. })
        ));
    }
}
