//! Border policies for padded grids.
//!
//! Every engine works on a copy of the caller's grid surrounded by a frame.
//! Before each step the frame is rewritten according to the policy:
//!
//! - [`Border::Sink`]: frame held at the fill value (zero grains, dead
//!   cells). Anything that crosses into it is lost.
//! - [`Border::Periodic`]: every frame cell copies the interior cell on the
//!   opposite side, corners included, giving a toroidal topology.

use serde::{Deserialize, Serialize};

use super::grid::Grid;

/// Boundary condition applied to the frame around a grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Border {
    /// Absorbing boundary.
    #[default]
    Sink,
    /// Toroidal wraparound.
    Periodic,
}

impl Border {
    /// Map the boolean `periodic` flag of the engine entry points.
    #[must_use]
    pub const fn from_periodic(periodic: bool) -> Self {
        if periodic {
            Self::Periodic
        } else {
            Self::Sink
        }
    }

    /// True for [`Border::Periodic`].
    #[must_use]
    pub const fn is_periodic(self) -> bool {
        matches!(self, Self::Periodic)
    }

    /// Rewrite the `width`-cell frame of a padded grid.
    ///
    /// `fill` is only used by the sink policy. A periodic refresh on a grid
    /// without interior cells leaves the frame untouched.
    pub fn refresh<T: Copy>(self, grid: &mut Grid<T>, width: usize, fill: T) {
        let (rows, cols) = grid.shape();
        if rows < 2 * width || cols < 2 * width {
            return;
        }
        let inner_rows = rows - 2 * width;
        let inner_cols = cols - 2 * width;
        if self.is_periodic() && (inner_rows == 0 || inner_cols == 0) {
            return;
        }

        for r in 0..rows {
            let frame_row = r < width || r >= rows - width;
            for c in 0..cols {
                if !frame_row && c >= width && c < cols - width {
                    continue;
                }
                let value = match self {
                    Self::Sink => fill,
                    Self::Periodic => {
                        grid[(wrap(r, width, inner_rows), wrap(c, width, inner_cols))]
                    }
                };
                grid[(r, c)] = value;
            }
        }
    }
}

/// Interior coordinate that padded coordinate `i` wraps onto.
#[inline]
fn wrap(i: usize, width: usize, inner: usize) -> usize {
    width + (i + inner * width - width) % inner
}
