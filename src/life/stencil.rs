//! Synchronous stencil update shared by the geometric Life engines.

use rayon::prelude::*;

use crate::core::{Grid, Rule};

/// Row/column displacement of a neighbor.
pub type Offset = (isize, isize);

/// Compute the next generation of every interior cell of a padded grid.
///
/// All reads come from `mesh`; writes go to a fresh buffer, so no cell ever
/// sees a neighbor's updated value. Rows are independent and computed in
/// parallel. `offsets_for(row, col)` selects the neighborhood for a cell and
/// must stay within `pad` cells of it.
pub(crate) fn next_generation<F>(
    mesh: &Grid<bool>,
    pad: usize,
    rule: &Rule,
    offsets_for: F,
) -> Grid<bool>
where
    F: Fn(usize, usize) -> &'static [Offset] + Sync,
{
    let (rows, cols) = mesh.shape();
    let mut next = mesh.clone();
    next.as_mut_slice()
        .par_chunks_mut(cols)
        .enumerate()
        .skip(pad)
        .take(rows - 2 * pad)
        .for_each(|(r, row)| {
            for c in pad..cols - pad {
                let live = live_neighbors(mesh, r, c, offsets_for(r, c));
                row[c] = rule.next_state(mesh[(r, c)], live);
            }
        });
    next
}

/// Live cells among `offsets` around `(row, col)`.
#[inline]
pub(crate) fn live_neighbors(mesh: &Grid<bool>, row: usize, col: usize, offsets: &[Offset]) -> u32 {
    offsets
        .iter()
        .filter(|&&(dr, dc)| mesh[(row.wrapping_add_signed(dr), col.wrapping_add_signed(dc))])
        .count() as u32
}
