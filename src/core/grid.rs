//! Rectangular cell storage.
//!
//! ## Grid
//!
//! Row-major `Vec<T>` addressed by `(row, col)`. Dimensions are fixed at
//! construction; engines only ever change cell values.
//!
//! ## Border framing
//!
//! Engines pad a grid with a frame of width 1 or 2 so neighbor lookups never
//! need bounds checks, then strip the frame before returning:
//!
//! ```
//! use rust_automata::core::Grid;
//!
//! let grid = Grid::from_rows(&[[1u32, 2], [3, 4]]).unwrap();
//! let padded = grid.padded(1, 0);
//! assert_eq!((padded.rows(), padded.cols()), (4, 4));
//! assert_eq!(padded[(1, 1)], 1);
//! assert_eq!(padded.interior(1).unwrap(), grid);
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

use super::error::{AutomataError, Result};

/// Sandpile cell: grain count.
pub type Grains = u32;

/// Two-dimensional row-major grid.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "RawGrid<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

/// Unvalidated wire form of [`Grid`].
#[derive(Deserialize)]
struct RawGrid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T> TryFrom<RawGrid<T>> for Grid<T> {
    type Error = AutomataError;

    fn try_from(raw: RawGrid<T>) -> Result<Self> {
        Self::from_vec(raw.rows, raw.cols, raw.cells)
    }
}

impl<T> Grid<T> {
    /// Build a grid from a flat row-major vector.
    pub fn from_vec(rows: usize, cols: usize, cells: Vec<T>) -> Result<Self> {
        let expected = rows.checked_mul(cols).ok_or_else(|| {
            AutomataError::shape(format!("{rows}x{cols} grid overflows usize"))
        })?;
        if cells.len() != expected {
            return Err(AutomataError::shape(format!(
                "{} cells cannot fill a {rows}x{cols} grid",
                cells.len()
            )));
        }
        Ok(Self { rows, cols, cells })
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total cell count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when the grid has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get a cell, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Get a mutable cell, or `None` when out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < self.rows && col < self.cols {
            self.cells.get_mut(row * self.cols + col)
        } else {
            None
        }
    }

    /// Set a cell. Out-of-bounds writes are ignored.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        if let Some(cell) = self.get_mut(row, col) {
            *cell = value;
        }
    }

    /// One row as a slice.
    #[must_use]
    pub fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// Iterate over rows.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        (0..self.rows).map(move |r| self.row(r))
    }

    /// Flat row-major view.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// Mutable flat row-major view.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.cells
    }

    /// Consume into the flat row-major vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.cells
    }

    /// Flat index of `(row, col)`.
    #[inline]
    #[must_use]
    pub fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Apply `f` to every cell, keeping the shape.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(f).collect(),
        }
    }
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `value`.
    #[must_use]
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            rows,
            cols,
            cells: vec![value; rows * cols],
        }
    }

    /// Build a grid from a slice of rows.
    ///
    /// Fails with [`AutomataError::Shape`] when rows differ in length.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(AutomataError::shape(format!(
                    "row {i} has {} columns, expected {cols}",
                    row.len()
                )));
            }
            cells.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Nested row vectors.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.iter_rows().map(<[T]>::to_vec).collect()
    }

    /// Copy of this grid surrounded by a frame `width` cells wide, filled
    /// with `fill`.
    #[must_use]
    pub fn padded(&self, width: usize, fill: T) -> Self {
        let cols = self.cols + 2 * width;
        let rows = self.rows + 2 * width;
        let mut out = Self::filled(rows, cols, fill);
        for r in 0..self.rows {
            let start = out.index_of(r + width, width);
            out.cells[start..start + self.cols].clone_from_slice(self.row(r));
        }
        out
    }

    /// Copy of the interior with a frame `width` cells wide removed.
    pub fn interior(&self, width: usize) -> Result<Self> {
        if self.rows < 2 * width || self.cols < 2 * width {
            return Err(AutomataError::DimensionTooSmall {
                rows: self.rows,
                cols: self.cols,
                min_rows: 2 * width,
                min_cols: 2 * width,
            });
        }
        let rows = self.rows - 2 * width;
        let cols = self.cols - 2 * width;
        let mut cells = Vec::with_capacity(rows * cols);
        for r in width..width + rows {
            cells.extend_from_slice(&self.row(r)[width..width + cols]);
        }
        Ok(Self { rows, cols, cells })
    }
}

impl<T: Clone + Default> Grid<T> {
    /// Create a grid filled with `T::default()`.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, T::default())
    }
}

impl<T: Serialize> Grid<T> {
    /// Encode an in-memory snapshot.
    pub fn to_snapshot(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(|e| AutomataError::invalid(e.to_string()))
    }
}

impl<T: DeserializeOwned> Grid<T> {
    /// Decode a snapshot produced by [`Grid::to_snapshot`].
    pub fn from_snapshot(bytes: &[u8]) -> Result<Self> {
        bincode::deserialize(bytes).map_err(|e| AutomataError::invalid(e.to_string()))
    }
}

impl Grid<Grains> {
    /// Build a grain grid from signed row-major values, rejecting negative
    /// counts and counts that do not fit in [`Grains`].
    pub fn from_signed(
        rows: usize,
        cols: usize,
        values: impl IntoIterator<Item = i64>,
    ) -> Result<Self> {
        let width = cols.max(1);
        let cells = values
            .into_iter()
            .enumerate()
            .map(|(i, v)| {
                Grains::try_from(v).map_err(|_| {
                    AutomataError::invalid(format!(
                        "cell ({}, {}) holds {v} grains",
                        i / width,
                        i % width
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Grid::from_vec(rows, cols, cells)
    }

    /// Build a grain grid from rows of signed counts.
    pub fn from_signed_rows<R: AsRef<[i64]>>(rows: &[R]) -> Result<Self> {
        let signed = Grid::from_rows(rows)?;
        Self::from_signed(signed.rows, signed.cols, signed.cells)
    }

    /// Total grain mass.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.cells.iter().map(|&g| u64::from(g)).sum()
    }

    /// Largest single pile.
    #[must_use]
    pub fn max_pile(&self) -> Grains {
        self.cells.iter().copied().max().unwrap_or(0)
    }
}

impl Grid<bool> {
    /// Number of live cells.
    #[must_use]
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} grid",
            self.rows,
            self.cols
        );
        &self.cells[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} grid",
            self.rows,
            self.cols
        );
        &mut self.cells[row * self.cols + col]
    }
}

impl fmt::Display for Grid<bool> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            let line: String = row.iter().map(|&c| if c { '#' } else { '.' }).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Grid<Grains> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            let line: Vec<String> = row.iter().map(ToString::to_string).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
