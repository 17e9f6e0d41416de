//! Life-like automata.
//!
//! ## Overview
//!
//! Three engines share one synchronous update: every cell's next state is
//! computed from the current generation only, then all cells switch at once.
//!
//! - **Square** ([`life`], [`SquareLife`]): Moore neighborhood, sink or
//!   periodic border, Conway's rule by default
//! - **Triangular** ([`lifetri`], [`TriLife`]): 12-neighbor triangles with a
//!   sink border, survive on 4-6 and born on 4
//! - **Generic** ([`life_generic`], [`GenericLife`]): any neighbor graph given
//!   as an [`AdjacencyMatrix`]
//!
//! ## Usage
//!
//! ```rust
//! use rust_automata::core::{Border, Grid};
//! use rust_automata::life::{life, life_generic, AdjacencyMatrix};
//!
//! let mut glider = Grid::new(6, 6);
//! for (r, c) in [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)] {
//!     glider.set(r, c, true);
//! }
//!
//! let square = life(&glider, 4, true).unwrap();
//!
//! // The same run expressed as a graph.
//! let matrix = AdjacencyMatrix::moore(6, 6, Border::Periodic);
//! let flat = life_generic(&matrix, glider.as_slice(), 4, [2, 3], [3]).unwrap();
//! assert_eq!(flat, square.into_vec());
//! ```

pub mod generic;
pub mod square;
mod stencil;
pub mod triangular;

pub use generic::{life_generic, AdjacencyMatrix, GenericLife};
pub use square::{life, SquareLife, MOORE_OFFSETS};
pub use stencil::Offset;
pub use triangular::{lifetri, Orientation, TriLife};
