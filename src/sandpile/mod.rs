//! Abelian sandpile model.
//!
//! Piles of [`TOPPLE_THRESHOLD`] or more grains topple, passing one grain to
//! each orthogonal neighbor, until every pile is stable. A sink border
//! swallows grains that fall off the edge; a periodic border wraps them to
//! the opposite side and conserves mass exactly.
//!
//! ## Usage
//!
//! ```rust
//! use rust_automata::core::{Border, GridRng, SandpileConfig};
//! use rust_automata::sandpile::{is_stable, Sandpile};
//!
//! let pile = GridRng::new(1).grain_grid(32, 32, 8);
//! let engine = Sandpile::new(SandpileConfig::default().with_border(Border::Sink));
//! let outcome = engine.relax(&pile).unwrap();
//! assert!(is_stable(&outcome.grid));
//! assert!(outcome.grid.total() <= pile.total());
//! ```
//!
//! ## Convergence
//!
//! A sink border always stabilizes. A periodic pile heavier than three
//! grains per cell never can and is rejected up front; lighter periodic piles
//! may still cycle, so set [`SandpileConfig::max_iterations`] when running
//! untrusted input.
//!
//! [`SandpileConfig::max_iterations`]: crate::core::SandpileConfig::max_iterations

pub mod engine;

pub use engine::{is_stable, sandpile, Sandpile, SandpileOutcome, TOPPLE_THRESHOLD};
