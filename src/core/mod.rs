//! Shared building blocks: grids, border policies, rules, errors,
//! configuration and seeded initial states.
//!
//! Nothing here advances a simulation; the engines in `sandpile` and `life`
//! compose these pieces.

pub mod border;
pub mod config;
pub mod error;
pub mod grid;
pub mod rng;
pub mod rule;

pub use border::Border;
pub use config::{LifeConfig, SandpileConfig};
pub use error::{AutomataError, Result};
pub use grid::{Grains, Grid};
pub use rng::GridRng;
pub use rule::Rule;
