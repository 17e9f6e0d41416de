//! Engine configuration.
//!
//! Each engine has a small serde-serializable config with builder-style
//! setters. The free functions in [`crate::sandpile`] and [`crate::life`]
//! build these from their boolean flags.

use serde::{Deserialize, Serialize};

use super::border::Border;

/// Sandpile relaxation parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SandpileConfig {
    /// Boundary condition (default: sink).
    pub border: Border,

    /// Maximum relaxation passes before giving up (`None` = unlimited).
    ///
    /// A sink border always stabilizes. A periodic pile conserves its mass
    /// and may cycle forever, so callers running periodic piles of unknown
    /// origin should set a cap.
    pub max_iterations: Option<u64>,
}

impl SandpileConfig {
    /// Config with the given border.
    #[must_use]
    pub fn with_border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    /// Config with a relaxation pass cap.
    #[must_use]
    pub fn with_max_iterations(mut self, max: u64) -> Self {
        self.max_iterations = Some(max);
        self
    }
}

/// Square-grid Life parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeConfig {
    /// Boundary condition (default: sink).
    pub border: Border,
}

impl LifeConfig {
    /// Config with the given border.
    #[must_use]
    pub fn with_border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }
}
