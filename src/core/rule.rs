//! Life-like transition rules.
//!
//! A rule is a pair of neighbor-count sets:
//! - **environment**: counts at which a live cell survives
//! - **fertility**: counts at which a dead cell is born
//!
//! Rules parse from and print as the usual `B<birth>/S<survival>` notation:
//!
//! ```
//! use rust_automata::core::Rule;
//!
//! let rule: Rule = "B3/S23".parse().unwrap();
//! assert_eq!(rule, Rule::conway());
//! assert!(rule.next_state(true, 2));
//! assert!(!rule.next_state(false, 2));
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::AutomataError;

/// Survival and birth neighbor counts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Counts at which a live cell stays alive.
    pub environment: FxHashSet<u32>,
    /// Counts at which a dead cell comes alive.
    pub fertility: FxHashSet<u32>,
}

impl Rule {
    /// Create a rule from environment and fertility counts.
    pub fn new(
        environment: impl IntoIterator<Item = u32>,
        fertility: impl IntoIterator<Item = u32>,
    ) -> Self {
        Self {
            environment: environment.into_iter().collect(),
            fertility: fertility.into_iter().collect(),
        }
    }

    /// Conway's Game of Life: survive on 2 or 3, born on 3.
    #[must_use]
    pub fn conway() -> Self {
        Self::new([2, 3], [3])
    }

    /// Triangular tessellation rule: survive on 4, 5 or 6, born on exactly 4.
    #[must_use]
    pub fn triangular() -> Self {
        Self::new([4, 5, 6], [4])
    }

    /// State of a cell in the next generation.
    #[inline]
    #[must_use]
    pub fn next_state(&self, alive: bool, live_neighbors: u32) -> bool {
        if alive {
            self.environment.contains(&live_neighbors)
        } else {
            self.fertility.contains(&live_neighbors)
        }
    }
}

fn sorted(counts: &FxHashSet<u32>) -> Vec<u32> {
    let mut out: Vec<u32> = counts.iter().copied().collect();
    out.sort_unstable();
    out
}

fn write_counts(f: &mut fmt::Formatter<'_>, counts: &FxHashSet<u32>) -> fmt::Result {
    let counts = sorted(counts);
    let sep = if counts.iter().all(|&c| c < 10) { "" } else { "," };
    let parts: Vec<String> = counts.iter().map(ToString::to_string).collect();
    write!(f, "{}", parts.join(sep))
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B")?;
        write_counts(f, &self.fertility)?;
        write!(f, "/S")?;
        write_counts(f, &self.environment)
    }
}

/// Parse the count list of one half of a rule string.
///
/// Bare digits are single counts (`23` is {2, 3}); a comma-separated list
/// allows multi-digit counts (`4,12`).
fn parse_counts(text: &str, rule: &str) -> Result<FxHashSet<u32>, AutomataError> {
    let bad = || AutomataError::invalid(format!("malformed rule string {rule:?}"));
    if text.contains(',') {
        text.split(',')
            .map(|part| part.trim().parse::<u32>().map_err(|_| bad()))
            .collect()
    } else {
        text.chars()
            .map(|ch| ch.to_digit(10).ok_or_else(bad))
            .collect()
    }
}

impl FromStr for Rule {
    type Err = AutomataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fertility = None;
        let mut environment = None;
        for half in s.trim().split('/') {
            let half = half.trim();
            let mut chars = half.chars();
            let slot = match chars.next().map(|c| c.to_ascii_uppercase()) {
                Some('B') => &mut fertility,
                Some('S') => &mut environment,
                _ => {
                    return Err(AutomataError::invalid(format!(
                        "malformed rule string {s:?}"
                    )))
                }
            };
            if slot.is_some() {
                return Err(AutomataError::invalid(format!(
                    "duplicate section in rule string {s:?}"
                )));
            }
            *slot = Some(parse_counts(chars.as_str(), s)?);
        }
        match (fertility, environment) {
            (Some(fertility), Some(environment)) => Ok(Self {
                environment,
                fertility,
            }),
            _ => Err(AutomataError::invalid(format!(
                "rule string {s:?} needs both B and S sections"
            ))),
        }
    }
}
