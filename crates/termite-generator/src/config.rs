//! Generation policy knobs.

use serde::{Deserialize, Serialize};

use crate::combinators::DEFAULT_RETRY_BUDGET;

/// Policy configuration for candidate generation.
///
/// Both fields are heuristics, not correctness constraints: the defaults
/// reproduce the original tuning (retry budget 100, geometric extent mean
/// 10) but callers may reshape the edit-size profile freely.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Attempts a filtering or retrying combinator makes before reporting
    /// exhaustion.
    pub retry_budget: usize,
    /// Mean of the geometric draw for how far past its start offset a
    /// candidate edit extends.
    pub extent_mean: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            retry_budget: DEFAULT_RETRY_BUDGET,
            extent_mean: 10.0,
        }
    }
}

impl GeneratorConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the retry budget.
    pub fn with_retry_budget(mut self, budget: usize) -> Self {
        self.retry_budget = budget;
        self
    }

    /// Sets the geometric extent mean.
    pub fn with_extent_mean(mut self, mean: f64) -> Self {
        self.extent_mean = mean;
        self
    }
}
