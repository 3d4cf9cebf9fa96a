//! Integer distributions for shaped draws.

use serde::{Deserialize, Serialize};

use crate::source::DrawSource;

/// Configuration for non-negative integer distributions.
///
/// The engine mostly wants short edit extents with an occasional long one,
/// which is what [`Distribution::Geometric`] provides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Distribution {
    /// Uniform over the inclusive range `[min, max]`.
    Uniform { min: u64, max: u64 },
    /// Geometric with the given mean: heavily biased toward small values,
    /// unbounded upward. A mean of 10 yields mostly single-digit draws.
    Geometric { mean: f64 },
    /// Always the same value.
    Constant { value: u64 },
}

impl Default for Distribution {
    fn default() -> Self {
        Distribution::Geometric { mean: 10.0 }
    }
}

impl Distribution {
    /// Samples a non-negative integer from the distribution.
    ///
    /// Draws at most one word from the source; `Constant` draws none.
    pub fn sample(&self, source: &mut DrawSource) -> u64 {
        match *self {
            Distribution::Uniform { min, max } => {
                if min >= max {
                    return min;
                }
                match (max - min).checked_add(1) {
                    Some(width) => min + source.next_word() % width,
                    // Full u64 range.
                    None => source.next_word(),
                }
            }
            Distribution::Geometric { mean } => {
                if mean <= 0.0 {
                    return 0;
                }
                // Inverse-CDF sampling: success probability p = 1/(mean+1)
                // gives E[k] = mean over support k >= 0.
                let p = 1.0 / (mean + 1.0);
                let u = source.next_f64();
                let k = ((1.0 - u).ln() / (1.0 - p).ln()).floor();
                if k.is_finite() && k >= 0.0 {
                    k as u64
                } else {
                    0
                }
            }
            Distribution::Constant { value } => value,
        }
    }
}
