//! Core Generate trait and associated types.

use crate::combinators::{Map, Retry, SuchThat};
use crate::source::DrawSource;

/// Result type for generation attempts.
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Errors that can occur during generation.
///
/// Only [`GenerateError::Rejected`] is retryable; combinators absorb it by
/// redrawing with fresh randomness. The other variants surface to the
/// caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    /// This candidate failed; retry with fresh randomness.
    #[error("candidate rejected")]
    Rejected,

    /// The retry budget was spent without producing a valid candidate.
    #[error("generation exhausted after {attempts} attempts")]
    Exhausted {
        /// Number of attempts consumed before giving up.
        attempts: usize,
    },

    /// A generator was asked for an empty integer range.
    #[error("invalid integer range: min {min} > max {max}")]
    InvalidRange { min: u64, max: u64 },
}

impl GenerateError {
    /// Whether a combinator may absorb this error by retrying.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Rejected)
    }
}

/// A lazy, replayable random value.
///
/// A generator is a pure function from a random-bit source to either a value
/// or a generation failure: it holds no mutable state, and identical sources
/// produce identical results. All entropy must come from the supplied
/// [`DrawSource`] so that a recorded word log replays the value exactly.
///
/// # Examples
///
/// ```
/// use termite_generator::{integers, Generate};
/// use termite_generator::source::DrawSource;
///
/// let gen = integers(1, 6).map(|v| v * 10);
/// let mut source = DrawSource::seeded(42);
/// let value = gen.generate(&mut source).unwrap();
/// assert!((10..=60).contains(&value));
/// ```
pub trait Generate {
    /// The type of values this generator produces.
    type Value;

    /// Produces one value, consuming entropy from `source`.
    fn generate(&self, source: &mut DrawSource) -> GenerateResult<Self::Value>;

    /// Transforms produced values without consuming additional randomness.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Value) -> U,
    {
        Map::new(self, f)
    }

    /// Redraws until `predicate` passes, up to a bounded retry budget;
    /// exhaustion is an observable [`GenerateError::Exhausted`] result.
    fn such_that<P>(self, predicate: P) -> SuchThat<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Value) -> bool,
    {
        SuchThat::new(self, predicate)
    }

    /// Redraws on [`GenerateError::Rejected`] up to `budget` attempts.
    fn retrying(self, budget: usize) -> Retry<Self>
    where
        Self: Sized,
    {
        Retry::new(self, budget)
    }
}
