//! Generator primitives and combinators.

use std::marker::PhantomData;

use crate::distribution::Distribution;
use crate::source::DrawSource;
use crate::traits::{Generate, GenerateError, GenerateResult};

/// Default retry budget for [`SuchThat`] and [`Retry`].
pub const DEFAULT_RETRY_BUDGET: usize = 100;

/// Uniform generator over the inclusive integer range `[min, max]`.
///
/// Generation fails with [`GenerateError::InvalidRange`] if `min > max`.
pub fn integers(min: u64, max: u64) -> Integers {
    Integers { min, max }
}

/// Generator drawing a non-negative integer from a [`Distribution`].
pub fn distributed(distribution: Distribution) -> Distributed {
    Distributed { distribution }
}

/// Generator built from a closure over the draw source.
///
/// The closure may return [`GenerateError::Rejected`] to signal that this
/// candidate should be discarded; wrap the result in
/// [`Generate::retrying`] to turn rejections into redraws.
pub fn from_fn<T, F>(f: F) -> FromFn<T, F>
where
    F: Fn(&mut DrawSource) -> GenerateResult<T>,
{
    FromFn {
        f,
        _phantom: PhantomData,
    }
}

/// See [`integers`].
#[derive(Debug, Clone, Copy)]
pub struct Integers {
    min: u64,
    max: u64,
}

impl Generate for Integers {
    type Value = u64;

    fn generate(&self, source: &mut DrawSource) -> GenerateResult<u64> {
        if self.min > self.max {
            return Err(GenerateError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(Distribution::Uniform {
            min: self.min,
            max: self.max,
        }
        .sample(source))
    }
}

/// See [`distributed`].
#[derive(Debug, Clone, Copy)]
pub struct Distributed {
    distribution: Distribution,
}

impl Generate for Distributed {
    type Value = u64;

    fn generate(&self, source: &mut DrawSource) -> GenerateResult<u64> {
        Ok(self.distribution.sample(source))
    }
}

/// See [`from_fn`].
pub struct FromFn<T, F> {
    f: F,
    _phantom: PhantomData<fn() -> T>,
}

impl<T, F> Generate for FromFn<T, F>
where
    F: Fn(&mut DrawSource) -> GenerateResult<T>,
{
    type Value = T;

    fn generate(&self, source: &mut DrawSource) -> GenerateResult<T> {
        (self.f)(source)
    }
}

/// Map combinator: transforms produced values.
///
/// Consumes exactly the randomness of the inner generator and nothing more.
pub struct Map<G, F> {
    inner: G,
    f: F,
}

impl<G, F> Map<G, F> {
    pub(crate) fn new(inner: G, f: F) -> Self {
        Self { inner, f }
    }
}

impl<G, F, U> Generate for Map<G, F>
where
    G: Generate,
    F: Fn(G::Value) -> U,
{
    type Value = U;

    fn generate(&self, source: &mut DrawSource) -> GenerateResult<U> {
        self.inner.generate(source).map(&self.f)
    }
}

/// Filtering combinator: redraws until the predicate passes.
///
/// Candidates failing the predicate, and inner
/// [`Rejected`](GenerateError::Rejected) results, are discarded and retried
/// with fresh randomness. Once the budget is spent generation fails with
/// [`Exhausted`](GenerateError::Exhausted) carrying the attempt count.
pub struct SuchThat<G, P> {
    inner: G,
    predicate: P,
    budget: usize,
}

impl<G, P> SuchThat<G, P> {
    pub(crate) fn new(inner: G, predicate: P) -> Self {
        Self {
            inner,
            predicate,
            budget: DEFAULT_RETRY_BUDGET,
        }
    }

    /// Sets the retry budget.
    pub fn with_budget(mut self, budget: usize) -> Self {
        self.budget = budget;
        self
    }
}

impl<G, P> Generate for SuchThat<G, P>
where
    G: Generate,
    P: Fn(&G::Value) -> bool,
{
    type Value = G::Value;

    fn generate(&self, source: &mut DrawSource) -> GenerateResult<G::Value> {
        for _ in 0..self.budget {
            match self.inner.generate(source) {
                Ok(value) if (self.predicate)(&value) => return Ok(value),
                Ok(_) | Err(GenerateError::Rejected) => continue,
                Err(other) => return Err(other),
            }
        }
        tracing::debug!(budget = self.budget, "such_that retry budget spent");
        Err(GenerateError::Exhausted {
            attempts: self.budget,
        })
    }
}

/// Retry combinator: absorbs bare rejections without a predicate.
pub struct Retry<G> {
    inner: G,
    budget: usize,
}

impl<G> Retry<G> {
    pub(crate) fn new(inner: G, budget: usize) -> Self {
        Self { inner, budget }
    }
}

impl<G> Generate for Retry<G>
where
    G: Generate,
{
    type Value = G::Value;

    fn generate(&self, source: &mut DrawSource) -> GenerateResult<G::Value> {
        for _ in 0..self.budget {
            match self.inner.generate(source) {
                Ok(value) => return Ok(value),
                Err(GenerateError::Rejected) => continue,
                Err(other) => return Err(other),
            }
        }
        tracing::debug!(budget = self.budget, "retry budget spent");
        Err(GenerateError::Exhausted {
            attempts: self.budget,
        })
    }
}
