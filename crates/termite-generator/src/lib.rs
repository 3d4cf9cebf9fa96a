//! Termite Generator - Replayable random-value generation.
//!
//! This crate provides the `Generate` trait and the entropy plumbing the
//! mutation engine draws from.
//!
//! # Core Concepts
//!
//! - [`Generate`]: a lazy, replayable random value of some type
//! - [`DrawSource`]: the seeded, recordable word source all draws consume
//! - [`Distribution`]: shaped non-negative integer draws (uniform,
//!   geometric, constant)
//!
//! # Primitives and Combinators
//!
//! - [`integers`]: uniform over an inclusive integer range
//! - [`distributed`]: draw from a [`Distribution`]
//! - [`from_fn`]: generator from a closure over the source
//! - [`Map`]: transform a produced value, no extra randomness
//! - [`SuchThat`]: filter with bounded redraw, observable exhaustion
//! - [`Retry`]: absorb bare rejections with a bounded budget
//!
//! # Determinism
//!
//! Identical sources produce identical values. [`DrawSource::recording`]
//! logs every drawn word; feeding the log to [`DrawSource::replaying`]
//! reproduces a run bit-for-bit, which is how generation failures are
//! replayed.

pub mod combinators;
pub mod config;
pub mod distribution;
pub mod source;
pub mod traits;

pub use combinators::{
    distributed, from_fn, integers, Distributed, FromFn, Integers, Map, Retry, SuchThat,
    DEFAULT_RETRY_BUDGET,
};
pub use config::GeneratorConfig;
pub use distribution::Distribution;
pub use source::DrawSource;
pub use traits::{Generate, GenerateError, GenerateResult};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::combinators::{distributed, from_fn, integers};
    pub use crate::config::GeneratorConfig;
    pub use crate::distribution::Distribution;
    pub use crate::source::DrawSource;
    pub use crate::traits::{Generate, GenerateError, GenerateResult};
}
