//! Termite Mutator - Randomized syntax-aligned document mutation.
//!
//! This crate drives the mutation side of the engine: it turns the
//! replayable randomness of `termite-generator` into concrete edits against
//! a host document and verifies the document's structural state after each
//! one.
//!
//! # Components
//!
//! - [`StructuralRangeSelector`]: snaps two random offsets to the span of
//!   their nearest common syntax-tree ancestor
//! - [`RangeTracker`]: carries a selected span across edits made between
//!   candidate acceptance and execution
//! - [`MutationAction`]: one reproducible mutation, executed atomically and
//!   followed by consistency checks
//! - [`delete_range`], [`insert_at`], [`replace_range`]: candidate
//!   generators for the three mutation kinds
//!
//! # Lifecycle
//!
//! A factory draws a candidate span from a `DrawSource`, binds it into a
//! [`MutationAction`] via a [`RangeTracker`], and hands the action back.
//! When the action later runs, the tracker replays any edits committed in
//! between: a surviving span is edited in place, a destroyed one degrades
//! the action to a no-op ([`ActionOutcome::Invalidated`]). Either way the
//! action's [`describe`](MutationAction::describe) string pins down exactly
//! which mutation was attempted, for failure replay.

pub mod action;
pub mod error;
pub mod selector;
pub mod tracker;

#[cfg(test)]
mod fixture;

pub use action::{
    delete_range, insert_at, replace_range, ActionOutcome, MutationAction, MutationKind,
};
pub use error::MutationError;
pub use selector::StructuralRangeSelector;
pub use tracker::RangeTracker;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::action::{
        delete_range, insert_at, replace_range, ActionOutcome, MutationAction, MutationKind,
    };
    pub use crate::error::MutationError;
    pub use crate::selector::StructuralRangeSelector;
    pub use crate::tracker::RangeTracker;
}
