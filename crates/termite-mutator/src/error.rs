//! Errors that cross the action boundary.
//!
//! Only the failures here are fatal to a mutation session. Generation-time
//! failures stay inside `termite-generator`, and span invalidation is an
//! expected race reported as an
//! [`ActionOutcome`](crate::action::ActionOutcome), never as an error.

use thiserror::Error;

use termite_core::{StructuralViolation, TransactionError};

/// Fatal failures from performing a mutation action.
#[derive(Debug, Clone, Error)]
pub enum MutationError {
    /// The atomic edit mechanism itself failed.
    #[error(transparent)]
    Transaction(#[from] TransactionError),

    /// A post-mutation consistency check failed. Carries the action's
    /// reproduction string so the failing mutation can be replayed.
    #[error("invariant violation in `{action}`: {detail}")]
    InvariantViolation {
        /// The `describe()` output of the action that triggered the check.
        action: String,
        /// What the validity checker found.
        detail: String,
    },
}

impl MutationError {
    /// Wraps a checker violation with the offending action's description.
    pub fn invariant(action: impl Into<String>, violation: StructuralViolation) -> Self {
        Self::InvariantViolation {
            action: action.into(),
            detail: violation.detail,
        }
    }
}
