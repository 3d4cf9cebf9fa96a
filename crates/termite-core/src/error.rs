//! Error types shared across the engine.
//!
//! This module provides error types using `thiserror`. Generation-time
//! failures live in `termite-generator`; the types here cover the two
//! failure classes that are fatal to a mutation session.

use thiserror::Error;

use crate::span::TextSpan;

/// Errors raised by the transactional-edit mechanism.
///
/// These are always fatal: if the atomic edit window itself cannot complete,
/// the session has no consistent state to continue from.
#[derive(Debug, Clone, Error)]
pub enum TransactionError {
    /// The edit referenced offsets past the end of the document.
    #[error("edit span {span} out of bounds for document of length {len}")]
    OutOfBounds { span: TextSpan, len: usize },

    /// The underlying edit mechanism failed.
    #[error("transaction failed: {0}")]
    Failed(String),

    /// The document rejected the edit as malformed.
    #[error("rejected edit: {0}")]
    Rejected(String),
}

impl TransactionError {
    /// Creates an out-of-bounds error.
    pub fn out_of_bounds(span: TextSpan, len: usize) -> Self {
        Self::OutOfBounds { span, len }
    }

    /// Creates a general transaction failure.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

/// A mismatch between the document text and the structural state meant to
/// mirror it, reported by a [`ValidityChecker`](crate::document::ValidityChecker).
#[derive(Debug, Clone, Error)]
#[error("structural invariant violated: {detail}")]
pub struct StructuralViolation {
    /// What the checker found.
    pub detail: String,
}

impl StructuralViolation {
    /// Creates a violation with the given detail message.
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
