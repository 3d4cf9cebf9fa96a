//! Termite Core - Core types for the mutation-testing engine.
//!
//! This crate provides the fundamental types used throughout the termite
//! engine, including:
//!
//! - [`span`]: Half-open text ranges (`TextSpan`)
//! - [`node`]: Syntax-node identification (`NodeId`)
//! - [`edit`]: Edit descriptions and applied-edit records
//! - [`document`]: Traits for the external collaborators (document, syntax
//!   tree, transaction runner, validity checker)
//! - [`error`]: Fatal error types (`TransactionError`, `StructuralViolation`)
//!
//! # Overview
//!
//! The termite engine fuzzes a live, structurally-parsed text document by
//! applying syntax-aligned edits and checking that document and tree state
//! remain mutually consistent. This crate defines the data types and trait
//! seams that flow through the engine; the document and parser themselves
//! are supplied by the host.

pub mod document;
pub mod edit;
pub mod error;
pub mod node;
pub mod span;

// Re-export commonly used types at the crate root for convenience
pub use document::{
    EditLog, ImmediateRunner, SyntaxTree, TextDocument, TransactionRunner, ValidityChecker,
};
pub use edit::{AppliedEdit, Edit, EditKind};
pub use error::{StructuralViolation, TransactionError};
pub use node::NodeId;
pub use span::TextSpan;
