//! Edit descriptions and applied-edit records.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::span::TextSpan;

/// The kind of change an [`Edit`] makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditKind {
    /// Removes the spanned text.
    Delete,
    /// Adds text at a point without removing anything.
    Insert,
    /// Removes the spanned text and puts replacement text in its place.
    Replace,
}

impl fmt::Display for EditKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EditKind::Delete => "delete",
            EditKind::Insert => "insert",
            EditKind::Replace => "replace",
        };
        f.write_str(name)
    }
}

/// A single edit against a document: replace the text in `span` with
/// `replacement`. Deletions carry an empty replacement; insertions carry an
/// empty span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edit {
    /// The range of existing text affected.
    pub span: TextSpan,
    /// The text that takes its place.
    pub replacement: String,
}

impl Edit {
    /// An edit that deletes the spanned text.
    pub fn delete(span: TextSpan) -> Self {
        Self {
            span,
            replacement: String::new(),
        }
    }

    /// An edit that inserts `text` at `offset`.
    pub fn insert(offset: usize, text: impl Into<String>) -> Self {
        Self {
            span: TextSpan::point(offset),
            replacement: text.into(),
        }
    }

    /// An edit that replaces the spanned text with `text`.
    pub fn replace(span: TextSpan, text: impl Into<String>) -> Self {
        Self {
            span,
            replacement: text.into(),
        }
    }

    /// Classifies the edit by its span and replacement.
    pub fn kind(&self) -> EditKind {
        match (self.span.is_empty(), self.replacement.is_empty()) {
            (true, _) => EditKind::Insert,
            (false, true) => EditKind::Delete,
            (false, false) => EditKind::Replace,
        }
    }

    /// Change in document length this edit causes.
    pub fn length_delta(&self) -> isize {
        self.replacement.len() as isize - self.span.len() as isize
    }
}

impl fmt::Display for Edit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind(), self.span)
    }
}

/// Record of an edit that has been committed to a document, in the form
/// needed to remap spans captured before it: the replaced range and the
/// length of the replacement text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedEdit {
    /// The range of pre-edit text that was replaced.
    pub span: TextSpan,
    /// Length of the replacement text.
    pub replacement_len: usize,
}

impl AppliedEdit {
    /// Creates a record for an edit that replaced `span` with
    /// `replacement_len` characters.
    pub fn new(span: TextSpan, replacement_len: usize) -> Self {
        Self {
            span,
            replacement_len,
        }
    }

    /// Builds the record for an [`Edit`] about to be applied.
    pub fn of(edit: &Edit) -> Self {
        Self {
            span: edit.span,
            replacement_len: edit.replacement.len(),
        }
    }

    /// Change in document length this edit caused.
    pub fn length_delta(&self) -> isize {
        self.replacement_len as isize - self.span.len() as isize
    }
}
