//! Half-open character-offset ranges.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A half-open character range `[start, end)` within a document.
///
/// Spans are snapshots: they describe offsets as of a particular document
/// state and do not adjust themselves when the document changes. Use a
/// `RangeTracker` (in `termite-mutator`) to carry a span across edits.
///
/// # Examples
///
/// ```
/// use termite_core::span::TextSpan;
///
/// let span = TextSpan::new(2, 5);
/// assert_eq!(span.len(), 3);
/// assert!(span.contains(4));
/// assert!(!span.contains(5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextSpan {
    /// Inclusive start offset.
    pub start: usize,
    /// Exclusive end offset.
    pub end: usize,
}

impl TextSpan {
    /// Creates a new span. `start` must not exceed `end`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    pub fn new(start: usize, end: usize) -> Self {
        assert!(start <= end, "span start {} exceeds end {}", start, end);
        Self { start, end }
    }

    /// The empty span at offset zero.
    pub const fn empty() -> Self {
        Self { start: 0, end: 0 }
    }

    /// An empty span anchored at the given offset.
    pub const fn point(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Number of characters covered.
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers no characters.
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether the given offset falls inside the span.
    pub const fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Whether `other` lies entirely within this span.
    pub const fn contains_span(&self, other: TextSpan) -> bool {
        other.start >= self.start && other.end <= self.end
    }

    /// Whether this span and `other` share at least one character.
    pub const fn intersects(&self, other: TextSpan) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether the span fits within a document of the given length.
    pub const fn within(&self, len: usize) -> bool {
        self.end <= len
    }
}

impl fmt::Display for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

impl From<(usize, usize)> for TextSpan {
    fn from((start, end): (usize, usize)) -> Self {
        Self::new(start, end)
    }
}
