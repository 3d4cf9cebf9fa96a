//! Span tracking across document mutations.

use serde::{Deserialize, Serialize};

use termite_core::{AppliedEdit, EditLog, TextSpan};

/// A span handle that survives edits made elsewhere in the document.
///
/// A tracker is an explicit `(captured span, generation counter)` pair. It
/// registers no listeners and holds no reference to the document; instead,
/// every read replays the edits committed since capture over the captured
/// span using marker semantics:
///
/// - an edit wholly before the span shifts both endpoints by its length
///   delta;
/// - an edit wholly after the span leaves it unchanged;
/// - an overlapping edit clamps the span to the surviving text;
/// - an edit that destroys all of the spanned text invalidates the tracker
///   permanently.
///
/// A tracker is created when a mutation candidate is accepted and read once,
/// via [`RangeTracker::final_span`], when the action executes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeTracker {
    captured: TextSpan,
    generation: u64,
}

impl RangeTracker {
    /// Binds a tracker to `span` at the document's current generation.
    pub fn capture<D: EditLog + ?Sized>(doc: &D, span: TextSpan) -> Self {
        Self {
            captured: span,
            generation: doc.generation(),
        }
    }

    /// The span as originally captured, before any adjustment.
    pub fn captured_span(&self) -> TextSpan {
        self.captured
    }

    /// The document generation at capture time.
    pub fn capture_generation(&self) -> u64 {
        self.generation
    }

    /// The live, edit-adjusted span, or `None` if the tracked text was
    /// destroyed by an intervening mutation.
    pub fn current_span<D: EditLog + ?Sized>(&self, doc: &D) -> Option<TextSpan> {
        let mut span = self.captured;
        for edit in doc.edits_since(self.generation) {
            span = remap(span, &edit)?;
        }
        Some(span)
    }

    /// Terminal read: same information as [`RangeTracker::current_span`],
    /// but consumes the tracker — the type system enforces that it is not
    /// consulted again.
    pub fn final_span<D: EditLog + ?Sized>(self, doc: &D) -> Option<TextSpan> {
        self.current_span(doc)
    }
}

/// Adjusts `span` for one committed edit. Returns `None` when the edit
/// destroyed all of the spanned text.
fn remap(span: TextSpan, edit: &AppliedEdit) -> Option<TextSpan> {
    let es = edit.span.start;
    let ee = edit.span.end;
    let removed = edit.span.len();
    let r = edit.replacement_len;

    if span.is_empty() {
        // A point marker: an edit at or after the point leaves it alone; an
        // edit ending at or before it shifts it; an edit straddling it
        // collapses it to the edit start.
        let p = span.start;
        let p = if p >= ee {
            p - removed + r
        } else if p <= es {
            p
        } else {
            es
        };
        return Some(TextSpan::point(p));
    }

    let start = if span.start >= ee {
        span.start - removed + r
    } else if span.start < es {
        span.start
    } else {
        // Head of the span was replaced; the surviving text begins right
        // after the replacement.
        es + r
    };
    let end = if span.end <= es {
        span.end
    } else if span.end >= ee {
        span.end - removed + r
    } else {
        // Tail of the span was replaced; the surviving text ends where the
        // edit begins.
        es
    };

    if end <= start {
        // The edit consumed every character the span covered.
        None
    } else {
        Some(TextSpan::new(start, end))
    }
}
