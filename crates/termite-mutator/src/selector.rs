//! Syntax-aligned range selection.

use termite_generator::{integers, Distribution, DrawSource, Generate, GenerateError, GenerateResult, GeneratorConfig};

use termite_core::{SyntaxTree, TextDocument, TextSpan};

/// Converts generator-chosen offsets into a syntax-aligned span.
///
/// Two raw offsets are drawn — a uniform start and a geometric extent past
/// it — then snapped to structure: the nodes covering both offsets are
/// located and the span of their nearest common ancestor is returned. The
/// resulting edit boundary always coincides with a node boundary, so edits
/// exercise realistic incremental-reparse paths instead of tearing a node's
/// interior.
#[derive(Debug)]
pub struct StructuralRangeSelector<'d, D: ?Sized> {
    doc: &'d D,
    extent: Distribution,
}

impl<'d, D> StructuralRangeSelector<'d, D>
where
    D: TextDocument + SyntaxTree + ?Sized,
{
    /// Binds a selector to a document with the given policy knobs.
    pub fn new(doc: &'d D, config: &GeneratorConfig) -> Self {
        Self {
            doc,
            extent: Distribution::Geometric {
                mean: config.extent_mean,
            },
        }
    }

    /// Selects one syntax-aligned candidate span.
    ///
    /// Returns `Err(Rejected)` when an offset lookup finds no node (for
    /// instance when the geometric extent lands past the end of the
    /// document); callers retry through a bounded combinator. An empty
    /// document short-circuits to `[0, 0)` without any lookup.
    pub fn select(&self, source: &mut DrawSource) -> GenerateResult<TextSpan> {
        let len = self.doc.len();
        if len == 0 {
            return Ok(TextSpan::empty());
        }

        let start = integers(0, (len - 1) as u64).generate(source)? as usize;
        let extent = self.extent.sample(source) as usize;
        // Intentionally unclamped: an out-of-bounds end offset simply fails
        // the lookup below and rejects the candidate.
        let end_offset = start.saturating_add(extent);

        let Some(start_node) = self.doc.node_at(start) else {
            tracing::trace!(start, "no node at start offset");
            return Err(GenerateError::Rejected);
        };
        let Some(end_node) = self.doc.node_at(end_offset) else {
            tracing::trace!(end_offset, "no node at end offset");
            return Err(GenerateError::Rejected);
        };
        let Some(ancestor) = self.doc.common_ancestor(start_node, end_node) else {
            return Err(GenerateError::Rejected);
        };

        Ok(self.doc.node_span(ancestor))
    }
}
