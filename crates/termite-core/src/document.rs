//! Collaborator traits: the document, syntax tree, transaction runner, and
//! validity checker the engine mutates through.
//!
//! The engine never implements parsing or text storage itself. A host editor
//! or test harness supplies these traits; the engine only decides *what* to
//! mutate and verifies the result afterwards.

use crate::edit::{AppliedEdit, Edit};
use crate::error::{StructuralViolation, TransactionError};
use crate::node::NodeId;
use crate::span::TextSpan;

/// A mutable text document addressable by zero-based character offset.
///
/// Every committed edit must bump [`EditLog::generation`] and append a record
/// retrievable through [`EditLog::edits_since`]; span remapping depends on
/// that log being complete and ordered.
pub trait TextDocument: EditLog {
    /// Stable identity for reproduction strings (a path, URI, or label).
    fn identity(&self) -> &str;

    /// Current length in characters.
    fn len(&self) -> usize;

    /// Whether the document is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The deepest syntax node covering `offset`, or `None` if the offset is
    /// out of bounds or the document has no structure there.
    fn node_at(&self, offset: usize) -> Option<NodeId>;

    /// Commits a single edit. Implementations must apply the edit and all
    /// structural bookkeeping it triggers (reparse, cache update) before
    /// returning; a returned error means nothing was observably applied.
    fn apply_edit(&mut self, edit: Edit) -> Result<(), TransactionError>;
}

/// The structural tree over a [`TextDocument`].
///
/// Node handles are only valid against the tree state that issued them, i.e.
/// until the next committed edit.
pub trait SyntaxTree {
    /// The nearest common structural ancestor of two nodes. Returns `None`
    /// only if the nodes belong to disjoint trees; nodes obtained from the
    /// same document state always share at least the root.
    fn common_ancestor(&self, a: NodeId, b: NodeId) -> Option<NodeId>;

    /// The text range the node covers.
    fn node_span(&self, node: NodeId) -> TextSpan;
}

/// Access to a document's committed-edit history, keyed by a generation
/// counter that increments once per committed edit.
pub trait EditLog {
    /// Generation counter of the current document state.
    fn generation(&self) -> u64;

    /// All edits committed after the state identified by `generation`, in
    /// commit order. `edits_since(self.generation())` is always empty.
    fn edits_since(&self, generation: u64) -> Vec<AppliedEdit>;
}

/// Scoped, all-or-nothing execution of an edit effect against a document.
///
/// Either the effect and all structural bookkeeping it triggers complete, or
/// none of it is observably applied.
pub trait TransactionRunner<D: ?Sized> {
    /// Runs `effect` as a single indivisible unit.
    fn run_atomically(
        &self,
        doc: &mut D,
        effect: &mut dyn FnMut(&mut D) -> Result<(), TransactionError>,
    ) -> Result<(), TransactionError>;
}

/// A runner that executes the effect inline.
///
/// Suitable when the document implementation is itself transactional (its
/// `apply_edit` either fully commits or fully fails), which is the contract
/// [`TextDocument::apply_edit`] already demands. Hosts with a real write
/// command mechanism supply their own runner instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateRunner;

impl<D: ?Sized> TransactionRunner<D> for ImmediateRunner {
    fn run_atomically(
        &self,
        doc: &mut D,
        effect: &mut dyn FnMut(&mut D) -> Result<(), TransactionError>,
    ) -> Result<(), TransactionError> {
        effect(doc)
    }
}

/// Post-mutation consistency checks supplied by the host.
///
/// Both methods fail loudly on mismatch; a violation is fatal to the
/// enclosing mutation session.
pub trait ValidityChecker<D: ?Sized> {
    /// Asserts that every node's recorded span is within document bounds and
    /// internally consistent.
    fn assert_structurally_valid(&self, doc: &D) -> Result<(), StructuralViolation>;

    /// Asserts that the tree's cached structural representation matches a
    /// full reparse of the current text.
    fn assert_cached_matches_text(&self, doc: &D) -> Result<(), StructuralViolation>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter(u32);

    #[test]
    fn test_immediate_runner_runs_effect() {
        let runner = ImmediateRunner;
        let mut doc = Counter(0);

        let result = runner.run_atomically(&mut doc, &mut |d| {
            d.0 += 1;
            Ok(())
        });

        assert!(result.is_ok());
        assert_eq!(doc.0, 1);
    }

    #[test]
    fn test_immediate_runner_propagates_failure() {
        let runner = ImmediateRunner;
        let mut doc = Counter(0);

        let result = runner.run_atomically(&mut doc, &mut |_| {
            Err(TransactionError::failed("resource unavailable"))
        });

        assert!(matches!(result, Err(TransactionError::Failed(_))));
    }
}
