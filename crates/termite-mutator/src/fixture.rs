//! In-memory document and checker used by this crate's tests.
//!
//! The real engine mutates a host-supplied document; this fixture stands in
//! for one with a deliberately tiny grammar: runs of alphanumerics are
//! tokens, parentheses open and close nested groups, and everything else is
//! a single-character token. Every committed edit reparses the text, bumps
//! the generation counter, appends to the edit log, and refreshes a cached
//! structural snapshot that the checker compares against a fresh parse.

use termite_core::{
    AppliedEdit, Edit, EditLog, NodeId, StructuralViolation, SyntaxTree, TextDocument, TextSpan,
    TransactionError, ValidityChecker,
};

#[derive(Debug, Clone)]
struct Node {
    span: TextSpan,
    parent: Option<usize>,
}

fn parse(text: &str) -> Vec<Node> {
    let len = text.len();
    let mut nodes = vec![Node {
        span: TextSpan::new(0, len),
        parent: None,
    }];
    let mut stack: Vec<usize> = vec![0];
    let bytes = text.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        let parent = *stack.last().unwrap();
        match bytes[i] {
            b'(' => {
                let group = nodes.len();
                // Tentatively spans to the end; fixed up at the matching ')'.
                nodes.push(Node {
                    span: TextSpan::new(i, len),
                    parent: Some(parent),
                });
                stack.push(group);
                nodes.push(Node {
                    span: TextSpan::new(i, i + 1),
                    parent: Some(group),
                });
                i += 1;
            }
            b')' => {
                let group = *stack.last().unwrap();
                nodes.push(Node {
                    span: TextSpan::new(i, i + 1),
                    parent: Some(group),
                });
                if stack.len() > 1 {
                    let closed = stack.pop().unwrap();
                    nodes[closed].span = TextSpan::new(nodes[closed].span.start, i + 1);
                }
                i += 1;
            }
            c if c.is_ascii_alphanumeric() => {
                let start = i;
                while i < bytes.len() && bytes[i].is_ascii_alphanumeric() {
                    i += 1;
                }
                nodes.push(Node {
                    span: TextSpan::new(start, i),
                    parent: Some(parent),
                });
            }
            _ => {
                nodes.push(Node {
                    span: TextSpan::new(i, i + 1),
                    parent: Some(parent),
                });
                i += 1;
            }
        }
    }

    nodes
}

fn shape(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        out.push_str(&format!("{}..{}@{:?};", node.span.start, node.span.end, node.parent));
    }
    out
}

/// A scratch document with its own parser, edit log, and structural cache.
#[derive(Debug, Clone)]
pub struct ScratchDocument {
    path: String,
    text: String,
    nodes: Vec<Node>,
    cached_shape: String,
    generation: u64,
    edits: Vec<AppliedEdit>,
    corrupt_next: bool,
}

impl ScratchDocument {
    pub fn new(path: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let nodes = parse(&text);
        let cached_shape = shape(&nodes);
        Self {
            path: path.into(),
            text,
            nodes,
            cached_shape,
            generation: 0,
            edits: Vec::new(),
            corrupt_next: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether any node's span equals `span` exactly (structural-alignment
    /// assertions).
    pub fn has_node_with_span(&self, span: TextSpan) -> bool {
        self.nodes.iter().any(|node| node.span == span)
    }

    /// Makes the next committed edit leave a stale structural cache behind,
    /// so the consistency check fails.
    pub fn corrupt_cache_after_next_edit(&mut self) {
        self.corrupt_next = true;
    }
}

impl EditLog for ScratchDocument {
    fn generation(&self) -> u64 {
        self.generation
    }

    fn edits_since(&self, generation: u64) -> Vec<AppliedEdit> {
        self.edits[generation as usize..].to_vec()
    }
}

impl TextDocument for ScratchDocument {
    fn identity(&self) -> &str {
        &self.path
    }

    fn len(&self) -> usize {
        self.text.len()
    }

    fn node_at(&self, offset: usize) -> Option<NodeId> {
        if offset >= self.text.len() {
            return None;
        }
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.span.contains(offset))
            .min_by_key(|(_, node)| node.span.len())
            .map(|(index, _)| NodeId(index as u32))
    }

    fn apply_edit(&mut self, edit: Edit) -> Result<(), TransactionError> {
        if !edit.span.within(self.text.len()) {
            return Err(TransactionError::out_of_bounds(edit.span, self.text.len()));
        }
        self.edits.push(AppliedEdit::of(&edit));
        self.text
            .replace_range(edit.span.start..edit.span.end, &edit.replacement);
        self.generation += 1;
        self.nodes = parse(&self.text);
        self.cached_shape = shape(&self.nodes);
        if self.corrupt_next {
            self.cached_shape.push_str("!stale");
            self.corrupt_next = false;
        }
        Ok(())
    }
}

impl SyntaxTree for ScratchDocument {
    fn common_ancestor(&self, a: NodeId, b: NodeId) -> Option<NodeId> {
        let a = a.inner() as usize;
        let b = b.inner() as usize;
        if a >= self.nodes.len() || b >= self.nodes.len() {
            return None;
        }

        let mut chain = Vec::new();
        let mut current = Some(a);
        while let Some(index) = current {
            chain.push(index);
            current = self.nodes[index].parent;
        }

        let mut current = Some(b);
        while let Some(index) = current {
            if chain.contains(&index) {
                return Some(NodeId(index as u32));
            }
            current = self.nodes[index].parent;
        }
        None
    }

    fn node_span(&self, node: NodeId) -> TextSpan {
        self.nodes[node.inner() as usize].span
    }
}

/// Checker that revalidates node spans and compares the cached structural
/// snapshot against a fresh parse.
#[derive(Debug, Clone, Copy)]
pub struct ShapeChecker;

impl ShapeChecker {
    /// Runs both assertions in order.
    pub fn check_all(&self, doc: &ScratchDocument) -> Result<(), StructuralViolation> {
        self.assert_structurally_valid(doc)?;
        self.assert_cached_matches_text(doc)
    }
}

impl ValidityChecker<ScratchDocument> for ShapeChecker {
    fn assert_structurally_valid(&self, doc: &ScratchDocument) -> Result<(), StructuralViolation> {
        let len = doc.text.len();
        for (index, node) in doc.nodes.iter().enumerate() {
            if !node.span.within(len) {
                return Err(StructuralViolation::new(format!(
                    "node {index} span {} exceeds document length {len}",
                    node.span
                )));
            }
            if let Some(parent) = node.parent {
                if !doc.nodes[parent].span.contains_span(node.span) {
                    return Err(StructuralViolation::new(format!(
                        "node {index} span {} escapes parent {parent} span {}",
                        node.span, doc.nodes[parent].span
                    )));
                }
            }
        }
        Ok(())
    }

    fn assert_cached_matches_text(&self, doc: &ScratchDocument) -> Result<(), StructuralViolation> {
        if shape(&parse(&doc.text)) != doc.cached_shape {
            return Err(StructuralViolation::new(
                "cached structural shape diverged from text",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nests_groups() {
        let doc = ScratchDocument::new("t", "func(a,b)");

        // "func" token.
        let func = doc.node_at(1).unwrap();
        assert_eq!(doc.node_span(func), TextSpan::new(0, 4));

        // "a" and "b" are leaves inside the group.
        let a = doc.node_at(5).unwrap();
        let b = doc.node_at(7).unwrap();
        assert_eq!(doc.node_span(a), TextSpan::new(5, 6));
        assert_eq!(doc.node_span(b), TextSpan::new(7, 8));

        // Their common ancestor is the parenthesized group.
        let group = doc.common_ancestor(a, b).unwrap();
        assert_eq!(doc.node_span(group), TextSpan::new(4, 9));
    }

    #[test]
    fn test_common_ancestor_of_node_with_itself() {
        let doc = ScratchDocument::new("t", "func(a,b)");
        let a = doc.node_at(5).unwrap();
        assert_eq!(doc.common_ancestor(a, a), Some(a));
    }

    #[test]
    fn test_node_at_out_of_bounds() {
        let doc = ScratchDocument::new("t", "ab");
        assert!(doc.node_at(2).is_none());
        assert!(doc.node_at(100).is_none());

        let empty = ScratchDocument::new("t", "");
        assert!(empty.node_at(0).is_none());
    }

    #[test]
    fn test_unclosed_group_spans_to_end() {
        let doc = ScratchDocument::new("t", "f(a");
        let a = doc.node_at(2).unwrap();
        let open = doc.node_at(1).unwrap();
        let group = doc.common_ancestor(a, open).unwrap();
        assert_eq!(doc.node_span(group), TextSpan::new(1, 3));
    }

    #[test]
    fn test_edit_log_and_generation() {
        let mut doc = ScratchDocument::new("t", "abc");
        assert_eq!(doc.generation(), 0);

        doc.apply_edit(Edit::delete(TextSpan::new(0, 1))).unwrap();
        doc.apply_edit(Edit::insert(0, "xy")).unwrap();
        assert_eq!(doc.generation(), 2);
        assert_eq!(doc.text(), "xybc");

        assert_eq!(doc.edits_since(2), vec![]);
        assert_eq!(
            doc.edits_since(1),
            vec![AppliedEdit::new(TextSpan::point(0), 2)]
        );
        assert_eq!(doc.edits_since(0).len(), 2);
    }

    #[test]
    fn test_out_of_bounds_edit_rejected() {
        let mut doc = ScratchDocument::new("t", "abc");
        let err = doc
            .apply_edit(Edit::delete(TextSpan::new(2, 5)))
            .unwrap_err();
        assert!(matches!(err, TransactionError::OutOfBounds { .. }));
        // Nothing was applied.
        assert_eq!(doc.text(), "abc");
        assert_eq!(doc.generation(), 0);
    }

    #[test]
    fn test_checker_passes_on_consistent_document() {
        let mut doc = ScratchDocument::new("t", "f(a,(b,c))");
        assert!(ShapeChecker.check_all(&doc).is_ok());

        doc.apply_edit(Edit::delete(TextSpan::new(4, 9))).unwrap();
        assert!(ShapeChecker.check_all(&doc).is_ok());
    }

    #[test]
    fn test_checker_detects_stale_cache() {
        let mut doc = ScratchDocument::new("t", "f(a)");
        doc.corrupt_cache_after_next_edit();
        doc.apply_edit(Edit::delete(TextSpan::new(2, 3))).unwrap();

        assert!(ShapeChecker.assert_structurally_valid(&doc).is_ok());
        assert!(ShapeChecker.assert_cached_matches_text(&doc).is_err());
    }
}
