//! Syntax-node identification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque handle to a node in a document's syntax tree.
///
/// The tree itself lives behind the [`SyntaxTree`](crate::document::SyntaxTree)
/// trait; a `NodeId` is only meaningful together with the tree that issued it
/// and only until the next reparse of that tree.
///
/// # Examples
///
/// ```
/// use termite_core::node::NodeId;
///
/// let node = NodeId(7);
/// assert_eq!(node.inner(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Creates a new NodeId with the given value.
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the inner value of the NodeId.
    #[inline]
    pub const fn inner(self) -> u32 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

impl From<u32> for NodeId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<NodeId> for u32 {
    fn from(id: NodeId) -> Self {
        id.0
    }
}
