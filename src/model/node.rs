//! Node in the relation graph.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Handle of a node inside the `GraphStore` that created it.
///
/// Ids are dense and follow first-occurrence order: the first identifier
/// seen gets `NodeId(0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub usize);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered, duplicate-free list of neighbours.
pub type EdgeList = SmallVec<[NodeId; 4]>;

/// One identifier seen in the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    id: NodeId,
    name: String,
    /// Targets of relations where this node is the source.
    forward: EdgeList,
    /// Sources of relations targeting this node. Empty when reverse
    /// tracking is disabled.
    reverse: EdgeList,
}

impl Node {
    pub(crate) fn new(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            forward: EdgeList::new(),
            reverse: EdgeList::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn forward(&self) -> &[NodeId] {
        &self.forward
    }

    pub fn reverse(&self) -> &[NodeId] {
        &self.reverse
    }

    pub fn points_to(&self, other: NodeId) -> bool {
        self.forward.contains(&other)
    }

    pub fn pointed_by(&self, other: NodeId) -> bool {
        self.reverse.contains(&other)
    }

    /// No relation in either direction.
    pub fn is_isolated(&self) -> bool {
        self.forward.is_empty() && self.reverse.is_empty()
    }

    // Callers check for duplicates first; see `GraphStore::link`.
    pub(crate) fn push_forward(&mut self, to: NodeId) {
        self.forward.push(to);
    }

    pub(crate) fn push_reverse(&mut self, from: NodeId) {
        self.reverse.push(from);
    }
}
