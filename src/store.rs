//! In-memory graph store.
//!
//! Nodes live in an insertion-ordered arena; a `hashbrown` map indexes
//! them by name. Edges are `NodeId`s into the arena, so cycles such as
//! `{{a,b},{b,a}}` need no shared ownership.
//!
//! The store is append-only: there is no removal, and mutation is
//! reserved to the parser (`pub(crate)`). Callers receive it read-only.

use hashbrown::HashMap;
use tracing::debug;

use crate::model::{Node, NodeId};
use crate::{ParseError, Result};

// ============================================================================
// GraphStore
// ============================================================================

/// Identifier → node mapping produced by one successful parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphStore {
    nodes: Vec<Node>,
    /// name → arena index
    index: HashMap<String, NodeId>,
    track_reverse: bool,
}

impl GraphStore {
    pub(crate) fn new(track_reverse: bool) -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            track_reverse,
        }
    }

    // ========================================================================
    // Construction (parser only)
    // ========================================================================

    /// Return the node named `name`, creating it on first sight.
    pub(crate) fn get_or_create(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(id, name));
        self.index.insert(name.to_string(), id);
        debug!(node = name, %id, "created node");
        id
    }

    /// Record `from → to`, plus the mirrored reverse edge when tracked.
    ///
    /// Both duplicate checks run before either side is written, so a
    /// failed link leaves the store untouched. `position` is the offset
    /// of the identifier that introduced the relation.
    pub(crate) fn link(&mut self, from: NodeId, to: NodeId, position: usize) -> Result<()> {
        if self.nodes[from.0].points_to(to) {
            return Err(ParseError::DuplicateRelationship {
                from: self.nodes[from.0].name().to_string(),
                to: self.nodes[to.0].name().to_string(),
                position,
            });
        }
        if self.track_reverse && self.nodes[to.0].pointed_by(from) {
            return Err(ParseError::DuplicateReverseRelationship {
                from: self.nodes[from.0].name().to_string(),
                to: self.nodes[to.0].name().to_string(),
                position,
            });
        }

        self.nodes[from.0].push_forward(to);
        if self.track_reverse {
            self.nodes[to.0].push_reverse(from);
        }
        debug!(
            from = self.nodes[from.0].name(),
            to = self.nodes[to.0].name(),
            "linked nodes"
        );
        Ok(())
    }

    // ========================================================================
    // Read access
    // ========================================================================

    /// Whether reverse relations were recorded while building this store.
    pub fn tracks_reverse(&self) -> bool {
        self.track_reverse
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Node> {
        self.index.get(name).map(|id| &self.nodes[id.0])
    }

    /// Resolve a handle. `None` for ids that belong to another store.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Nodes in first-occurrence order.
    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// `(name, node)` pairs in first-occurrence order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Node)> + '_ {
        self.nodes.iter().map(|n| (n.name(), n))
    }

    /// Names of the nodes `node` points to.
    pub fn forward_names<'s>(&'s self, node: &'s Node) -> impl Iterator<Item = &'s str> + 's {
        self.names(node.forward())
    }

    /// Names of the nodes pointing to `node`.
    pub fn reverse_names<'s>(&'s self, node: &'s Node) -> impl Iterator<Item = &'s str> + 's {
        self.names(node.reverse())
    }

    fn names<'s>(&'s self, ids: &'s [NodeId]) -> impl Iterator<Item = &'s str> + 's {
        ids.iter().filter_map(|id| self.node(*id)).map(Node::name)
    }

    /// Every forward edge as `(source, target)`, by source order then
    /// edge order.
    pub fn edges(&self) -> impl Iterator<Item = (&Node, &Node)> + '_ {
        self.nodes.iter().flat_map(move |src| {
            src.forward()
                .iter()
                .filter_map(move |id| self.node(*id).map(|dst| (src, dst)))
        })
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.forward().len()).sum()
    }
}

impl<'a> IntoIterator for &'a GraphStore {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================
