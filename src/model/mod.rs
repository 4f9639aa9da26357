//! # Relation Graph Model
//!
//! The node type stored in a `GraphStore`.
//!
//! Design rule: edges are `NodeId` handles, never owned nodes.
//! This module is pure data — no I/O, no parsing.

pub mod node;

pub use node::{EdgeList, Node, NodeId};
