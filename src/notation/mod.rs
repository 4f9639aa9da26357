//! # Hypergraph Notation
//!
//! Lexer and parser for `{{a,b},{b,c,d}}`-style notation.
//! Pure functions — no I/O, no state shared between calls.

pub mod lexer;
pub mod parser;

use tracing::debug;

use crate::config::ParseOptions;
use crate::store::GraphStore;
use crate::Result;

/// Parse notation into a fresh graph, tracking reverse relations.
pub fn parse(input: &str) -> Result<GraphStore> {
    parse_with(input, &ParseOptions::default())
}

/// Parse notation into a fresh graph using `options`.
///
/// All-or-nothing: on error the partially built graph is dropped.
pub fn parse_with(input: &str, options: &ParseOptions) -> Result<GraphStore> {
    let store = parser::parse_hypergraph(input, options)?;
    debug!(nodes = store.len(), edges = store.edge_count(), "parsed hypergraph");
    Ok(store)
}
