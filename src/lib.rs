//! # hypergraph-rs — Relation Graphs from Brace Notation
//!
//! Parses hypergraph notation such as `{{a,b},{b,c,d}}` into a directed
//! graph recording, for every identifier, which identifiers it points to
//! and which point to it.
//!
//! ## Design Principles
//!
//! 1. **Parser owns the store**: one `parse` call builds one fresh `GraphStore`
//!    and hands it over only on success
//! 2. **Arena + handles**: nodes live in the store, edges are `NodeId`s
//! 3. **Closed errors**: every failure is a `ParseError` variant carrying positions
//!
//! ## Quick Start
//!
//! ```rust
//! use hypergraph_rs::parse;
//!
//! # fn example() -> hypergraph_rs::Result<()> {
//! let graph = parse("{{a,b},{a,c}}")?;
//!
//! let a = graph.get("a").unwrap();
//! assert_eq!(graph.forward_names(a).collect::<Vec<_>>(), vec!["b", "c"]);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Notation
//!
//! | Rule | Form |
//! |------|------|
//! | hypergraph | `'{' (vector (',' vector)*)? '}'` |
//! | vector | `'{' ident (',' ident)* '}'` |
//! | ident | `[0-9A-Za-z]+` |

// ============================================================================
// Modules
// ============================================================================

pub mod config;
pub mod export;
pub mod model;
pub mod notation;
pub mod store;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ParseOptions;
pub use model::{Node, NodeId};
pub use notation::{parse, parse_with};
pub use notation::lexer::{Lexer, Span, Token, TokenKind};
pub use store::GraphStore;

// ============================================================================
// Presentation entry point
// ============================================================================

/// Parse `input` and produce what a front end displays: the text listing of
/// the graph on success, the error message otherwise.
pub fn parse_and_render(input: &str) -> String {
    match parse(input) {
        Ok(graph) => export::to_text(&graph),
        Err(e) => e.to_string(),
    }
}

// ============================================================================
// Error Types
// ============================================================================

/// Lexical failure: the input contains a character outside the notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("Lexer::next_token: invalid character '{character}' at position {position}")]
    InvalidCharacter { position: usize, character: char },
}

impl LexError {
    pub fn position(&self) -> usize {
        match self {
            LexError::InvalidCharacter { position, .. } => *position,
        }
    }
}

/// Any failure while turning notation into a graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("Parser::parse: expected an opening curly brace at position {position}")]
    ExpectedOpenBrace { position: usize },

    #[error("Parser::parse: expected an identifier at position {position}")]
    ExpectedIdentifier { position: usize },

    #[error("Parser::parse: expected a comma at position {position}")]
    ExpectedComma { position: usize },

    #[error("Parser::parse: expected a comma or a closing curly brace at position {position}")]
    ExpectedCommaOrCloseBrace { position: usize },

    #[error("Parser::parse: expected a comma or an opening curly brace at position {position}")]
    ExpectedCommaOrOpenBrace { position: usize },

    #[error("Parser::parse: syntax error at position {position}")]
    Syntax { position: usize },

    #[error("GraphStore::link: relationship already exists: {from} -> {to} (at position {position})")]
    DuplicateRelationship { from: String, to: String, position: usize },

    /// Guards the forward/reverse mirror; a consistent store raises
    /// `DuplicateRelationship` first.
    #[error("GraphStore::link: reverse relationship already exists: {to} <- {from} (at position {position})")]
    DuplicateReverseRelationship { from: String, to: String, position: usize },
}

impl ParseError {
    /// Character offset the error points at.
    pub fn position(&self) -> usize {
        match self {
            ParseError::Lex(e) => e.position(),
            ParseError::ExpectedOpenBrace { position }
            | ParseError::ExpectedIdentifier { position }
            | ParseError::ExpectedComma { position }
            | ParseError::ExpectedCommaOrCloseBrace { position }
            | ParseError::ExpectedCommaOrOpenBrace { position }
            | ParseError::Syntax { position }
            | ParseError::DuplicateRelationship { position, .. }
            | ParseError::DuplicateReverseRelationship { position, .. } => *position,
        }
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;
