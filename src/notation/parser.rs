//! Hypergraph recursive descent parser.
//!
//! Pulls tokens one at a time from the lexer and builds the graph while
//! it goes:
//!
//! ```text
//! hypergraph  := '{' (vector (',' vector)*)? '}'
//! vector      := '{' ident (',' ident)* '}'
//! ```
//!
//! Within a vector, each identifier after the first is linked from the
//! one before it, so `{a,b,c}` yields `a -> b` and `b -> c`.

use tracing::trace;

use super::lexer::{Lexer, Token, TokenKind};
use crate::config::ParseOptions;
use crate::model::NodeId;
use crate::store::GraphStore;
use crate::{ParseError, Result};

/// Parser state — a lexer, one token of lookahead, and the store under
/// construction.
struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token<'a>,
    store: GraphStore,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str, options: &ParseOptions) -> Result<Self> {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token()?;
        trace!(kind = ?current.kind, text = current.text, "token");
        Ok(Self {
            lexer,
            current,
            store: GraphStore::new(options.track_reverse),
        })
    }

    fn peek(&self) -> &Token<'a> {
        &self.current
    }

    fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    fn position(&self) -> usize {
        self.peek().span.start
    }

    /// Consume the current token and return it.
    fn advance(&mut self) -> Result<Token<'a>> {
        let next = self.lexer.next_token()?;
        trace!(kind = ?next.kind, text = next.text, "token");
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    fn eat(&mut self, kind: TokenKind) -> Result<bool> {
        if self.at(kind) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consume a token of `kind` or fail with the error built by `err`.
    fn expect(&mut self, kind: TokenKind, err: fn(usize) -> ParseError) -> Result<Token<'a>> {
        if self.at(kind) {
            self.advance()
        } else {
            Err(err(self.position()))
        }
    }

    /// Consume an identifier and resolve it to its (possibly new) node.
    fn node(&mut self) -> Result<(NodeId, usize)> {
        let tok = self.expect(TokenKind::Identifier, |position| {
            ParseError::ExpectedIdentifier { position }
        })?;
        Ok((self.store.get_or_create(tok.text), tok.span.start))
    }
}

// ============================================================================
// Entry point
// ============================================================================

/// Parse a complete hypergraph. Blank input yields an empty store.
pub fn parse_hypergraph(input: &str, options: &ParseOptions) -> Result<GraphStore> {
    let mut p = Parser::new(input, options)?;

    if p.at(TokenKind::Eof) {
        return Ok(p.store);
    }

    p.expect(TokenKind::LBrace, open_brace)?;
    if !p.eat(TokenKind::RBrace)? {
        parse_vector_list(&mut p)?;
    }

    if !p.at(TokenKind::Eof) {
        return Err(ParseError::Syntax { position: p.position() });
    }

    Ok(p.store)
}

fn open_brace(position: usize) -> ParseError {
    ParseError::ExpectedOpenBrace { position }
}

/// `vector (',' vector)* '}'` — the body of the outer group, including
/// its closing brace.
fn parse_vector_list(p: &mut Parser) -> Result<()> {
    loop {
        parse_vector(p)?;

        match p.peek_kind() {
            TokenKind::Comma => {
                p.advance()?;
                if !p.at(TokenKind::LBrace) {
                    return Err(open_brace(p.position()));
                }
            }
            TokenKind::RBrace => {
                p.advance()?;
                return Ok(());
            }
            // `{..}{..}`: the separator is missing
            TokenKind::LBrace => {
                return Err(ParseError::ExpectedComma { position: p.position() });
            }
            // `{..} x`: separator and opening brace both missing
            TokenKind::Identifier => {
                return Err(ParseError::ExpectedCommaOrOpenBrace { position: p.position() });
            }
            TokenKind::Eof => {
                return Err(ParseError::ExpectedCommaOrCloseBrace { position: p.position() });
            }
        }
    }
}

/// `'{' ident (',' ident)* '}'`, linking consecutive identifiers.
fn parse_vector(p: &mut Parser) -> Result<()> {
    p.expect(TokenKind::LBrace, open_brace)?;

    let (mut current, _) = p.node()?;
    loop {
        match p.peek_kind() {
            TokenKind::Comma => {
                p.advance()?;
                let (next, position) = p.node()?;
                p.store.link(current, next, position)?;
                current = next;
            }
            TokenKind::RBrace => {
                p.advance()?;
                return Ok(());
            }
            _ => {
                return Err(ParseError::ExpectedCommaOrCloseBrace { position: p.position() });
            }
        }
    }
}
