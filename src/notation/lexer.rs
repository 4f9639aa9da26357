//! Notation lexer — turns an input string into tokens on demand.

use std::iter::Peekable;
use std::str::CharIndices;

use crate::LexError;

/// A token from the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub span: Span,
    /// Slice of the input; empty for `Eof`.
    pub text: &'a str,
}

/// Source span, in characters (not bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Token kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // Symbols
    LBrace, RBrace, Comma,

    Identifier,

    Eof,
}

impl TokenKind {
    /// The character of a symbol token.
    pub fn symbol(self) -> Option<char> {
        match self {
            TokenKind::LBrace => Some('{'),
            TokenKind::RBrace => Some('}'),
            TokenKind::Comma => Some(','),
            TokenKind::Identifier | TokenKind::Eof => None,
        }
    }
}

impl<'a> Token<'a> {
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    pub fn is_symbol(&self, c: char) -> bool {
        self.kind.symbol() == Some(c)
    }

    pub fn is_identifier(&self) -> bool {
        self.kind == TokenKind::Identifier
    }
}

/// Identifier characters: ASCII letters and digits only.
pub fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Separator whitespace: Unicode `White_Space` plus the byte order mark
/// U+FEFF, minus NEXT LINE U+0085.
pub fn is_space(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

// ============================================================================
// Lexer
// ============================================================================

/// Pull-based lexer over a fixed input. The cursor never moves back.
pub struct Lexer<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
    /// Characters consumed so far.
    offset: usize,
    /// Set once `Eof` or an error has been yielded through `Iterator`.
    done: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
            offset: 0,
            done: false,
        }
    }

    /// Current cursor, in characters.
    pub fn offset(&self) -> usize {
        self.offset
    }

    fn bump(&mut self) -> Option<(usize, char)> {
        let next = self.chars.next();
        if next.is_some() {
            self.offset += 1;
        }
        next
    }

    /// Produce the next token. Once the input is exhausted this keeps
    /// returning `Eof`.
    pub fn next_token(&mut self) -> Result<Token<'a>, LexError> {
        while self.chars.peek().is_some_and(|&(_, c)| is_space(c)) {
            self.bump();
        }

        let start = self.offset;
        let Some(&(byte_pos, ch)) = self.chars.peek() else {
            return Ok(Token {
                kind: TokenKind::Eof,
                span: Span { start, end: start },
                text: "",
            });
        };

        let kind = match ch {
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            ',' => TokenKind::Comma,
            c if is_ident_char(c) => {
                let mut byte_end = byte_pos;
                while let Some(&(pos, c)) = self.chars.peek() {
                    if !is_ident_char(c) {
                        break;
                    }
                    byte_end = pos + c.len_utf8();
                    self.bump();
                }
                return Ok(Token {
                    kind: TokenKind::Identifier,
                    span: Span { start, end: self.offset },
                    text: &self.input[byte_pos..byte_end],
                });
            }
            other => {
                return Err(LexError::InvalidCharacter {
                    position: start,
                    character: other,
                });
            }
        };

        self.bump();
        Ok(Token {
            kind,
            span: Span { start, end: start + 1 },
            text: &self.input[byte_pos..byte_pos + 1],
        })
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>, LexError>;

    /// Yields tokens through `Eof` inclusive, or up to the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.next_token();
        if item.as_ref().map_or(true, Token::is_eof) {
            self.done = true;
        }
        Some(item)
    }
}

/// Tokenize a whole string; the last token is always `Eof`.
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, LexError> {
    Lexer::new(input).collect()
}
