//! Token types shared by the scanner, the parser and provenance queries.
//!
//!     The lexical layer is flat: there are only three token classes, and
//!     the grammar (not the scanner) decides what a symbol means. A symbol may be an element
//!     name, an attribute key, an attribute value or a toolkit event specifier like
//!     `<Button-1>`; the scanner does not care.
//!
//! Token Identity
//!
//!     Two tokens with the same text at different positions are different tokens. Every token
//!     carries a [TokenId], its ordinal in the stream, and equality includes it. Provenance sets
//!     store these ids, never copies of the text.
//!
//! Spans
//!
//!     Each token keeps the exact `[begin, end)` byte range it was matched from. For string
//!     literals the span includes the quotes while the text does not.

use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// Ordinal of a token in its stream. This is the token's identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TokenId(pub u32);

impl TokenId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Single-character operators.
///
/// `Colon` has no production in the grammar. It is still scanned as an operator so that it
/// can never become part of a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Operator {
    Equals,
    Terminator,
    Colon,
}

impl Operator {
    pub fn as_char(self) -> char {
        match self {
            Operator::Equals => '=',
            Operator::Terminator => '.',
            Operator::Colon => ':',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    Operator(Operator),
    Symbol,
    StringLiteral,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Operator(op) => write!(f, "operator '{}'", op.as_char()),
            TokenKind::Symbol => write!(f, "symbol"),
            TokenKind::StringLiteral => write!(f, "string literal"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    pub id: TokenId,
    pub kind: TokenKind,
    pub text: String,
    pub span: Range<usize>,
}

impl Token {
    pub fn new(id: TokenId, kind: TokenKind, text: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            id,
            kind,
            text: text.into(),
            span,
        }
    }

    pub fn is_symbol(&self) -> bool {
        matches!(self.kind, TokenKind::Symbol)
    }

    pub fn is_operator(&self, op: Operator) -> bool {
        self.kind == TokenKind::Operator(op)
    }

    /// Symbols and string literals may both appear on the right of `=`.
    pub fn is_value(&self) -> bool {
        matches!(self.kind, TokenKind::Symbol | TokenKind::StringLiteral)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Operator(op) => write!(f, "'{}' at {}", op.as_char(), self.span.start),
            TokenKind::Symbol => write!(f, "symbol `{}` at {}", self.text, self.span.start),
            TokenKind::StringLiteral => {
                write!(f, "string \"{}\" at {}", self.text, self.span.start)
            }
        }
    }
}
