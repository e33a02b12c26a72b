//! Scanner
//!
//!     Turns goo source text into a lazy sequence of [Token]s. The raw tokenization is done by
//!     logos; this module only wraps it to attach ids and text, and to turn logos' unmatched
//!     input into a [LexError].
//!
//! Lexical Classes
//!
//!     At each position, after skipping whitespace:
//!         1. String literal: `"` up to the next unescaped `"` on the same line. An opening
//!            quote always commits to this class, so an unterminated literal is an error.
//!         2. Operators: `=`, `.` and the reserved `:`.
//!         3. Symbol: a maximal run of anything else that is not whitespace or an operator.
//!
//!     Symbols cover attribute values like `nsew` or `23` and event specifiers like
//!     `<Button-1>` alike.
//!
//! Laziness
//!
//!     [Scanner] produces tokens on demand. It can be restarted by building a new one over the
//!     same source, but never resumed after an error: the first error is reported once and the
//!     iterator is fused from then on.

use crate::goo::token::{Operator, Token, TokenId, TokenKind};
use logos::Logos;
use std::fmt;
use std::iter::FusedIterator;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"\s+")]
enum RawToken {
    #[regex(r#""([^"\\\n]|\\[^\n])*""#)]
    StringLiteral,

    #[token("=")]
    Equals,
    #[token(".")]
    Terminator,
    #[token(":")]
    Colon,

    #[regex(r#"[^=.:\s"][^=.:\s]*"#)]
    Symbol,
}

/// No lexical class matched at `offset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub offset: usize,
    pub found: char,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.found {
            '"' => write!(f, "unterminated string literal at byte {}", self.offset),
            c => write!(f, "unexpected character {:?} at byte {}", c, self.offset),
        }
    }
}

impl std::error::Error for LexError {}

/// Lazy token iterator over a source string.
pub struct Scanner<'src> {
    lexer: logos::Lexer<'src, RawToken>,
    next_id: u32,
    failed: bool,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            lexer: RawToken::lexer(source),
            next_id: 0,
            failed: false,
        }
    }

    fn make_token(&mut self, raw: RawToken) -> Token {
        let span = self.lexer.span();
        let slice = self.lexer.slice();
        let (kind, text) = match raw {
            RawToken::StringLiteral => (TokenKind::StringLiteral, &slice[1..slice.len() - 1]),
            RawToken::Equals => (TokenKind::Operator(Operator::Equals), slice),
            RawToken::Terminator => (TokenKind::Operator(Operator::Terminator), slice),
            RawToken::Colon => (TokenKind::Operator(Operator::Colon), slice),
            RawToken::Symbol => (TokenKind::Symbol, slice),
        };
        let id = TokenId(self.next_id);
        self.next_id += 1;
        Token::new(id, kind, text, span)
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.lexer.next()? {
            Ok(raw) => {
                let token = self.make_token(raw);
                log::trace!("scanned {}", token);
                Some(Ok(token))
            }
            Err(()) => {
                self.failed = true;
                let offset = self.lexer.span().start;
                // logos only fails on a non-empty remainder
                let found = self.lexer.source()[offset..].chars().next()?;
                log::debug!("scanner stopped at byte {}", offset);
                Some(Err(LexError { offset, found }))
            }
        }
    }
}

impl FusedIterator for Scanner<'_> {}

/// Scan the whole source eagerly.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Scanner::new(source).collect()
}
