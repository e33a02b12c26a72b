//! Token factories
//!
//! Tokens built here carry explicit ids and spans so tests can compare them directly
//! against scanner output.

use crate::goo::token::{Operator, Token, TokenId, TokenKind};
use std::ops::Range;

pub fn symbol(id: u32, text: &str, span: Range<usize>) -> Token {
    Token::new(TokenId(id), TokenKind::Symbol, text, span)
}

/// A string literal; `text` is the content between the quotes
pub fn string(id: u32, text: &str, span: Range<usize>) -> Token {
    Token::new(TokenId(id), TokenKind::StringLiteral, text, span)
}

pub fn op(id: u32, op: Operator, offset: usize) -> Token {
    Token::new(
        TokenId(id),
        TokenKind::Operator(op),
        op.as_char().to_string(),
        offset..offset + 1,
    )
}

pub fn equals(id: u32, offset: usize) -> Token {
    op(id, Operator::Equals, offset)
}

pub fn terminator(id: u32, offset: usize) -> Token {
    op(id, Operator::Terminator, offset)
}
