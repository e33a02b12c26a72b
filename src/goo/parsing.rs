//! Parser
//!
//!     Consumes the token stream and builds a [Document]. The grammar is small:
//!
//!     ```text
//!     document    := macroList elementList | elementList
//!     macroList   := macroList macro | macro
//!     macro       := Symbol Equals (Symbol | StringLiteral)
//!     elementList := elementList element | element
//!     element     := Symbol Terminator
//!                  | Symbol macroList Terminator
//!                  | Symbol elementList Terminator
//!                  | Symbol macroList elementList Terminator
//!     ```
//!
//! Disambiguation
//!
//!     After a leading symbol, one token of lookahead decides: `=` means an assignment, anything
//!     else means the symbol opened a nested element. Within one element all assignments come
//!     before the first child, and at file level all macros come before the first element. The
//!     parser is plain recursive descent; it never backtracks.
//!
//! Failure
//!
//!     Elements nest at most [MAX_NESTING] deep; a child opened past that is a [ParseError].
//!     The first problem aborts the whole parse. Scanning is lazy, so a [LexError] surfaces
//!     through the parser at the point the bad input is reached. No partial document is
//!     returned.

mod parser;

use crate::goo::ast::{AstError, Document, MAX_NESTING};
use crate::goo::lexing::LexError;
use crate::goo::token::Token;
use std::fmt;

pub use parser::Parser;

/// The production the parser was in when it failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    /// A symbol opening a top-level element
    Element,
    /// An assignment, a nested element or the terminator
    Member,
    /// A nested element or the terminator; assignments are over
    ChildOrTerminator,
    /// A symbol or string literal after `=`
    Value,
    /// The `.` closing the named element
    Terminator(String),
    /// The `.` closing the named element, before a child would exceed [MAX_NESTING]
    ShallowerNesting(String),
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Element => write!(f, "an element"),
            Expected::Member => write!(f, "an assignment, a nested element or '.'"),
            Expected::ChildOrTerminator => write!(
                f,
                "a nested element or '.' (assignments must come before nested elements)"
            ),
            Expected::Value => write!(f, "a symbol or string value"),
            Expected::Terminator(name) => write!(f, "'.' to close `{}`", name),
            Expected::ShallowerNesting(name) => write!(
                f,
                "'.' to close `{}` (elements nest at most {} deep)",
                name, MAX_NESTING
            ),
        }
    }
}

/// The token sequence does not match the grammar. `found` is `None` at end of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub expected: Expected,
    pub found: Option<Token>,
}

impl ParseError {
    pub fn new(expected: Expected, found: Option<Token>) -> Self {
        Self { expected, found }
    }

    pub fn at_end(&self) -> bool {
        self.found.is_none()
    }

    /// Byte offset of the offending token, if any
    pub fn offset(&self) -> Option<usize> {
        self.found.as_ref().map(|t| t.span.start)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.found {
            Some(token) => write!(f, "expected {}, found {}", self.expected, token),
            None => write!(f, "expected {}, found end of input", self.expected),
        }
    }
}

impl std::error::Error for ParseError {}

/// Anything that stops source text from becoming a [Document]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    Lex(LexError),
    Parse(ParseError),
    /// The parser built a node graph that is not a tree. Parser-built documents never do.
    Tree(AstError),
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxError::Lex(e) => write!(f, "Lex error: {}", e),
            SyntaxError::Parse(e) => write!(f, "Parse error: {}", e),
            SyntaxError::Tree(e) => write!(f, "Tree error: {}", e),
        }
    }
}

impl std::error::Error for SyntaxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SyntaxError::Lex(e) => Some(e),
            SyntaxError::Parse(e) => Some(e),
            SyntaxError::Tree(e) => Some(e),
        }
    }
}

impl From<LexError> for SyntaxError {
    fn from(e: LexError) -> Self {
        SyntaxError::Lex(e)
    }
}

impl From<ParseError> for SyntaxError {
    fn from(e: ParseError) -> Self {
        SyntaxError::Parse(e)
    }
}

impl From<AstError> for SyntaxError {
    fn from(e: AstError) -> Self {
        SyntaxError::Tree(e)
    }
}

/// Scan and parse a source string.
pub fn parse(source: &str) -> Result<Document, SyntaxError> {
    Parser::new(source).parse()
}
