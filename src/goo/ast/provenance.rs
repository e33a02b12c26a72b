//! Token provenance
//!
//!     Every AST node remembers which tokens were consumed to derive it, including the tokens of
//!     all its descendants. The set is stored unordered and is only sorted when someone asks for
//!     a span; the parser never tracks a running min/max.
//!
//!     A node's source text is `source[first.begin..last.end]` over its tokens sorted by start
//!     offset. That substring covers every contributing token and, since the parser consumes
//!     tokens contiguously, no token outside the set.

use crate::goo::token::{Token, TokenId};
use std::ops::Range;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Provenance {
    tokens: Vec<TokenId>,
}

impl Provenance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, token: &Token) {
        self.tokens.push(token.id);
    }

    /// Union with the provenance of a sub-node.
    pub fn extend(&mut self, other: &Provenance) {
        self.tokens.extend_from_slice(&other.tokens);
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn contains(&self, id: TokenId) -> bool {
        self.tokens.contains(&id)
    }

    pub fn ids(&self) -> impl Iterator<Item = TokenId> + '_ {
        self.tokens.iter().copied()
    }

    /// Resolve against the token table and sort by span start.
    pub fn sorted<'t>(&self, table: &'t [Token]) -> Vec<&'t Token> {
        let mut tokens: Vec<&Token> = self
            .tokens
            .iter()
            .filter_map(|id| table.get(id.index()))
            .collect();
        tokens.sort_by_key(|t| t.span.start);
        tokens
    }

    /// The minimal byte range covering every contributing token.
    pub fn span(&self, table: &[Token]) -> Option<Range<usize>> {
        let sorted = self.sorted(table);
        let first = sorted.first()?;
        let end = sorted.iter().map(|t| t.span.end).max()?;
        Some(first.span.start..end)
    }
}
