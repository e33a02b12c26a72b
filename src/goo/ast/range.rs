//! Line and column positions
//!
//! Tokens only carry byte offsets. Diagnostics want `line:column`, so a [LineIndex] built once
//! per source answers offset lookups by binary search over line starts. Lines and columns are
//! zero-based and columns count bytes, matching token spans.

use serde::Serialize;
use std::fmt;
use std::ops::Range as ByteRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A byte span with the positions of both ends. `end` is the position just past the last byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Range {
    pub span: ByteRange<usize>,
    pub start: Position,
    pub end: Position,
}

impl Range {
    /// Inclusive at both ends, so a cursor sitting right after the node still counts
    pub fn contains(&self, pos: Position) -> bool {
        (self.start..=self.end).contains(&pos)
    }

    pub fn is_single_line(&self) -> bool {
        self.start.line == self.end.line
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { line_starts }
    }

    pub fn position(&self, offset: usize) -> Position {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        Position::new(line, offset - self.line_starts[line])
    }

    pub fn range(&self, span: ByteRange<usize>) -> Range {
        Range {
            start: self.position(span.start),
            end: self.position(span.end),
            span,
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
