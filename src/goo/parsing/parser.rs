//! Recursive-descent parser with one token of lookahead

use super::{Expected, ParseError, SyntaxError};
use crate::goo::ast::{Ast, Document, NodeId, Provenance, MAX_NESTING};
use crate::goo::lexing::{LexError, Scanner};
use crate::goo::token::{Operator, Token};

/// Pulls tokens from the scanner on demand and records every consumed token, so the
/// finished document owns a complete token table indexed by token id.
struct TokenCursor<'src> {
    scanner: Scanner<'src>,
    peeked: Option<Token>,
    consumed: Vec<Token>,
}

impl<'src> TokenCursor<'src> {
    fn new(source: &'src str) -> Self {
        Self {
            scanner: Scanner::new(source),
            peeked: None,
            consumed: Vec::new(),
        }
    }

    fn peek(&mut self) -> Result<Option<&Token>, LexError> {
        if self.peeked.is_none() {
            self.peeked = self.scanner.next().transpose()?;
        }
        Ok(self.peeked.as_ref())
    }

    fn next(&mut self) -> Result<Option<Token>, LexError> {
        let token = match self.peeked.take() {
            Some(token) => Some(token),
            None => self.scanner.next().transpose()?,
        };
        if let Some(token) = &token {
            self.consumed.push(token.clone());
        }
        Ok(token)
    }

    fn next_is(&mut self, op: Operator) -> Result<bool, LexError> {
        Ok(self.peek()?.is_some_and(|t| t.is_operator(op)))
    }
}

pub struct Parser<'src> {
    cursor: TokenCursor<'src>,
    ast: Ast,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            cursor: TokenCursor::new(source),
            ast: Ast::new(),
        }
    }

    pub fn parse(mut self) -> Result<Document, SyntaxError> {
        let mut macros = Vec::new();
        let mut elements = Vec::new();

        while let Some(token) = self.cursor.next()? {
            if !token.is_symbol() {
                return Err(ParseError::new(Expected::Element, Some(token)).into());
            }
            if self.cursor.next_is(Operator::Equals)? {
                if !elements.is_empty() {
                    let equals = self.cursor.next()?;
                    return Err(ParseError::new(Expected::Element, equals).into());
                }
                let id = self.assignment(token)?;
                log::debug!("macro #{}", macros.len());
                macros.push(id);
            } else {
                elements.push(self.element(token, 1)?);
            }
        }

        if elements.is_empty() {
            return Err(ParseError::new(Expected::Element, None).into());
        }

        log::debug!(
            "parsed {} macros and {} top-level elements",
            macros.len(),
            elements.len()
        );
        Ok(Document {
            ast: self.ast,
            tokens: self.cursor.consumed,
            macros,
            elements,
        })
    }

    /// `key = value`, with `key` already consumed and `=` next.
    fn assignment(&mut self, key: Token) -> Result<NodeId, SyntaxError> {
        let mut provenance = Provenance::new();
        provenance.insert(&key);
        if let Some(equals) = self.cursor.next()? {
            provenance.insert(&equals);
        }

        let value = match self.cursor.next()? {
            Some(value) if value.is_value() => value,
            found => return Err(ParseError::new(Expected::Value, found).into()),
        };
        provenance.insert(&value);

        Ok(self.ast.alloc_assignment(key.text, value.text, provenance))
    }

    /// The rest of an element whose name symbol has been consumed. `depth` is 1 at top level.
    fn element(&mut self, name: Token, depth: usize) -> Result<NodeId, SyntaxError> {
        let mut provenance = Provenance::new();
        provenance.insert(&name);
        let mut attributes = Vec::new();
        let mut children = Vec::new();

        loop {
            let expected = if children.is_empty() {
                Expected::Member
            } else {
                Expected::ChildOrTerminator
            };
            let token = match self.cursor.next()? {
                Some(token) => token,
                None => {
                    return Err(ParseError::new(Expected::Terminator(name.text), None).into())
                }
            };

            if token.is_operator(Operator::Terminator) {
                provenance.insert(&token);
                break;
            }
            if !token.is_symbol() {
                return Err(ParseError::new(expected, Some(token)).into());
            }

            if self.cursor.next_is(Operator::Equals)? {
                if !children.is_empty() {
                    return Err(ParseError::new(expected, Some(token)).into());
                }
                let id = self.assignment(token)?;
                provenance.extend(self.ast[id].provenance());
                attributes.push(id);
            } else {
                if depth >= MAX_NESTING {
                    let expected = Expected::ShallowerNesting(name.text);
                    return Err(ParseError::new(expected, Some(token)).into());
                }
                let id = self.element(token, depth + 1)?;
                provenance.extend(self.ast[id].provenance());
                children.push(id);
            }
        }

        log::debug!(
            "element `{}`: {} attributes, {} children",
            name.text,
            attributes.len(),
            children.len()
        );
        Ok(self
            .ast
            .alloc_element(name.text, attributes, children, provenance)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goo::parsing::parse;
    use crate::goo::token::TokenKind;

    #[test]
    fn test_single_empty_element() {
        let doc = parse("label .").expect("document to parse");
        assert!(doc.macros.is_empty());
        assert_eq!(doc.elements.len(), 1);
        let label = doc.ast.element(doc.elements[0]).expect("element");
        assert_eq!(label.name, "label");
        assert!(label.attributes.is_empty());
        assert!(label.children.is_empty());
        assert_eq!(label.provenance.len(), 2);
    }

    #[test]
    fn test_macros_precede_elements() {
        let doc = parse("WIDTH = 23\nNAME = \"x y\"\nlabel\n  width = WIDTH\n.")
            .expect("document to parse");
        let macros: Vec<(&str, &str)> = doc
            .macro_assignments()
            .map(|a| (a.key.as_str(), a.value.as_str()))
            .collect();
        assert_eq!(macros, vec![("WIDTH", "23"), ("NAME", "x y")]);
        assert_eq!(doc.element_names(), vec!["label"]);
    }

    #[test]
    fn test_nested_elements_get_parent() {
        let doc = parse("frame\n  button\n    text = a\n  .\n.").expect("document to parse");
        let frame = doc.elements[0];
        let button = doc.ast.children(frame)[0];
        assert_eq!(doc.ast.parent(button), Some(frame));
        let attrs: Vec<&str> = doc.ast.attributes(button).map(|a| a.key.as_str()).collect();
        assert_eq!(attrs, vec!["text"]);
    }

    #[test]
    fn test_element_provenance_covers_descendants() {
        let source = "frame\n  x = 1\n  button .\n.";
        let doc = parse(source).expect("document to parse");
        let frame = doc.elements[0];
        // frame x = 1 button . .
        assert_eq!(doc.ast[frame].provenance().len(), 7);
        assert_eq!(doc.source_text(frame, source), Some(source));
        let button = doc.ast.children(frame)[0];
        assert_eq!(doc.source_text(button, source), Some("button ."));
    }

    #[test]
    fn test_token_table_is_complete() {
        let doc = parse("a = b\nc .").expect("document to parse");
        assert_eq!(doc.tokens.len(), 5);
        for (i, token) in doc.tokens.iter().enumerate() {
            assert_eq!(token.id.index(), i);
        }
    }

    #[test]
    fn test_missing_terminator() {
        let err = parse("button\n  text = a\n").unwrap_err();
        match err {
            SyntaxError::Parse(e) => {
                assert_eq!(e.expected, Expected::Terminator("button".to_string()));
                assert!(e.at_end());
            }
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_assignment_after_child() {
        let err = parse("frame\n  button\n  .\n  x = 1\n.").unwrap_err();
        match err {
            SyntaxError::Parse(e) => {
                assert_eq!(e.expected, Expected::ChildOrTerminator);
                assert_eq!(e.found.map(|t| t.text), Some("x".to_string()));
            }
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_macro_after_elements() {
        let err = parse("label .\nWIDTH = 3").unwrap_err();
        match err {
            SyntaxError::Parse(e) => {
                assert_eq!(e.expected, Expected::Element);
                assert_eq!(
                    e.found.map(|t| t.kind),
                    Some(TokenKind::Operator(Operator::Equals))
                );
            }
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    fn nested(depth: usize) -> String {
        "a ".repeat(depth) + &". ".repeat(depth)
    }

    #[test]
    fn test_nesting_up_to_limit() {
        let doc = parse(&nested(MAX_NESTING)).expect("document to parse");
        assert_eq!(doc.ast.len(), MAX_NESTING);
    }

    #[test]
    fn test_nesting_past_limit() {
        let err = parse(&nested(MAX_NESTING + 1)).unwrap_err();
        match err {
            SyntaxError::Parse(e) => {
                assert_eq!(e.expected, Expected::ShallowerNesting("a".to_string()));
                assert_eq!(e.offset(), Some(2 * MAX_NESTING));
            }
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_lex_error_propagates() {
        let err = parse("label\n  text = \"open\n.").unwrap_err();
        assert!(matches!(err, SyntaxError::Lex(LexError { offset: 15, .. })));
    }
}
