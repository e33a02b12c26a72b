//! Scanner behavior on whole documents

use goo::goo::lexing::{tokenize, LexError, Scanner};
use goo::goo::testing::factories::{equals, op, string, symbol, terminator};
use goo::goo::token::{Operator, TokenKind};
use rstest::rstest;

#[test]
fn test_macro_and_element_tokens() {
    let tokens = tokenize("WIDTH = 23\nlabel .").expect("source to scan");
    assert_eq!(
        tokens,
        vec![
            symbol(0, "WIDTH", 0..5),
            equals(1, 6),
            symbol(2, "23", 8..10),
            symbol(3, "label", 11..16),
            terminator(4, 17),
        ]
    );
}

#[test]
fn test_string_literal_keeps_inner_text() {
    let tokens = tokenize("text = \"Click Me!\"").expect("source to scan");
    assert_eq!(tokens[2], string(2, "Click Me!", 7..18));
}

#[test]
fn test_event_specifier_is_a_symbol() {
    let tokens = tokenize("<Button-1> = callback").expect("source to scan");
    assert_eq!(tokens[0], symbol(0, "<Button-1>", 0..10));
    assert_eq!(tokens[2], symbol(2, "callback", 13..21));
}

#[test]
fn test_colon_is_reserved() {
    let tokens = tokenize("a:b").expect("source to scan");
    assert_eq!(
        tokens,
        vec![symbol(0, "a", 0..1), op(1, Operator::Colon, 1), symbol(2, "b", 2..3)]
    );
}

#[test]
fn test_demo_fixture_scans() {
    let tokens = tokenize(include_str!("fixtures/demo.goo")).expect("source to scan");
    let terminators = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Operator(Operator::Terminator))
        .count();
    assert_eq!(terminators, 3);
    let strings: Vec<&str> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::StringLiteral)
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(
        strings,
        vec!["Click Me!", "I do nothing", "A Simple Demo Widget"]
    );
}

#[test]
fn test_spans_slice_back_to_source() {
    let source = include_str!("fixtures/nested.goo");
    for token in tokenize(source).expect("source to scan") {
        let slice = &source[token.span.clone()];
        match token.kind {
            TokenKind::StringLiteral => assert_eq!(slice, format!("\"{}\"", token.text)),
            _ => assert_eq!(slice, token.text),
        }
    }
}

#[rstest]
#[case("label\n  text = \"open\n.", 15)]
#[case("\"", 0)]
#[case("x = \"a\\\"", 4)]
fn test_unterminated_string(#[case] source: &str, #[case] offset: usize) {
    let err = tokenize(source).unwrap_err();
    assert_eq!(
        err,
        LexError {
            offset,
            found: '"'
        }
    );
    assert_eq!(
        err.to_string(),
        format!("unterminated string literal at byte {}", offset)
    );
}

#[test]
fn test_scanner_stops_after_error() {
    let mut scanner = Scanner::new("a \"b\nc d");
    assert!(matches!(scanner.next(), Some(Ok(_))));
    assert!(matches!(scanner.next(), Some(Err(_))));
    assert!(scanner.next().is_none());
    assert!(scanner.next().is_none());
}

#[rstest]
#[case("")]
#[case("   \n\t  ")]
fn test_blank_source_has_no_tokens(#[case] source: &str) {
    assert_eq!(tokenize(source), Ok(vec![]));
}
