//! Unit tests for error handling.
//!
//! This module checks the rendered message of each error variant,
//! since those messages are what the REPL shows verbatim.

use crate::errors::errors::ParseError;
use crate::lexer::tokens::TokenKind;

#[test]
fn test_unexpected_token_message() {
    let error = ParseError::UnexpectedToken {
        expected: TokenKind::Identifier,
        found: TokenKind::Assign,
    };

    assert_eq!(
        error.to_string(),
        "expected next token to be Identifier, got Assign instead"
    );
}

#[test]
fn test_no_prefix_parse_fn_message() {
    let error = ParseError::NoPrefixParseFn {
        kind: TokenKind::Semicolon,
    };

    assert_eq!(
        error.to_string(),
        "no prefix parse function for token kind Semicolon"
    );
}

#[test]
fn test_invalid_integer_literal_message() {
    let literal = "92233720368547758078";
    let source = literal.parse::<i64>().unwrap_err();
    let error = ParseError::InvalidIntegerLiteral {
        literal: literal.to_string(),
        source,
    };

    let message = error.to_string();
    assert!(message.starts_with("error parsing integer literal \"92233720368547758078\":"));
}
