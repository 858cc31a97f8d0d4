use thiserror::Error;

use crate::lexer::tokens::TokenKind;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },
    #[error("no prefix parse function for token kind {kind}")]
    NoPrefixParseFn { kind: TokenKind },
    #[error("error parsing integer literal {literal:?}: {source}")]
    InvalidIntegerLiteral {
        literal: String,
        source: std::num::ParseIntError,
    },
}
