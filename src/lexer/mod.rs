//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Byte-by-byte scanning with a single byte of lookahead
//! - Recognition of keywords, identifiers, integer literals, and operators
//! - Whitespace skipping between tokens

pub mod lexer;
pub mod tokens;
