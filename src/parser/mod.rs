//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It uses a Pratt parser for expressions
//! with proper operator precedence and handles:
//!
//! - Statement parsing (let, return, expression statements)
//! - Expression parsing (prefix and infix operators, literals)
//! - Error recovery and reporting
//!
//! The parser uses prefix and infix handler functions for expression
//! parsing with binding precedences over the operator tokens.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
