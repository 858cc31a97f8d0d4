use std::collections::HashMap;

use crate::{ast::ast::Expression, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser};

#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum Precedence {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
}

pub type PrefixHandler = fn(&mut Parser) -> Option<Expression>;
pub type InfixHandler = fn(&mut Parser, Expression) -> Option<Expression>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Equality and relational
    parser.infix(TokenKind::Equal, Precedence::Equals, parse_infix_expression);
    parser.infix(TokenKind::NotEqual, Precedence::Equals, parse_infix_expression);
    parser.infix(
        TokenKind::LessThan,
        Precedence::LessGreater,
        parse_infix_expression,
    );
    parser.infix(
        TokenKind::GreaterThan,
        Precedence::LessGreater,
        parse_infix_expression,
    );

    // Additive and multiplicative
    parser.infix(TokenKind::Plus, Precedence::Sum, parse_infix_expression);
    parser.infix(TokenKind::Minus, Precedence::Sum, parse_infix_expression);
    parser.infix(
        TokenKind::Asterisk,
        Precedence::Product,
        parse_infix_expression,
    );
    parser.infix(TokenKind::Slash, Precedence::Product, parse_infix_expression);

    // Literals and symbols
    parser.prefix(TokenKind::Identifier, parse_identifier);
    parser.prefix(TokenKind::Integer, parse_integer_literal);

    // Prefix operators and grouping
    parser.prefix(TokenKind::Bang, parse_prefix_expression);
    parser.prefix(TokenKind::Minus, parse_prefix_expression);
    parser.prefix(TokenKind::LParen, parse_grouped_expression);
}

// Lookup tables inside the parser struct, keyed by token kind
pub type PrefixLookup = HashMap<TokenKind, PrefixHandler>;
pub type InfixLookup = HashMap<TokenKind, InfixHandler>;
pub type PrecedenceLookup = HashMap<TokenKind, Precedence>;
