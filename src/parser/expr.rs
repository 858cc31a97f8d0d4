use log::trace;

use crate::{
    ast::{
        ast::Expression,
        expressions::{Identifier, InfixExpression, IntegerLiteral, PrefixExpression},
    },
    errors::errors::ParseError,
    lexer::tokens::TokenKind,
};

use super::{lookups::Precedence, parser::Parser};

pub fn parse_expression(parser: &mut Parser, precedence: Precedence) -> Option<Expression> {
    trace!(
        "parsing expression at {} binding {:?}",
        parser.current_token(),
        precedence
    );

    let token_kind = parser.current_token_kind();
    let prefix = match parser.prefix_handler(token_kind) {
        Some(handler) => handler,
        None => {
            parser.record_error(ParseError::NoPrefixParseFn { kind: token_kind });
            return None;
        }
    };

    let mut left = prefix(parser)?;

    // Keep folding operators in while the next one binds tighter than
    // the level that called us. Equal precedence stays to the left.
    while !parser.peek_is(TokenKind::Semicolon) && precedence < parser.peek_precedence() {
        let infix = match parser.infix_handler(parser.peek_token_kind()) {
            Some(handler) => handler,
            None => return Some(left),
        };

        parser.advance();

        left = infix(parser, left)?;
    }

    Some(left)
}

pub fn parse_identifier(parser: &mut Parser) -> Option<Expression> {
    let token = parser.current_token().clone();
    let value = token.literal.clone();

    Some(Expression::Identifier(Identifier { token, value }))
}

pub fn parse_integer_literal(parser: &mut Parser) -> Option<Expression> {
    let token = parser.current_token().clone();

    match token.literal.parse() {
        Ok(value) => Some(Expression::IntegerLiteral(IntegerLiteral { token, value })),
        Err(source) => {
            parser.record_error(ParseError::InvalidIntegerLiteral {
                literal: token.literal,
                source,
            });
            None
        }
    }
}

pub fn parse_prefix_expression(parser: &mut Parser) -> Option<Expression> {
    let token = parser.current_token().clone();
    let operator = token.literal.clone();

    parser.advance();

    let right = parse_expression(parser, Precedence::Prefix)?;

    Some(Expression::Prefix(PrefixExpression {
        token,
        operator,
        right: Box::new(right),
    }))
}

pub fn parse_infix_expression(parser: &mut Parser, left: Expression) -> Option<Expression> {
    let token = parser.current_token().clone();
    let operator = token.literal.clone();
    let precedence = parser.current_precedence();

    parser.advance();

    let right = parse_expression(parser, precedence)?;

    Some(Expression::Infix(InfixExpression {
        token,
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}

pub fn parse_grouped_expression(parser: &mut Parser) -> Option<Expression> {
    parser.advance();

    let expression = parse_expression(parser, Precedence::Lowest)?;

    if !parser.expect_peek(TokenKind::RParen) {
        return None;
    }

    Some(expression)
}
