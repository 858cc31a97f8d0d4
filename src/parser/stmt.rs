use log::trace;

use crate::{
    ast::{
        ast::Statement,
        expressions::Identifier,
        statements::{ExpressionStatement, LetStatement, ReturnStatement},
    },
    lexer::tokens::TokenKind,
    parser::{expr::parse_expression, lookups::Precedence},
};

use super::parser::Parser;

pub fn parse_statement(parser: &mut Parser) -> Option<Statement> {
    trace!("parsing statement starting at {}", parser.current_token());

    match parser.current_token_kind() {
        TokenKind::Let => parse_let_statement(parser),
        TokenKind::Return => parse_return_statement(parser),
        _ => parse_expression_statement(parser),
    }
}

fn parse_let_statement(parser: &mut Parser) -> Option<Statement> {
    let let_token = parser.current_token().clone();

    if !parser.expect_peek(TokenKind::Identifier) {
        skip_to_statement_boundary(parser);
        return None;
    }

    let name = Identifier {
        token: parser.current_token().clone(),
        value: parser.current_token().literal.clone(),
    };

    if !parser.expect_peek(TokenKind::Assign) {
        skip_to_statement_boundary(parser);
        return None;
    }

    parser.advance();

    let value = match parse_expression(parser, Precedence::Lowest) {
        Some(value) => value,
        None => {
            skip_to_statement_boundary(parser);
            return None;
        }
    };

    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Some(Statement::Let(LetStatement {
        token: let_token,
        name,
        value,
    }))
}

fn parse_return_statement(parser: &mut Parser) -> Option<Statement> {
    let return_token = parser.current_token().clone();

    parser.advance();

    let value = match parse_expression(parser, Precedence::Lowest) {
        Some(value) => value,
        None => {
            skip_to_statement_boundary(parser);
            return None;
        }
    };

    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Some(Statement::Return(ReturnStatement {
        token: return_token,
        value,
    }))
}

fn parse_expression_statement(parser: &mut Parser) -> Option<Statement> {
    let first_token = parser.current_token().clone();

    let expression = match parse_expression(parser, Precedence::Lowest) {
        Some(expression) => expression,
        None => {
            skip_to_statement_boundary(parser);
            return None;
        }
    };

    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Some(Statement::Expression(ExpressionStatement {
        token: first_token,
        expression,
    }))
}

// A failed statement leaves the window mid-statement. Drop tokens up to
// the next plausible statement boundary so one mistake cannot cascade.
fn skip_to_statement_boundary(parser: &mut Parser) {
    while !parser.current_is(TokenKind::Semicolon) && !parser.current_is(TokenKind::EndOfInput) {
        parser.advance();
    }
}
