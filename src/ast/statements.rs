use std::fmt::Display;

use crate::lexer::tokens::Token;

use super::{ast::Expression, expressions::Identifier};

/// Let Statement
/// Binds the value of an expression to a name: `let <name> = <value>;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetStatement {
    pub token: Token, // the `let` token
    pub name: Identifier,
    pub value: Expression,
}

impl LetStatement {
    pub fn token_literal(&self) -> String {
        self.token.literal.clone()
    }
}

impl Display for LetStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} = {};", self.token_literal(), self.name, self.value)
    }
}

/// Return Statement
/// Hands a value back to the caller: `return <value>;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnStatement {
    pub token: Token, // the `return` token
    pub value: Expression,
}

impl ReturnStatement {
    pub fn token_literal(&self) -> String {
        self.token.literal.clone()
    }
}

impl Display for ReturnStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {};", self.token_literal(), self.value)
    }
}

/// Expression Statement
/// A bare expression in statement position, as in `x + 10;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionStatement {
    pub token: Token, // first token of the expression
    pub expression: Expression,
}

impl ExpressionStatement {
    pub fn token_literal(&self) -> String {
        self.token.literal.clone()
    }
}

impl Display for ExpressionStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expression)
    }
}
