//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and its token-stream
//! plumbing. The parser uses a Pratt parser approach with prefix/infix
//! handlers for expression parsing and specialized functions for
//! statement parsing.
//!
//! It maintains lookup tables for:
//! - Prefix handlers for tokens that may begin an expression
//! - Infix handlers for binary operators
//! - Binding precedences for operator tokens

use std::collections::HashMap;

use log::{debug, trace};

use crate::{
    ast::ast::Program,
    errors::errors::ParseError,
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{
        create_token_lookups, InfixHandler, InfixLookup, Precedence, PrecedenceLookup,
        PrefixHandler, PrefixLookup,
    },
    stmt::parse_statement,
};

/// The main parser structure that maintains parsing state.
///
/// The parser owns the lexer and pulls tokens on demand, keeping a
/// two-token window over the stream. Errors never abort the parse;
/// they accumulate while the parser resynchronizes and carries on.
pub struct Parser {
    /// Source of tokens, drained on demand
    lexer: Lexer,
    /// The token under examination
    current: Token,
    /// The token after `current`
    peek: Token,
    /// Everything that went wrong so far, in source order
    errors: Vec<ParseError>,
    /// Lookup table for prefix (expression-start) handlers
    prefix_lookup: PrefixLookup,
    /// Lookup table for infix (binary operator) handlers
    infix_lookup: InfixLookup,
    /// Lookup table for operator binding precedences
    precedence_lookup: PrecedenceLookup,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// # Arguments
    ///
    /// * `lexer` - The lexer to pull tokens from
    ///
    /// # Returns
    ///
    /// A new Parser instance with all handler tables registered and
    /// both slots of the token window primed.
    pub fn new(lexer: Lexer) -> Self {
        let mut parser = Parser {
            lexer,
            current: Token::new(TokenKind::EndOfInput, ""),
            peek: Token::new(TokenKind::EndOfInput, ""),
            errors: vec![],
            prefix_lookup: HashMap::new(),
            infix_lookup: HashMap::new(),
            precedence_lookup: HashMap::new(),
        };

        create_token_lookups(&mut parser);

        parser.advance();
        parser.advance();

        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the kind of the token after the current one.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    /// Checks whether the current token has the given kind.
    pub fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Checks whether the token after the current one has the given kind.
    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Slides the token window forward by one token.
    pub fn advance(&mut self) {
        self.current = std::mem::replace(&mut self.peek, self.lexer.next_token());
        trace!("current token is now {}", self.current);
    }

    /// Advances past the peek token if it has the expected kind.
    ///
    /// # Arguments
    ///
    /// * `expected` - The TokenKind the peek token must have
    ///
    /// # Returns
    ///
    /// Returns true and advances if the peek token matches, otherwise
    /// records an error and leaves the window untouched.
    pub fn expect_peek(&mut self, expected: TokenKind) -> bool {
        if self.peek_is(expected) {
            self.advance();
            true
        } else {
            self.record_error(ParseError::UnexpectedToken {
                expected,
                found: self.peek.kind,
            });
            false
        }
    }

    /// Records a parse error without aborting the parse.
    pub fn record_error(&mut self, error: ParseError) {
        debug!("recorded parse error: {}", error);
        self.errors.push(error);
    }

    /// Returns every error recorded so far, in source order.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Returns the prefix handler registered for a token kind.
    pub fn prefix_handler(&self, kind: TokenKind) -> Option<PrefixHandler> {
        self.prefix_lookup.get(&kind).copied()
    }

    /// Returns the infix handler registered for a token kind.
    pub fn infix_handler(&self, kind: TokenKind) -> Option<InfixHandler> {
        self.infix_lookup.get(&kind).copied()
    }

    /// Returns the binding precedence of the current token.
    pub fn current_precedence(&self) -> Precedence {
        self.precedence_of(self.current.kind)
    }

    /// Returns the binding precedence of the token after the current one.
    pub fn peek_precedence(&self) -> Precedence {
        self.precedence_of(self.peek.kind)
    }

    fn precedence_of(&self, kind: TokenKind) -> Precedence {
        self.precedence_lookup
            .get(&kind)
            .copied()
            .unwrap_or(Precedence::Lowest)
    }

    /// Registers an infix handler and its binding precedence for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `precedence` - The binding precedence for this operator
    /// * `handler` - The handler function for this infix operator
    pub fn infix(&mut self, kind: TokenKind, precedence: Precedence, handler: InfixHandler) {
        self.precedence_lookup.insert(kind, precedence);
        self.infix_lookup.insert(kind, handler);
    }

    /// Registers a prefix handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `handler` - The handler function for this expression start
    pub fn prefix(&mut self, kind: TokenKind, handler: PrefixHandler) {
        self.prefix_lookup.insert(kind, handler);
    }

    /// Parses statements until the end of input.
    ///
    /// Parsing never bails out early. A statement that fails to parse
    /// records its errors, the parser resynchronizes at the next
    /// statement boundary, and the loop picks up from there.
    pub fn parse_program(&mut self) -> Program {
        debug!("parsing program");

        let mut program = Program { statements: vec![] };

        while !self.current_is(TokenKind::EndOfInput) {
            if let Some(statement) = parse_statement(self) {
                program.statements.push(statement);
            }
            self.advance();
        }

        debug!(
            "parsed {} statements with {} errors",
            program.statements.len(),
            self.errors.len()
        );

        program
    }
}

/// Parses a source's token stream into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing. It creates a parser
/// instance and drives it over every statement until the end of input.
///
/// # Arguments
///
/// * `lexer` - The lexer over the source to parse
///
/// # Returns
///
/// A tuple containing:
/// - The parsed Program, holding every statement that parsed cleanly
/// - The parse errors hit along the way, empty for well-formed input
pub fn parse(lexer: Lexer) -> (Program, Vec<ParseError>) {
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();

    (program, parser.errors)
}
