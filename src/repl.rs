//! The interactive shell.
//!
//! Reads one line at a time, runs the front end over it, and writes the
//! outcome back. The shell is generic over its reader and writer so it
//! can run against in-memory buffers as easily as stdin/stdout.

use std::io::{self, BufRead, Write};

use crate::{
    lexer::{lexer::Lexer, tokens::TokenKind},
    parser::parser::parse,
};

const PROMPT: &str = "> ";

/// Parses each line and prints the outcome.
///
/// A clean line prints back the rendering of its parsed program. A
/// broken line prints every recorded error instead. Either way the
/// next prompt follows, until the input runs out.
pub fn start(input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    let mut lines = input.lines();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(()),
        };

        let (program, errors) = parse(Lexer::new(line));

        if errors.is_empty() {
            writeln!(output, "{}", program)?;
        } else {
            for error in &errors {
                writeln!(output, "{}", error)?;
            }
        }
    }
}

/// Tokenizes each line and prints every token it finds.
pub fn echo_tokens(input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    let mut lines = input.lines();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(()),
        };

        let mut lexer = Lexer::new(line);
        loop {
            let token = lexer.next_token();
            writeln!(output, "typ: {} # literal: {}", token.kind, token.literal)?;
            if token.kind == TokenKind::EndOfInput {
                break;
            }
        }
    }
}
