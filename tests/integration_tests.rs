//! Integration tests for the complete front end.
//!
//! These tests drive source text through tokenization and parsing the
//! way the shell does, and exercise the shell itself over in-memory
//! readers and writers.

use monkey::{lexer::lexer::Lexer, parser::parser::parse, repl};

#[test]
fn test_front_end_on_sample_program() {
    let source = "
let five = 5;
let ten = 10;
let result = five + ten * 2;
return result;
";
    let (program, errors) = parse(Lexer::new(source));

    assert!(errors.is_empty(), "unexpected parse errors: {:?}", errors);
    assert_eq!(program.statements.len(), 4);
    assert_eq!(
        program.to_string(),
        "let five = 5;let ten = 10;let result = (five + (ten * 2));return result;"
    );
}

#[test]
fn test_front_end_recovers_per_statement() {
    let source = "let one = 1; let = 2; let three = 3;";
    let (program, errors) = parse(Lexer::new(source));

    assert_eq!(errors.len(), 1);
    assert_eq!(program.statements.len(), 2);
    assert_eq!(program.to_string(), "let one = 1;let three = 3;");
}

#[test]
fn test_repl_parses_clean_lines() {
    let input = b"1 + 2 * 3;\n" as &[u8];
    let mut output = Vec::new();

    repl::start(input, &mut output).unwrap();

    let output = String::from_utf8(output).unwrap();
    assert_eq!(output, "> (1 + (2 * 3))\n> ");
}

#[test]
fn test_repl_reports_errors() {
    let input = b"let = 5;\n" as &[u8];
    let mut output = Vec::new();

    repl::start(input, &mut output).unwrap();

    let output = String::from_utf8(output).unwrap();
    assert_eq!(
        output,
        "> expected next token to be Identifier, got Assign instead\n> "
    );
}

#[test]
fn test_repl_keeps_going_after_errors() {
    let input = b"foo;\nlet = 1;\n\nbar\n" as &[u8];
    let mut output = Vec::new();

    repl::start(input, &mut output).unwrap();

    let output = String::from_utf8(output).unwrap();
    let expected = concat!(
        "> foo\n",
        "> expected next token to be Identifier, got Assign instead\n",
        "> \n",
        "> bar\n",
        "> ",
    );
    assert_eq!(output, expected);
}

#[test]
fn test_repl_echoes_tokens() {
    let input = b"let x = 5;\n" as &[u8];
    let mut output = Vec::new();

    repl::echo_tokens(input, &mut output).unwrap();

    let output = String::from_utf8(output).unwrap();
    let expected = concat!(
        "> typ: Let # literal: let\n",
        "typ: Identifier # literal: x\n",
        "typ: Assign # literal: =\n",
        "typ: Integer # literal: 5\n",
        "typ: Semicolon # literal: ;\n",
        "typ: EndOfInput # literal: \n",
        "> ",
    );
    assert_eq!(output, expected);
}
