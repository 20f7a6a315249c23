//! Integration tests for end-to-end parsing.
//!
//! These tests drive the public API the way the `monkey-parse` binary does:
//! source text goes through the lexer and parser, and the resulting program
//! and diagnostics are checked through their rendered forms.

use monkey::{
    ast::ast::{Expr, Stmt},
    lexer::{
        lexer::{tokenize, Lexer},
        tokens::TokenKind,
    },
    parser::parser::{parse, Parser, ParserOptions},
    render_error, Position,
};

#[test]
fn test_parse_simple_program() {
    let (program, errors) = parse("let x = 42;");

    assert!(errors.is_empty());
    assert_eq!(program.len(), 1);
    assert_eq!(program.to_string(), "let x = 42;");
}

#[test]
fn test_parse_full_program() {
    let source = r#"
let five = 5;
let ten = 10;

let add = fn(x, y) {
  x + y;
};

let result = add(five, ten);
-a * b;
5 < 10 > 5;

if (5 < 10) {
    return true;
} else {
    return false;
}

10 == 10;
10 != 9;
"foobar"
"foo bar";
[1, 2];
"#;
    let (program, errors) = parse(source);

    assert!(errors.is_empty(), "{:?}", errors);

    let rendered: Vec<String> = program.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec![
            "let five = 5;",
            "let ten = 10;",
            "let add = fn(x, y) { (x + y) };",
            "let result = add(five, ten);",
            "((-a) * b)",
            "((5 < 10) > 5)",
            "if (5 < 10) { return true; } else { return false; }",
            "(10 == 10)",
            "(10 != 9)",
            "\"foobar\"",
            "\"foo bar\"",
            "[1, 2]",
        ]
    );
}

#[test]
fn test_tokens_feed_parser_on_demand() {
    let source = "let add = fn(a, b) { a + b }; add(1, 2)[0]";
    let tokens = tokenize(source);

    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
    assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(), 1);

    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    assert!(parser.errors().is_empty());
    assert_eq!(
        program.to_string(),
        "let add = fn(a, b) { (a + b) };(add(1, 2)[0])"
    );
}

#[test]
fn test_collects_every_error() {
    let source = "let x 5;\nlet = 10;\nlet 838383;\nlet ok = 1;\n@";
    let (program, errors) = parse(source);

    let found: Vec<(String, Position)> = errors
        .iter()
        .map(|e| (e.to_string(), *e.get_position()))
        .collect();
    assert_eq!(
        found,
        vec![
            (
                "expected next token to be =, got INT instead".to_string(),
                Position { line: 1, column: 7 }
            ),
            (
                "expected next token to be IDENT, got = instead".to_string(),
                Position { line: 2, column: 5 }
            ),
            (
                "expected next token to be IDENT, got INT instead".to_string(),
                Position { line: 3, column: 5 }
            ),
            (
                "no prefix parse function for ILLEGAL found".to_string(),
                Position { line: 5, column: 1 }
            ),
        ]
    );
    assert_eq!(program.to_string(), "let ok = 1;");
}

#[test]
fn test_unterminated_string_is_reported() {
    let (program, errors) = parse("let s = \"abc");

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].to_string(),
        "no prefix parse function for ILLEGAL found"
    );
    assert!(program.is_empty());
}

#[test]
fn test_render_parse_error() {
    let source = "let a = 1;\nlet b 2;";
    let (_, errors) = parse(source);

    assert_eq!(errors.len(), 1);
    let rendered = render_error(&errors[0], source, "main.mk");
    assert_eq!(
        rendered,
        "Error: UnexpectedToken (Insert `=` here)\n\
         -> main.mk:2:7\n\
         \x20 |\n\
         2 | let b 2;\n\
         \x20 | ------^\n\
         expected next token to be =, got INT instead\n"
    );
}

#[test]
fn test_statement_kinds() {
    let (program, errors) = parse("let a = 1; return a; a;");

    assert!(errors.is_empty());
    assert!(matches!(program.statements[0], Stmt::Let(_)));
    assert!(matches!(program.statements[1], Stmt::Return(_)));
    assert!(matches!(
        &program.statements[2],
        Stmt::Expression(stmt) if matches!(stmt.expression, Expr::Identifier(_))
    ));
}

#[test]
fn test_custom_depth_limit() {
    let source = "let x = ((((1))));";

    let mut shallow = Parser::with_options(Lexer::new(source), ParserOptions { max_depth: 3 });
    let program = shallow.parse_program();
    assert_eq!(shallow.errors().len(), 1);
    assert!(program.is_empty());

    let (program, errors) = parse(source);
    assert!(errors.is_empty());
    assert_eq!(program.to_string(), "let x = 1;");
}

#[test]
fn test_repeated_parses_are_identical() {
    let source = "let f = fn(x) { if (x > 1) { x * f(x - 1) } else { 1 } }; f(5) @ let";

    let (first_program, first_errors) = parse(source);
    let (second_program, second_errors) = parse(source);

    assert_eq!(first_program, second_program);
    assert_eq!(first_errors, second_errors);
}
