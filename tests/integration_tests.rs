//! Integration tests for the end-to-end pipeline.
//!
//! These tests go from source text through tokenization and parsing, and
//! back to source text through the structural printer.

use std::path::PathBuf;

use letlang::{
    ast::{
        ast::{LetBinding, Program},
        expressions::Expr,
    },
    format_error,
    lexer::{
        lexer::tokenize,
        stream::TokenBuffer,
        tokens::{Token, TokenKind},
    },
    parse_source,
    parser::parser::parse,
    Position, Span, MK_TOKEN,
};

/// Small linear congruential generator so the generated programs are the
/// same on every run.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn below(&mut self, bound: u64) -> u64 {
        self.next() % bound
    }
}

/// A token on the first line, starting at `col`.
fn token(kind: TokenKind, value: &str, col: usize) -> Token {
    let start = Position::new(1, col);
    let end = Position::new(1, col + value.chars().count());
    MK_TOKEN!(kind, value.to_string(), Span { start, end })
}

const NAMES: [&str; 6] = ["x", "y", "acc", "n_1", "_tmp", "lettuce"];

fn gen_expr(rng: &mut Lcg, depth: usize) -> Expr {
    let choice = if depth == 0 { rng.below(3) } else { rng.below(5) };

    match choice {
        0 => Expr::name(NAMES[rng.below(NAMES.len() as u64) as usize]),
        1 => Expr::Bool(rng.below(2) == 0),
        2 => Expr::Num(rng.next() as i64),
        _ => Expr::new_if(
            gen_expr(rng, depth - 1),
            gen_expr(rng, depth - 1),
            gen_expr(rng, depth - 1),
        ),
    }
}

fn gen_program(rng: &mut Lcg) -> Program {
    let count = rng.below(6) as usize;

    let bindings = (0..count)
        .map(|_| {
            let args = (0..rng.below(4))
                .map(|_| NAMES[rng.below(NAMES.len() as u64) as usize])
                .collect();
            LetBinding::new(
                NAMES[rng.below(NAMES.len() as u64) as usize],
                args,
                gen_expr(rng, 4),
            )
        })
        .collect();

    Program::new(bindings)
}

#[test]
fn test_scenarios() {
    assert_eq!(
        parse_source("let x = 5").unwrap(),
        Program::new(vec![LetBinding::new("x", vec![], Expr::Num(5))])
    );
    assert_eq!(
        parse_source("let b = true").unwrap(),
        Program::new(vec![LetBinding::new("b", vec![], Expr::Bool(true))])
    );
    assert_eq!(
        parse_source("let y = if true then 45 else x").unwrap(),
        Program::new(vec![LetBinding::new(
            "y",
            vec![],
            Expr::new_if(Expr::Bool(true), Expr::Num(45), Expr::name("x"))
        )])
    );
    assert_eq!(
        parse_source("let f x y = x").unwrap(),
        Program::new(vec![LetBinding::new("f", vec!["x", "y"], Expr::name("x"))])
    );

    let error = parse_source("let = true").unwrap_err();
    assert!(error.get_message().contains("NAME"));
    assert_eq!((error.get_position().row, error.get_position().col), (1, 5));
}

#[test]
fn test_generated_programs_round_trip() {
    let mut rng = Lcg(0x5eed);

    for _ in 0..200 {
        let program = gen_program(&mut rng);
        let printed = program.to_string();

        let reparsed = parse_source(&printed).unwrap();
        assert_eq!(reparsed, program, "source:\n{}", printed);
        assert_eq!(reparsed.to_string(), printed);
    }
}

#[test]
fn test_parsed_programs_round_trip() {
    let source = "\
// a small library
let id x = x

let const a b = a
let pick c = if c then 1 else 0
    let nested = if if p then q else r then if s then 2 else 3 else false
";

    let program = parse_source(source).unwrap();
    assert_eq!(program.len(), 4);

    let printed = program.to_string();
    assert_eq!(parse_source(&printed).unwrap(), program);
}

#[test]
fn test_binding_count_matches_line_count() {
    for n in 0..30 {
        let source: String = (0..n).map(|i| format!("let v{} = {}\n", i, i)).collect();
        let program = parse_source(&source).unwrap();

        assert_eq!(program.len(), n);
        for (i, binding) in program.iter().enumerate() {
            assert_eq!(binding.name, format!("v{}", i));
            assert_eq!(binding.body, Expr::Num(i as i64));
        }
    }
}

#[test]
fn test_if_chain_depth_matches_nesting() {
    for depth in 1..25 {
        // Nest in the condition position: if if if a then .. else .. then ..
        let source = format!(
            "let deep = {}a{}",
            "if ".repeat(depth),
            " then 1 else 2".repeat(depth)
        );

        let program = parse_source(&source).unwrap();
        let mut expr = &program.bindings[0].body;
        let mut seen = 0;

        while let Expr::If { cond, .. } = expr {
            seen += 1;
            expr = cond.as_ref();
        }

        assert_eq!(seen, depth);
        assert_eq!(program.bindings[0].body.if_depth(), depth);
    }
}

#[test]
fn test_parse_through_token_buffer() {
    let source = "let answer = 42";
    let tokens = tokenize(source).unwrap();
    let program = parse(TokenBuffer::new(tokens, source)).unwrap();

    assert_eq!(program.bindings[0].body, Expr::Num(42));
}

#[test]
fn test_missing_body_points_past_equals() {
    let error = parse_source("let x =").unwrap_err();
    let formatted = format_error(&error, &PathBuf::from("x.let"));

    assert_eq!(
        formatted,
        "Error: UnrecognisedExpression (expected `if`, a name, a number, `true` or `false`)\n\
         -> x.let\n\
         let x =\n       ^\n\
         unrecognised expression, found EOF (@1:8)"
    );
}

#[test]
fn test_error_on_later_line_shows_that_line() {
    let source = "let a = 1\nlet b = if a then 2\nlet c = 3";
    let error = parse_source(source).unwrap_err();

    assert_eq!(
        error.render(),
        "let c = 3\n^\nexpected KEYWORD `else`, found NEWLINE (@3:1)"
    );
}

#[test]
fn test_lex_error_is_reported_like_parse_error() {
    let error = parse_source("let ok = 1\nlet bad = 1 # 2").unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(
        error.render(),
        "let bad = 1 # 2\n            ^\nunrecognised token: \"#\" (@2:13)"
    );
}

#[test]
fn test_internal_error_is_distinguished() {
    let tokens = vec![
        token(TokenKind::Newline, "\n", 1),
        token(TokenKind::Keyword, "let", 1),
        token(TokenKind::Name, "n", 5),
        token(TokenKind::Symbol, "=", 7),
        token(TokenKind::Number, "123456789012345678901234567890", 9),
    ];

    let error = parse(TokenBuffer::new(tokens, "let n = 123456789012345678901234567890")).unwrap_err();
    let formatted = format_error(&error, &PathBuf::from("n.let"));

    assert!(error.is_internal());
    assert!(formatted.starts_with("Error: NumberParseError"));
    assert_eq!(error.get_position(), Position::new(1, 9));
}

#[test]
fn test_large_literal_is_a_user_error() {
    let error = parse_source("let n = 123456789012345678901234567890").unwrap_err();
    let formatted = format_error(&error, &PathBuf::from("n.let"));

    assert!(!error.is_internal());
    assert_eq!(error.get_error_name(), "NumberOutOfRange");
    assert_eq!(
        formatted,
        "Error: NumberOutOfRange (the largest integer literal is 9223372036854775807)\n\
         -> n.let\n\
         let n = 123456789012345678901234567890\n        ^\n\
         number literal 123456789012345678901234567890 does not fit in a 64-bit integer (@1:9)"
    );
}

#[test]
fn test_tab_indented_error_keeps_caret_aligned() {
    let error = parse_source("let a = 1\n\tlet = true").unwrap_err();

    assert_eq!(error.get_position().col, 6);
    assert_eq!(
        error.render(),
        "\tlet = true\n\t    ^\nexpected NAME, found SYM `=` (@2:6)"
    );
}

#[test]
fn test_operators_are_not_part_of_the_language() {
    let error = parse_source("let x = (1)").unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().col, 9);
}
