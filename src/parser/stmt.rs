use log::debug;

use crate::{
    ast::ast::{LetBinding, Program},
    errors::errors::Error,
    lexer::{stream::TokenStream, tokens::TokenKind},
    parser::expr::parse_expr,
};

use super::parser::Parser;

/// program → (NEWLINE letBinding)*
///
/// Stops at the first lookahead that does not open a new line, end of input
/// included.
pub fn parse_program<S: TokenStream>(parser: &mut Parser<S>) -> Result<Program, Error> {
    let mut bindings = vec![];

    while parser.found(TokenKind::Newline).is_some() {
        bindings.push(parse_let_binding(parser)?);
    }

    Ok(Program::new(bindings))
}

/// letBinding → 'let' NAME NAME* '=' expression
pub fn parse_let_binding<S: TokenStream>(parser: &mut Parser<S>) -> Result<LetBinding, Error> {
    parser.expect_value(TokenKind::Keyword, "let")?;
    let name = parser.expect(TokenKind::Name)?.value;
    debug!("Entering let binding `{}`", name);

    let mut args = vec![];
    while let Some(arg) = parser.found(TokenKind::Name) {
        args.push(arg.value);
    }

    parser.expect_value(TokenKind::Symbol, "=")?;
    let body = parse_expr(parser)?;

    Ok(LetBinding { name, args, body })
}
