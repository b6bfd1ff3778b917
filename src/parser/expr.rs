use log::{debug, trace};

use crate::{
    ast::expressions::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::{stream::TokenStream, tokens::TokenKind},
};

use super::parser::Parser;

/// expression → 'if' expression 'then' expression 'else' expression
///            | NAME | 'true' | 'false' | NUM
///
/// One token of lookahead picks the alternative.
pub fn parse_expr<S: TokenStream>(parser: &mut Parser<S>) -> Result<Expr, Error> {
    if parser.found_value(TokenKind::Keyword, "if").is_some() {
        return parse_if_expr(parser);
    }

    if let Some(token) = parser.found(TokenKind::Name) {
        trace!("name `{}`", token.value);
        return Ok(Expr::Name(token.value));
    }

    if let Some(token) = parser.found(TokenKind::Number) {
        return match token.value.parse::<i64>() {
            Ok(value) => Ok(Expr::Num(value)),
            Err(_) => Err(parser.error_at(
                ErrorImpl::NumberParseError {
                    token: token.value.clone(),
                },
                &token,
            )),
        };
    }

    if let Some(token) = parser.found(TokenKind::Boolean) {
        return match token.value.as_str() {
            "true" => Ok(Expr::Bool(true)),
            "false" => Ok(Expr::Bool(false)),
            _ => Err(parser.error_at(
                ErrorImpl::BooleanParseError {
                    token: token.value.clone(),
                },
                &token,
            )),
        };
    }

    Err(parser.error_at_current(ErrorImpl::UnrecognisedExpression {
        found: parser.current_token().describe(),
    }))
}

/// Parses the rest of an `if` expression, the `if` keyword already consumed.
pub fn parse_if_expr<S: TokenStream>(parser: &mut Parser<S>) -> Result<Expr, Error> {
    debug!("Entering if expression");

    let cond = parse_expr(parser)?;
    parser.expect_value(TokenKind::Keyword, "then")?;
    let then_branch = parse_expr(parser)?;
    parser.expect_value(TokenKind::Keyword, "else")?;
    let else_branch = parse_expr(parser)?;

    Ok(Expr::new_if(cond, then_branch, else_branch))
}
