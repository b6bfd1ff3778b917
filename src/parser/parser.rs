//! Parser state and the match primitives every grammar rule is built from.
//!
//! The parser owns its token stream and nothing else. Rules consume tokens
//! through four moves:
//!
//! - `expect` for a terminal that must be present
//! - a call to another rule for a non-terminal
//! - `if let Some(..) = parser.found(..)` for a choice or an optional part
//! - `while let Some(..) = parser.found(..)` for repetition

use log::{debug, info};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl, Expected},
    lexer::{
        stream::TokenStream,
        tokens::{Token, TokenKind},
    },
};

use super::stmt::parse_program;

pub struct Parser<S: TokenStream> {
    stream: S,
}

impl<S: TokenStream> Parser<S> {
    pub fn new(stream: S) -> Self {
        Parser { stream }
    }

    /// Returns the lookahead token without consuming it.
    pub fn current_token(&self) -> &Token {
        self.stream.peek(1)
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Consumes and returns the lookahead token if it is of `kind`.
    /// Leaves the stream untouched otherwise.
    pub fn found(&mut self, kind: TokenKind) -> Option<Token> {
        if self.stream.peek(1).kind == kind {
            Some(self.stream.pop())
        } else {
            None
        }
    }

    /// Like [`Parser::found`], but the token's text must also equal `value`.
    pub fn found_value(&mut self, kind: TokenKind, value: &str) -> Option<Token> {
        if self.stream.peek(1).is(kind, value) {
            Some(self.stream.pop())
        } else {
            None
        }
    }

    /// Consumes a token of `kind` or fails at the lookahead token.
    pub fn expect(&mut self, kind: TokenKind) -> Result<Token, Error> {
        match self.found(kind) {
            Some(token) => Ok(token),
            None => Err(self.unexpected(Expected::kind(kind))),
        }
    }

    /// Consumes a token of `kind` spelled `value` or fails at the lookahead
    /// token.
    pub fn expect_value(&mut self, kind: TokenKind, value: &str) -> Result<Token, Error> {
        match self.found_value(kind, value) {
            Some(token) => Ok(token),
            None => Err(self.unexpected(Expected::value(kind, value))),
        }
    }

    /// Builds an error located at the lookahead token, carrying the text of
    /// the line it sits on.
    pub fn error_at_current(&self, error_impl: ErrorImpl) -> Error {
        self.error_at(error_impl, self.current_token())
    }

    pub fn error_at(&self, error_impl: ErrorImpl, token: &Token) -> Error {
        let position = token.span.start;
        debug!("{} at {}:{}", error_impl, position.row, position.col);
        Error::new(error_impl, position, self.stream.line(position.row))
    }

    fn unexpected(&self, expected: Expected) -> Error {
        self.error_at_current(ErrorImpl::UnexpectedToken {
            expected,
            found: self.current_token().describe(),
        })
    }

    pub fn into_stream(self) -> S {
        self.stream
    }
}

/// Parses a whole token stream into a [`Program`].
///
/// Fails on the first grammar violation; no partial tree is returned. After
/// the last binding the stream must be exhausted.
pub fn parse<S: TokenStream>(stream: S) -> Result<Program, Error> {
    let mut parser = Parser::new(stream);

    let program = parse_program(&mut parser)?;
    parser.expect(TokenKind::EOF)?;

    info!("parsed {} binding(s)", program.len());
    Ok(program)
}
