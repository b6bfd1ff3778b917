use crate::{get_line, Position, Span, MK_TOKEN};

use super::tokens::{Token, TokenKind};

/// The parser's view of its input: one-token-at-a-time consumption with
/// lookahead, plus access to the raw source lines for diagnostics.
pub trait TokenStream {
    /// Returns the `k`-th upcoming token (1-based) without consuming it.
    /// Past the end of input this keeps returning the `EOF` token.
    fn peek(&self, k: usize) -> &Token;

    /// Consumes and returns the next token. `EOF` is never consumed.
    fn pop(&mut self) -> Token;

    /// Returns the raw text of the 1-based source `row`.
    fn line(&self, row: usize) -> &str;
}

/// A [`TokenStream`] over an already tokenized source.
#[derive(Debug, Clone)]
pub struct TokenBuffer {
    tokens: Vec<Token>,
    pos: usize,
    source: String,
}

impl TokenBuffer {
    /// Wraps `tokens`, appending an `EOF` token if the list does not already
    /// end with one.
    pub fn new(mut tokens: Vec<Token>, source: impl Into<String>) -> Self {
        if tokens.last().map_or(true, |token| token.kind != TokenKind::EOF) {
            let end = tokens
                .last()
                .map_or(Position::new(1, 1), |token| token.span.end);
            tokens.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), Span { start: end, end }));
        }

        TokenBuffer {
            tokens,
            pos: 0,
            source: source.into(),
        }
    }

    /// Number of tokens left, including the final `EOF`.
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.pos
    }
}

impl TokenStream for TokenBuffer {
    fn peek(&self, k: usize) -> &Token {
        debug_assert!(k > 0, "lookahead is 1-based");

        let last = self.tokens.len() - 1;
        let index = (self.pos + k.saturating_sub(1)).min(last);
        &self.tokens[index]
    }

    fn pop(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if token.kind != TokenKind::EOF {
            self.pos += 1;
        }
        token
    }

    fn line(&self, row: usize) -> &str {
        get_line(&self.source, row)
    }
}
