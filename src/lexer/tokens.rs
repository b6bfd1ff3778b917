use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Keyword);
        map.insert("if", TokenKind::Keyword);
        map.insert("then", TokenKind::Keyword);
        map.insert("else", TokenKind::Keyword);
        map.insert("true", TokenKind::Boolean);
        map.insert("false", TokenKind::Boolean);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Newline,
    Keyword,
    Name,
    Number,
    Boolean,
    Symbol,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::EOF => "EOF",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Name => "NAME",
            TokenKind::Number => "NUM",
            TokenKind::Boolean => "BOOL",
            TokenKind::Symbol => "SYM",
        };

        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{} {} {:?}",
            self.span.start.row, self.span.start.col, self.kind, self.value
        )
    }
}

impl Token {
    /// Describes the token for diagnostics, e.g. ``NAME `x` `` or `EOF`.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::EOF | TokenKind::Newline => self.kind.to_string(),
            _ => format!("{} `{}`", self.kind, self.value),
        }
    }

    pub fn is(&self, kind: TokenKind, value: &str) -> bool {
        self.kind == kind && self.value == value
    }
}
