use lazy_static::lazy_static;
use log::{info, trace};
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    get_line, Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer<'_>, &Regex) -> Result<(), Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Every pattern is anchored; the first one that matches the remainder wins.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^\r?\n").unwrap(), handler: newline_handler },
        RegexPattern { regex: Regex::new("^[ \t\r]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^//[^\n]*").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^[0-9]+").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Symbol, "=") },
    ];
}

pub struct Lexer<'src> {
    tokens: Vec<Token>,
    source: &'src str,
    /// Byte offset of the next unread character.
    pos: usize,
    row: usize,
    /// Byte offset where the current row begins.
    line_start: usize,
    /// No token has been pushed on the current row yet.
    at_line_start: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Lexer<'src> {
        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            row: 1,
            line_start: 0,
            at_line_start: true,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    /// Pushes a token, preceded by a `Newline` token if it is the first one
    /// on its row.
    pub fn push(&mut self, token: Token) {
        if self.at_line_start {
            let start = Position::new(self.row, 1);
            let newline = MK_TOKEN!(TokenKind::Newline, String::from("\n"), Span { start, end: start });
            trace!("token {}", newline);
            self.tokens.push(newline);
            self.at_line_start = false;
        }

        trace!("token {}", token);
        self.tokens.push(token);
    }

    pub fn position(&self) -> Position {
        let col = self.source[self.line_start..self.pos].chars().count() + 1;
        Position::new(self.row, col)
    }

    pub fn remainder(&self) -> &'src str {
        &self.source[self.pos..]
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn next_line(&mut self) {
        self.row += 1;
        self.line_start = self.pos;
        self.at_line_start = true;
    }

    /// Builds an error located at the next unread character.
    fn error_here(&self, error_impl: ErrorImpl) -> Error {
        let position = self.position();
        Error::new(error_impl, position, get_line(self.source, position.row))
    }

    fn matched(&self, regex: &Regex) -> &'src str {
        regex.find(self.remainder()).map_or("", |m| m.as_str())
    }

    fn push_matched(&mut self, kind: TokenKind, value: &'src str) {
        let start = self.position();
        self.advance_n(value.len());
        let end = self.position();
        self.push(MK_TOKEN!(kind, String::from(value), Span { start, end }));
    }
}

fn newline_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = lexer.matched(regex);
    lexer.advance_n(matched.len());
    lexer.next_line();
    Ok(())
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = lexer.matched(regex);
    lexer.advance_n(matched.len());
    Ok(())
}

/// Only literals that fit in an `i64` become `Number` tokens.
fn number_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = lexer.matched(regex);

    if matched.parse::<i64>().is_err() {
        return Err(lexer.error_here(ErrorImpl::NumberOutOfRange {
            token: matched.to_string(),
        }));
    }

    lexer.push_matched(TokenKind::Number, matched);
    Ok(())
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let value = lexer.matched(regex);
    let kind = RESERVED_LOOKUP.get(value).copied().unwrap_or(TokenKind::Name);
    lexer.push_matched(kind, value);
    Ok(())
}

/// Splits `source` into tokens, ending with a single `EOF` token.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        let remainder = lex.remainder();

        match PATTERNS.iter().find(|pattern| pattern.regex.is_match(remainder)) {
            Some(pattern) => (pattern.handler)(&mut lex, &pattern.regex)?,
            None => {
                let token = lex.at().map(String::from).unwrap_or_default();
                return Err(lex.error_here(ErrorImpl::UnrecognisedToken { token }));
            }
        }
    }

    let end = lex.position();
    lex.tokens.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), Span { start: end, end }));

    info!("tokenized {} tokens over {} line(s)", lex.tokens.len(), lex.row);
    Ok(lex.tokens)
}
