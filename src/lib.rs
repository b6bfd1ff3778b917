#![allow(clippy::module_inception)]

use std::path::Path;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorTip},
    lexer::{lexer::tokenize, stream::TokenBuffer},
};

pub mod ast;
pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A 1-based row/column pair. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Returns the text of the 1-based `row` in `source`, without its line ending.
///
/// Rows past the end of the source (such as the row of a trailing `EOF`
/// token after a final newline) yield an empty line.
pub fn get_line(source: &str, row: usize) -> &str {
    row.checked_sub(1)
        .and_then(|index| source.lines().nth(index))
        .unwrap_or("")
}

/// Tokenizes and parses `source` in one step.
pub fn parse_source(source: &str) -> Result<Program, Error> {
    let tokens = tokenize(source)?;
    parser::parser::parse(TokenBuffer::new(tokens, source))
}

pub fn format_error(error: &Error, file: &Path) -> String {
    /*
        Error: UnexpectedToken (expected NAME, found SYM `=`)
        -> main.let
        let = true
            ^
        expected NAME, found SYM `=` (@1:5)
    */

    let header = if let ErrorTip::None = error.get_tip() {
        format!("Error: {}", error.get_error_name())
    } else {
        format!("Error: {} ({})", error.get_error_name(), error.get_tip())
    };

    format!(
        "{}\n-> {}\n{}",
        header,
        file.as_os_str().to_string_lossy(),
        error.render()
    )
}
