//! Lexical analysis module.
//!
//! This module turns source text into the token stream the parser consumes:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of keywords, booleans, names, numbers and symbols
//! - A `Newline` token in front of every non-blank line
//! - Row/column tracking for error reporting
//! - The `TokenStream` trait the parser is written against

pub mod lexer;
pub mod stream;
pub mod tokens;
