//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! A hand-written recursive-descent parser with one function per grammar
//! rule. Every rule is an LL(1) decision over the next token:
//!
//! ```text
//! program     → letBinding*
//! letBinding  → 'let' NAME NAME* '=' expression
//! expression  → 'if' expression 'then' expression 'else' expression
//!             | NAME | 'true' | 'false' | NUM
//! ```
//!
//! Failures are returned as `Result` values and abort the parse at the first
//! violation; there is no error recovery.

pub mod expr;
pub mod parser;
pub mod stmt;
