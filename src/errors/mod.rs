//! Error types and error reporting.
//!
//! This module defines:
//!
//! - `Error`, a failure located at a row/column with its source line
//! - `ErrorImpl`, the kinds of lexical, grammatical and internal failures
//! - Caret-annotated rendering of a failure
//! - Helpful suggestions attached to common mistakes

pub mod errors;
