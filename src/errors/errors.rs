use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// A located parse failure: what went wrong, where, and the text of the
/// source line it happened on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
    line: String,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position, line: impl Into<String>) -> Self {
        Error {
            internal_error: error_impl,
            position,
            line: line.into(),
        }
    }

    pub fn get_position(&self) -> Position {
        self.position
    }

    pub fn get_line(&self) -> &str {
        &self.line
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::NumberOutOfRange { .. } => "NumberOutOfRange",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnrecognisedExpression { .. } => "UnrecognisedExpression",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::BooleanParseError { .. } => "BooleanParseError",
        }
    }

    /// Value conversion failures mean the token stream handed the parser a
    /// token it promised was well formed. The shipped lexer range-checks
    /// numbers itself, so these only come from other streams.
    pub fn is_internal(&self) -> bool {
        matches!(
            self.internal_error,
            ErrorImpl::NumberParseError { .. } | ErrorImpl::BooleanParseError { .. }
        )
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::NumberOutOfRange { .. } => ErrorTip::Suggestion(format!(
                "the largest integer literal is {}",
                i64::MAX
            )),
            ErrorImpl::UnexpectedToken { expected, .. } => {
                match (expected.kind, expected.value.as_deref()) {
                    (TokenKind::Keyword, Some("let")) => ErrorTip::Suggestion(String::from(
                        "every non-blank line must start with `let`",
                    )),
                    (TokenKind::Name, None) => {
                        ErrorTip::Suggestion(String::from("a binding needs a name after `let`"))
                    }
                    (TokenKind::Symbol, Some("=")) => ErrorTip::Suggestion(String::from(
                        "a binding's arguments must be followed by `=`",
                    )),
                    (TokenKind::Keyword, Some("then" | "else")) => {
                        ErrorTip::Suggestion(String::from(
                            "an `if` expression needs both a `then` and an `else` branch",
                        ))
                    }
                    (TokenKind::EOF, None) => {
                        ErrorTip::Suggestion(String::from("only one binding is allowed per line"))
                    }
                    _ => ErrorTip::None,
                }
            }
            ErrorImpl::UnrecognisedExpression { .. } => ErrorTip::Suggestion(String::from(
                "expected `if`, a name, a number, `true` or `false`",
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::BooleanParseError { token } => {
                ErrorTip::Suggestion(format!("Invalid boolean: `{}`", token))
            }
        }
    }

    /// Renders the failure as the offending source line, a caret under the
    /// offending column, and the message with its `(@row:col)` location.
    pub fn render(&self) -> String {
        // Tabs before the caret are kept so it lines up however tabs display.
        let padding: String = self
            .line
            .chars()
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .chain(std::iter::repeat(' '))
            .take(self.position.col.saturating_sub(1))
            .collect();

        format!(
            "{}\n{}^\n{} (@{}:{})",
            self.line, padding, self.internal_error, self.position.row, self.position.col
        )
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// The token a grammar rule required: a kind, and for keywords and symbols
/// the exact spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expected {
    pub kind: TokenKind,
    pub value: Option<String>,
}

impl Expected {
    pub fn kind(kind: TokenKind) -> Self {
        Expected { kind, value: None }
    }

    pub fn value(kind: TokenKind, value: impl Into<String>) -> Self {
        Expected {
            kind,
            value: Some(value.into()),
        }
    }
}

impl Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} `{}`", self.kind, value),
            None => write!(f, "{}", self.kind),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("number literal {token} does not fit in a 64-bit integer")]
    NumberOutOfRange { token: String },
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: Expected, found: String },
    #[error("unrecognised expression, found {found}")]
    UnrecognisedExpression { found: String },
    #[error("internal error: NUM token {token:?} is not a 64-bit integer, please report this as a lexer bug")]
    NumberParseError { token: String },
    #[error("internal error: BOOL token {token:?} is not `true` or `false`, please report this as a lexer bug")]
    BooleanParseError { token: String },
}
