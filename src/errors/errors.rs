use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// The category an error is reported under.
///
/// Every failure the front end can produce is a syntax error; lexer
/// failures surface through the parser under the same kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    SyntaxError,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::SyntaxError => write!(f, "SyntaxError"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    /// Shorthand for the common "expected X, got Y" failure.
    pub fn syntax(expected: impl Into<String>, got: impl Into<String>, position: Position) -> Self {
        Error::new(
            ErrorImpl::SyntaxError {
                expected: expected.into(),
                got: got.into(),
            },
            position,
        )
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn line(&self) -> u32 {
        self.position.line
    }

    pub fn column(&self) -> u32 {
        self.position.column
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::SyntaxError { .. } | ErrorImpl::UnrecognisedToken { .. } => {
                ErrorKind::SyntaxError
            }
        }
    }

    pub fn get_error_name(&self) -> &str {
        match self.kind() {
            ErrorKind::SyntaxError => "SyntaxError",
        }
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// Human readable message, without position.
    pub fn message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::SyntaxError { .. } => ErrorTip::Suggestion(self.message()),
            ErrorImpl::UnrecognisedToken { token } => ErrorTip::Suggestion(format!(
                "Unrecognised token: `{}`, is it a typo?",
                token
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}:{}: {}",
            self.get_error_name(),
            self.position.line,
            self.position.column,
            self.internal_error
        )
    }
}

impl std::error::Error for Error {}

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

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("expected {expected}, got {got}")]
    SyntaxError { expected: String, got: String },
    #[error("expected a valid token, got unrecognised `{token}`")]
    UnrecognisedToken { token: String },
}
