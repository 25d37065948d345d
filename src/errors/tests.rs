//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorKind, ErrorTip};
use crate::Position;
use std::rc::Rc;

fn position(line: u32, column: u32) -> Position {
    Position::new(line, column, Rc::new("test.lang".to_string()))
}

#[test]
fn test_syntax_error_creation() {
    let error = Error::syntax("Semicolon", "Identifier `x`", position(3, 7));

    assert_eq!(error.get_error_name(), "SyntaxError");
    assert_eq!(error.kind(), ErrorKind::SyntaxError);
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::SyntaxError {
            expected: "a type".to_string(),
            got: "Comma `,`".to_string(),
        },
        position(42, 5),
    );

    assert_eq!(error.get_position().line, 42);
    assert_eq!(error.line(), 42);
    assert_eq!(error.column(), 5);
}

#[test]
fn test_syntax_error_message_shape() {
    let error = Error::syntax("CloseParen", "end of input", position(1, 12));

    assert_eq!(error.message(), "expected CloseParen, got end of input");
    assert_eq!(
        error.to_string(),
        "SyntaxError at 1:12: expected CloseParen, got end of input"
    );
}

#[test]
fn test_unrecognised_token_reports_as_syntax_error() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        position(1, 1),
    );

    assert_eq!(error.kind(), ErrorKind::SyntaxError);
    assert_eq!(error.get_error_name(), "SyntaxError");
    assert_eq!(error.message(), "expected a valid token, got unrecognised `@`");
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::syntax("CloseCurly", "Return `return`", position(0, 0));

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "expected CloseCurly, got Return `return`"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_impl_equality() {
    let error = Error::syntax("Colon", "Comma `,`", position(2, 2));

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::SyntaxError {
            expected: "Colon".to_string(),
            got: "Comma `,`".to_string(),
        }
    );
}
