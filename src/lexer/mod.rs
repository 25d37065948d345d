//! Lexical analysis module.
//!
//! This module contains the reference tokenizer that feeds the parser. It
//! handles:
//!
//! - Tokenization of source code using an ordered regex pattern table
//! - Two-level classification: a primary `TokenKind` and an optional `SubKind`
//! - Line/column tracking for error reporting
//! - Comments and whitespace handling
//!
//! Unrecognised input is not an out-of-band failure: it is handed on as a
//! `TokenKind::Error` token and reported by the parser.

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
