//! Error types and error handling for the front end.
//!
//! This module defines the error types produced while tokenizing and
//! parsing. It includes:
//!
//! - Error structures with source position information
//! - The error kind taxonomy (a single `SyntaxError` kind)
//! - Error formatting and display functionality

pub mod errors;

#[cfg(test)]
mod tests;
