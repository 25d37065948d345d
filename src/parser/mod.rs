//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module turns a stream of tokens into a [`crate::ast::ast::Program`].
//! It is a hand written recursive-descent parser over a backtrackable token
//! cursor and handles:
//!
//! - Top-level statements (imports, declarations, struct/enum/tuple definitions)
//! - Statements inside blocks (control flow, assignments, returns)
//! - Expressions (function literals, calls, literals)
//! - Type parsing for type annotations
//!
//! Statements that start with an expression are disambiguated by parsing
//! ahead from a checkpoint and rewinding once the shape is known.

pub mod cursor;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;
