//! Scope-tagged symbol table for later semantic passes.
//!
//! Symbols are matched by lexeme and scope depth. Scope numbering belongs to
//! the caller; the table only stores and compares it.

pub mod symbol_table;

#[cfg(test)]
mod tests;
