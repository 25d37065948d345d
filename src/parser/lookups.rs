use std::collections::HashMap;

use crate::{
    ast::ast::{Expression, Statement},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

pub type StmtHandler = fn(&mut Parser) -> Result<Statement, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expression, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Top level
    parser.global(TokenKind::Import, parse_import_stmt);
    parser.global(TokenKind::Struct, parse_struct_typedef);
    parser.global(TokenKind::Enum, parse_enum_typedef);
    parser.global(TokenKind::Tuple, parse_tuple_typedef);
    parser.global(TokenKind::Identifier, parse_declaration);

    // Statements
    parser.stmt(TokenKind::If, parse_if_stmt);
    parser.stmt(TokenKind::Switch, parse_switch_stmt);
    parser.stmt(TokenKind::For, parse_loop_stmt);
    parser.stmt(TokenKind::OpenCurly, parse_block_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);

    // Expressions
    parser.nud(TokenKind::Func, parse_function_expr);
    parser.nud(TokenKind::Identifier, parse_symbol_expr);
    parser.nud(TokenKind::Number, parse_basic_lit);
    parser.nud(TokenKind::String, parse_basic_lit);
    parser.nud(TokenKind::Char, parse_basic_lit);
}

// Lookup tables inside parser struct, so it's easier
pub type GlobalLookup = HashMap<TokenKind, StmtHandler>;
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
