use pretty_assertions::assert_eq;

use super::symbol_table::{Symbol, SymbolTable};
use crate::{
    ast::types::{TypeKind, TypeStruct},
    lexer::tokens::{Token, TokenKind},
    Span, MK_TOKEN,
};

fn identifier(name: &str) -> Token {
    MK_TOKEN!(TokenKind::Identifier, None, String::from(name), Span::null())
}

fn named_type(name: &str, pointer_index: usize) -> TypeStruct {
    TypeStruct {
        pointer_index,
        kind: TypeKind::Identifier(identifier(name)),
        span: Span::null(),
    }
}

fn symbol(name: &str, scope: usize, ty: &str) -> Symbol {
    Symbol::new(identifier(name), scope, named_type(ty, 0))
}

#[test]
fn test_find_matches_name_and_scope() {
    let mut table = SymbolTable::new();
    table.add(symbol("x", 0, "int"));
    table.add(symbol("y", 1, "char"));

    assert_eq!(table.find("x", 0).map(Symbol::name), Some("x"));
    assert_eq!(table.find("y", 1).map(Symbol::name), Some("y"));
    assert!(table.find("x", 1).is_none());
    assert!(table.find("z", 0).is_none());
}

#[test]
fn test_find_on_empty_table() {
    let table = SymbolTable::default();

    assert!(table.is_empty());
    assert!(table.find("x", 0).is_none());
}

#[test]
fn test_find_returns_newest_duplicate() {
    let mut table = SymbolTable::new();
    table.add(symbol("x", 1, "int"));
    table.add(symbol("x", 1, "char"));

    let found = table.find("x", 1).unwrap();
    assert_eq!(found.ty.identifier().unwrap().value, "char");
    assert_eq!(table.len(), 2);
}

#[test]
fn test_delete_removes_newest_match() {
    let mut table = SymbolTable::new();
    table.add(symbol("x", 1, "int"));
    table.add(symbol("x", 1, "char"));

    let removed = table.delete("x", 1).unwrap();
    assert_eq!(removed.ty.identifier().unwrap().value, "char");

    // The older declaration is visible again
    let found = table.find("x", 1).unwrap();
    assert_eq!(found.ty.identifier().unwrap().value, "int");
}

#[test]
fn test_delete_missing_symbol() {
    let mut table = SymbolTable::new();
    assert!(table.delete("x", 0).is_none());

    table.add(symbol("x", 0, "int"));
    assert!(table.delete("x", 3).is_none());
    assert_eq!(table.len(), 1);
}

#[test]
fn test_delete_all_tears_down_scope() {
    let mut table = SymbolTable::new();
    table.add(symbol("a", 0, "int"));
    table.add(symbol("b", 1, "int"));
    table.add(symbol("c", 1, "int"));
    table.add(symbol("d", 2, "int"));

    assert_eq!(table.delete_all(1), 2);

    assert!(table.find("b", 1).is_none());
    assert!(table.find("c", 1).is_none());
    assert!(table.find("a", 0).is_some());
    assert!(table.find("d", 2).is_some());

    let names: Vec<&str> = table.iter().map(Symbol::name).collect();
    assert_eq!(names, vec!["d", "a"]);
}

#[test]
fn test_delete_all_includes_newest_symbol() {
    let mut table = SymbolTable::new();
    table.add(symbol("a", 0, "int"));
    table.add(symbol("b", 4, "int"));

    assert_eq!(table.delete_all(4), 1);
    assert_eq!(table.delete_all(4), 0);
    assert_eq!(table.len(), 1);
}

#[test]
fn test_symbol_keeps_type() {
    let mut table = SymbolTable::new();
    table.add(Symbol::new(identifier("p"), 0, named_type("int", 2)));

    let found = table.find("p", 0).unwrap();
    assert_eq!(found.ty, named_type("int", 2));
}
