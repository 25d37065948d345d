use crate::{ast::types::TypeStruct, lexer::tokens::Token};

#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub identifier: Token,
    /// Depth of the scope the symbol was declared in
    pub scope: usize,
    pub ty: TypeStruct,
}

impl Symbol {
    pub fn new(identifier: Token, scope: usize, ty: TypeStruct) -> Self {
        Symbol {
            identifier,
            scope,
            ty,
        }
    }

    pub fn name(&self) -> &str {
        &self.identifier.value
    }

    fn matches(&self, identifier: &str, scope: usize) -> bool {
        self.scope == scope && self.identifier.value == identifier
    }
}

/// Symbols in insertion order. Lookups walk from the newest entry back, so
/// a redeclaration in the same scope shadows the older one.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable { symbols: vec![] }
    }

    /// Duplicates are not rejected.
    pub fn add(&mut self, symbol: Symbol) {
        tracing::trace!(name = symbol.name(), scope = symbol.scope, "add symbol");
        self.symbols.push(symbol);
    }

    /// The most recently added symbol with this name in exactly this scope.
    pub fn find(&self, identifier: &str, scope: usize) -> Option<&Symbol> {
        self.symbols
            .iter()
            .rev()
            .find(|symbol| symbol.matches(identifier, scope))
    }

    /// Removes the most recently added match and returns it.
    pub fn delete(&mut self, identifier: &str, scope: usize) -> Option<Symbol> {
        let index = self
            .symbols
            .iter()
            .rposition(|symbol| symbol.matches(identifier, scope))?;

        tracing::trace!(name = identifier, scope, "delete symbol");
        Some(self.symbols.remove(index))
    }

    /// Removes every symbol declared in `scope`, returning how many went.
    pub fn delete_all(&mut self, scope: usize) -> usize {
        let before = self.symbols.len();
        self.symbols.retain(|symbol| symbol.scope != scope);

        let removed = before - self.symbols.len();
        tracing::trace!(scope, removed, "delete scope");
        removed
    }

    /// Newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
