//! Type expressions for the AST.
//!
//! This module defines how types are written in source:
//!
//! - Named types (a single identifier)
//! - Inline struct and tuple definitions
//! - Function signatures with calling-convention modifiers
//! - Enum definitions (only as top-level type definitions)
//!
//! Every type carries a pointer depth, applied on top of whatever variant
//! it holds. Types are not resolved here; that is left to later passes.

use bitflags::bitflags;

use crate::{lexer::tokens::Token, Span};

use super::ast::Expression;

bitflags! {
    /// Calling convention of a function type or literal.
    ///
    /// `INLINE` combines with exactly one of `ORDINARY`, `ASYNC` or `WORK`.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct FunctionModifier: u8 {
        const ORDINARY = 1 << 0;
        const INLINE = 1 << 1;
        const ASYNC = 1 << 2;
        const WORK = 1 << 3;
    }
}

impl FunctionModifier {
    pub fn is_inline(&self) -> bool {
        self.contains(FunctionModifier::INLINE)
    }
}

/// Type Types
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum TypeType {
    Identifier,
    Struct,
    Tuple,
    Function,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeKind {
    /// A named type, e.g. `int`
    Identifier(Token),
    Struct(Struct),
    Tuple(Tuple),
    Function(FunctionTypeStruct),
}

/// A type as written: `pointer_index` pointer markers applied to a base type.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeStruct {
    pub pointer_index: usize,
    pub kind: TypeKind,
    pub span: Span,
}

impl TypeStruct {
    pub fn get_type_type(&self) -> TypeType {
        match self.kind {
            TypeKind::Identifier(_) => TypeType::Identifier,
            TypeKind::Struct(_) => TypeType::Struct,
            TypeKind::Tuple(_) => TypeType::Tuple,
            TypeKind::Function(_) => TypeType::Function,
        }
    }

    /// Inline struct or tuple definition, as opposed to a reference.
    pub fn is_inline_definition(&self) -> bool {
        matches!(self.kind, TypeKind::Struct(_) | TypeKind::Tuple(_))
    }

    pub fn identifier(&self) -> Option<&Token> {
        match &self.kind {
            TypeKind::Identifier(token) => Some(token),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionTypeStruct {
    pub modifiers: FunctionModifier,
    pub args: Vec<TypeStruct>,
    pub return_types: Vec<TypeStruct>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StructProp {
    /// `..Other` pulls in the fields of another struct
    Embed(Token),
    Field {
        identifier: Token,
        ty: TypeStruct,
        default: Option<Expression>,
    },
}

/// A struct definition. The name is absent for anonymous inline structs.
#[derive(Debug, Clone, PartialEq)]
pub struct Struct {
    pub name: Option<Token>,
    pub props: Vec<StructProp>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tuple {
    pub name: Option<Token>,
    pub types: Vec<TypeStruct>,
    pub span: Span,
}

/// `values[i]` is the explicitly written value of `identifiers[i]`, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct Enum {
    pub name: Token,
    pub identifiers: Vec<Token>,
    pub values: Vec<Option<Expression>>,
    pub span: Span,
}
