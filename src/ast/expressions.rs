use crate::{lexer::tokens::Token, Span};

use super::{
    ast::Expression,
    statements::Block,
    types::{FunctionModifier, TypeStruct},
};

// LITERALS

/// Default type given to literals before any inference runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralType {
    U8,
}

/// Basic Literal
/// A single token used as a value: identifiers, numbers, strings and chars.
#[derive(Debug, Clone, PartialEq)]
pub struct BasicLit {
    pub ty: LiteralType,
    pub value: Token,
}

/// Function Call
/// `name(args...)`
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub name: Token,
    pub args: Vec<Expression>,
    pub span: Span,
}

/// A named, typed parameter of a function literal.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    pub identifier: Token,
    pub ty: TypeStruct,
}

/// Function Expression
/// `func [inline] [async|work] [inline] (args) returns { body }`
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionExpression {
    pub modifiers: FunctionModifier,
    pub args: Vec<Argument>,
    pub return_types: Vec<TypeStruct>,
    pub block: Block,
    pub span: Span,
}
