use std::{fmt::Display, rc::Rc, slice::Iter};

use crate::Span;

use super::{
    expressions::{BasicLit, FunctionCall, FunctionExpression},
    statements::{Assignment, Block, Declaration, IfElseBlock, Import, Loop, Return, Switch},
    types::{Enum, Struct, Tuple},
};

/// Statement Types
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum StmtType {
    Import,
    Declaration,
    Assignment,
    IfElse,
    Loop,
    Switch,
    Block,
    Return,
    Expression,
    Struct,
    Enum,
    Tuple,
}

impl Display for StmtType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Anything that can stand on its own at the top level or inside a block.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Import(Import),
    Declaration(Declaration),
    Assignment(Assignment),
    IfElse(IfElseBlock),
    Loop(Loop),
    Switch(Switch),
    Block(Block),
    Return(Return),
    Expression(Expression),
    /// `struct Name { ... }` at the top level
    Struct(Struct),
    Enum(Enum),
    Tuple(Tuple),
}

impl Statement {
    pub fn get_stmt_type(&self) -> StmtType {
        match self {
            Statement::Import(_) => StmtType::Import,
            Statement::Declaration(_) => StmtType::Declaration,
            Statement::Assignment(_) => StmtType::Assignment,
            Statement::IfElse(_) => StmtType::IfElse,
            Statement::Loop(_) => StmtType::Loop,
            Statement::Switch(_) => StmtType::Switch,
            Statement::Block(_) => StmtType::Block,
            Statement::Return(_) => StmtType::Return,
            Statement::Expression(_) => StmtType::Expression,
            Statement::Struct(_) => StmtType::Struct,
            Statement::Enum(_) => StmtType::Enum,
            Statement::Tuple(_) => StmtType::Tuple,
        }
    }

    pub fn get_span(&self) -> &Span {
        match self {
            Statement::Import(import) => &import.span,
            Statement::Declaration(declaration) => &declaration.span,
            Statement::Assignment(assignment) => &assignment.span,
            Statement::IfElse(if_else) => &if_else.span,
            Statement::Loop(lp) => &lp.span,
            Statement::Switch(switch) => &switch.span,
            Statement::Block(block) => &block.span,
            Statement::Return(ret) => &ret.span,
            Statement::Expression(expression) => expression.get_span(),
            Statement::Struct(strct) => &strct.span,
            Statement::Enum(enm) => &enm.span,
            Statement::Tuple(tuple) => &tuple.span,
        }
    }

    pub fn as_expression(&self) -> Option<&Expression> {
        match self {
            Statement::Expression(expression) => Some(expression),
            _ => None,
        }
    }

    /// Unwraps an expression statement, handing any other statement back.
    pub fn into_expression(self) -> Result<Expression, Statement> {
        match self {
            Statement::Expression(expression) => Ok(expression),
            other => Err(other),
        }
    }
}

/// Expression Types
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum ExprType {
    Function,
    Call,
    Literal,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Function(FunctionExpression),
    Call(FunctionCall),
    Literal(BasicLit),
}

impl Expression {
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expression::Function(_) => ExprType::Function,
            Expression::Call(_) => ExprType::Call,
            Expression::Literal(_) => ExprType::Literal,
        }
    }

    pub fn get_span(&self) -> &Span {
        match self {
            Expression::Function(function) => &function.span,
            Expression::Call(call) => &call.span,
            Expression::Literal(literal) => &literal.value.span,
        }
    }
}

/// The parsed file: global statements in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
    pub file: Rc<String>,
}

impl Program {
    pub fn iter(&self) -> Iter<'_, Statement> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}
