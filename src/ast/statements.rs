use std::slice::Iter;

use crate::{lexer::tokens::Token, Span};

use super::{
    ast::{Expression, Statement},
    types::TypeStruct,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub statements: Vec<Statement>,
    pub span: Span,
}

impl Block {
    pub fn iter(&self) -> Iter<'_, Statement> {
        self.statements.iter()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Import {
    /// String literal tokens, in source order
    pub paths: Vec<Token>,
    pub span: Span,
}

/// `a, b: T1, T2 = e1, e2`
///
/// Counts are not cross-checked here.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub identifiers: Vec<Token>,
    pub types: Vec<TypeStruct>,
    pub values: Vec<Expression>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub variables: Vec<Expression>,
    /// The assignment operator token; its sub kind says which operator
    pub op: Token,
    /// Empty for `++` and `--`
    pub values: Vec<Expression>,
    pub span: Span,
}

/// `if [init;] cond {} else if cond {} else {}`
///
/// `conditions[i]` guards `blocks[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct IfElseBlock {
    pub init: Option<Box<Statement>>,
    pub conditions: Vec<Expression>,
    pub blocks: Vec<Block>,
    pub else_block: Option<Block>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopKind {
    NoneLoop,
    Cond,
    InitCond,
    InitCondLoop,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoopHeader {
    /// `for { }`
    None,
    /// `for cond { }`
    Cond(Expression),
    /// `for init; cond { }`
    InitCond {
        init: Box<Statement>,
        condition: Expression,
    },
    /// `for init; cond; post { }`
    InitCondLoop {
        init: Box<Statement>,
        condition: Expression,
        post: Box<Statement>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Loop {
    pub header: LoopHeader,
    pub block: Block,
    pub span: Span,
}

impl Loop {
    pub fn kind(&self) -> LoopKind {
        match self.header {
            LoopHeader::None => LoopKind::NoneLoop,
            LoopHeader::Cond(_) => LoopKind::Cond,
            LoopHeader::InitCond { .. } => LoopKind::InitCond,
            LoopHeader::InitCondLoop { .. } => LoopKind::InitCondLoop,
        }
    }

    pub fn condition(&self) -> Option<&Expression> {
        match &self.header {
            LoopHeader::None => None,
            LoopHeader::Cond(condition)
            | LoopHeader::InitCond { condition, .. }
            | LoopHeader::InitCondLoop { condition, .. } => Some(condition),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchKind {
    NoneSwitch,
    CondSwitch,
    InitSwitch,
    InitCondSwitch,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SwitchHeader {
    None,
    Cond(Expression),
    /// `switch init; { }`
    Init(Box<Statement>),
    InitCond {
        init: Box<Statement>,
        condition: Expression,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Case {
    pub condition: Expression,
    pub statements: Vec<Statement>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Switch {
    pub header: SwitchHeader,
    pub cases: Vec<Case>,
    pub default: Option<Block>,
    pub span: Span,
}

impl Switch {
    pub fn kind(&self) -> SwitchKind {
        match self.header {
            SwitchHeader::None => SwitchKind::NoneSwitch,
            SwitchHeader::Cond(_) => SwitchKind::CondSwitch,
            SwitchHeader::Init(_) => SwitchKind::InitSwitch,
            SwitchHeader::InitCond { .. } => SwitchKind::InitCondSwitch,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Return {
    pub values: Vec<Expression>,
    pub span: Span,
}
