use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("import", TokenKind::Import);
        map.insert("struct", TokenKind::Struct);
        map.insert("enum", TokenKind::Enum);
        map.insert("tuple", TokenKind::Tuple);
        map.insert("func", TokenKind::Func);
        map.insert("inline", TokenKind::Inline);
        map.insert("async", TokenKind::Async);
        map.insert("work", TokenKind::Work);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("switch", TokenKind::Switch);
        map.insert("case", TokenKind::Case);
        map.insert("default", TokenKind::Default);
        map.insert("for", TokenKind::For);
        map.insert("return", TokenKind::Return);
        map
    };
}

/// Primary token classification.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    /// Input the lexer could not classify
    Error,

    Number,
    String,
    Char,
    Identifier,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Comma,
    Semicolon,
    Colon,
    Dot,
    DotDot,

    // Operator categories, refined by `SubKind`
    AssignmentOperator,
    ArithmeticOperator,
    RelationalOperator,
    LogicalOperator,
    BitwiseOperator,

    // Reserved
    Import,
    Struct,
    Enum,
    Tuple,
    Func,
    Inline,
    Async,
    Work,
    If,
    Else,
    Switch,
    Case,
    Default,
    For,
    Return,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Secondary token classification, e.g. which operator an operator token is.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum SubKind {
    Assign,    // =
    AddAssign, // +=
    SubAssign, // -=
    MulAssign, // *=
    DivAssign, // /=
    ModAssign, // %=
    Increment, // ++
    Decrement, // --

    Add,
    Sub,
    Mul, // also the pointer marker
    Div,
    Mod,

    Equals,    // ==
    NotEquals, // !=
    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    And, // &&
    Or,  // ||
    Not, // !

    BitAnd,
    BitOr,
    BitXor,
    ShiftLeft,
    ShiftRight,
}

impl Display for SubKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub sub_kind: Option<SubKind>,
    pub value: String,
    pub span: Span,
}

// Tokens are equal when they classify and read the same; where they sit is irrelevant.
impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.sub_kind == other.sub_kind && self.value == other.value
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::EOF => write!(f, "end of input"),
            _ => match self.sub_kind {
                Some(sub_kind) => write!(f, "{} `{}`", sub_kind, self.value),
                None => write!(f, "{} `{}`", self.kind, self.value),
            },
        }
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn is_sub(&self, sub_kind: SubKind) -> bool {
        self.sub_kind == Some(sub_kind)
    }

    /// `=` on its own, as opposed to compound assignment operators.
    pub fn is_plain_assign(&self) -> bool {
        self.kind == TokenKind::AssignmentOperator && self.is_sub(SubKind::Assign)
    }

    pub fn is_pointer_marker(&self) -> bool {
        self.kind == TokenKind::ArithmeticOperator && self.is_sub(SubKind::Mul)
    }

    pub fn debug(&self) -> String {
        if self.is_one_of_many(&[
            TokenKind::String,
            TokenKind::Identifier,
            TokenKind::Number,
            TokenKind::Char,
        ]) {
            format!("{}:{} {} ({})", self.span.start.line, self.span.start.column, self.kind, self.value)
        } else if let Some(sub_kind) = self.sub_kind {
            format!("{}:{} {} {}", self.span.start.line, self.span.start.column, self.kind, sub_kind)
        } else {
            format!("{}:{} {}", self.span.start.line, self.span.start.column, self.kind)
        }
    }
}
