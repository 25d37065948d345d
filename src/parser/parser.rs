//! Parser state and the program entry point.
//!
//! The parser owns a [`TokenCursor`] and three dispatch tables keyed by the
//! leading token of a construct:
//!
//! - global handlers for top-level statements
//! - statement handlers for keyword-led statements inside blocks
//! - NUD (null denotation) handlers for expressions
//!
//! Everything that is not keyword-led inside a block goes through the
//! speculative disambiguation in [`super::stmt::parse_stmt`].

use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::ast::Program,
    errors::errors::Error,
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position, Span,
};

use super::{
    cursor::{Checkpoint, TokenCursor, TokenSource},
    lookups::{create_token_lookups, GlobalLookup, NUDHandler, NUDLookup, StmtHandler, StmtLookup},
    stmt::parse_global_stmt,
};

pub struct Parser {
    cursor: TokenCursor,
    /// The name of the source file being parsed
    file: Rc<String>,
    global_lookup: GlobalLookup,
    stmt_lookup: StmtLookup,
    nud_lookup: NUDLookup,
}

impl Parser {
    pub fn new(source: Box<dyn TokenSource>, file: Rc<String>) -> Self {
        let mut parser = Parser {
            cursor: TokenCursor::new(source),
            file,
            global_lookup: HashMap::new(),
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&mut self) -> Result<&Token, Error> {
        self.cursor.peek()
    }

    pub fn current_token_kind(&mut self) -> Result<TokenKind, Error> {
        Ok(self.cursor.peek()?.kind)
    }

    /// Advances to the next token and returns the one consumed.
    pub fn advance(&mut self) -> Result<Token, Error> {
        let token = self.cursor.peek()?.clone();
        self.cursor.advance();
        Ok(token)
    }

    /// Consumes the current token if it has the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> Result<bool, Error> {
        if self.current_token_kind()? == kind {
            self.cursor.advance();
            return Ok(true);
        }
        Ok(false)
    }

    /// Consumes a token of the given kind, or fails with "expected <kind>".
    pub fn expect(&mut self, kind: TokenKind) -> Result<Token, Error> {
        if self.current_token_kind()? != kind {
            return Err(self.unexpected(kind.to_string())?);
        }
        self.advance()
    }

    /// Builds the "expected X, got <current token>" error at the current token.
    pub fn unexpected(&mut self, expected: impl Into<String>) -> Result<Error, Error> {
        let token = self.current_token()?;
        Ok(Error::syntax(
            expected,
            token.to_string(),
            token.span.start.clone(),
        ))
    }

    pub fn mark(&self) -> Checkpoint {
        self.cursor.mark()
    }

    pub fn reset(&mut self, checkpoint: Checkpoint) {
        self.cursor.reset(checkpoint)
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&mut self) -> Result<bool, Error> {
        Ok(self.current_token_kind()? != TokenKind::EOF)
    }

    /// Start position of the current token.
    pub fn get_position(&mut self) -> Result<Position, Error> {
        Ok(self.current_token()?.span.start.clone())
    }

    /// End position of the last consumed token.
    pub fn previous_end(&self) -> Position {
        match self.cursor.previous() {
            Some(token) => token.span.end.clone(),
            None => Position::null(),
        }
    }

    /// Span from `start` up to the end of the last consumed token.
    pub fn span_from(&self, start: Position) -> Span {
        Span::new(start, self.previous_end())
    }

    pub fn get_file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    pub fn get_global_lookup(&self) -> &GlobalLookup {
        &self.global_lookup
    }

    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Registers a handler for a statement that may appear at the top level.
    pub fn global(&mut self, kind: TokenKind, global_fn: StmtHandler) {
        self.global_lookup.insert(kind, global_fn);
    }

    /// Registers a handler for a keyword-led statement inside a block.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }
}

/// Parses a whole program from a token producer.
///
/// Global statements are parsed until end of input. The first syntax error
/// aborts the parse.
#[tracing::instrument(skip_all, fields(file = %file))]
pub fn parse(source: impl TokenSource + 'static, file: Rc<String>) -> Result<Program, Error> {
    let mut parser = Parser::new(Box::new(source), file);
    let mut statements = vec![];

    while parser.has_tokens()? {
        statements.push(parse_global_stmt(&mut parser)?);
    }

    tracing::debug!(statements = statements.len(), "parsed program");

    Ok(Program {
        statements,
        file: parser.get_file(),
    })
}

/// Lexes and parses `source` with the reference lexer.
pub fn parse_source(source: &str, file: &str) -> Result<Program, Error> {
    let lexer = Lexer::new(source.to_string(), Some(file.to_string()));
    parse(lexer, Rc::new(file.to_string()))
}
