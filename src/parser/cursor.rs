//! Buffered, backtrackable view over a token producer.
//!
//! The cursor pulls tokens lazily from a [`TokenSource`] and keeps every
//! token it has handed out, so the parser can take a [`Checkpoint`], parse
//! ahead speculatively and then either keep going or rewind.
//!
//! ```ignore
//! let checkpoint = cursor.mark();
//! let expr = parse_expr(parser)?;
//! if looks_like_assignment {
//!     cursor.reset(checkpoint);
//!     return parse_assignment(parser);
//! }
//! ```
//!
//! Checkpoints are plain values. Any number of them can be outstanding, and
//! dropping one without resetting simply commits the tokens consumed since.

use std::collections::VecDeque;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span, MK_TOKEN,
};

/// Anything that can hand out tokens one at a time.
///
/// Producers never fail: malformed input comes back as a `TokenKind::Error`
/// token, and once input is exhausted every call returns a `TokenKind::EOF`
/// token.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

/// A [`TokenSource`] over tokens that were produced ahead of time.
pub struct TokenList {
    tokens: VecDeque<Token>,
    eof: Token,
}

impl TokenList {
    pub fn new(tokens: Vec<Token>) -> Self {
        let end = tokens
            .last()
            .map(|token| token.span.end.clone())
            .unwrap_or_else(Position::null);
        let eof = MK_TOKEN!(
            TokenKind::EOF,
            None,
            String::from("EOF"),
            Span::new(end.clone(), end)
        );

        TokenList {
            tokens: tokens.into(),
            eof,
        }
    }
}

impl From<Vec<Token>> for TokenList {
    fn from(tokens: Vec<Token>) -> Self {
        TokenList::new(tokens)
    }
}

impl TokenSource for TokenList {
    fn next_token(&mut self) -> Token {
        self.tokens.pop_front().unwrap_or_else(|| self.eof.clone())
    }
}

/// A saved cursor position, see [`TokenCursor::mark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    pos: usize,
}

pub struct TokenCursor {
    source: Box<dyn TokenSource>,
    /// Every token pulled so far
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenCursor {
    pub fn new(source: Box<dyn TokenSource>) -> Self {
        TokenCursor {
            source,
            tokens: vec![],
            pos: 0,
        }
    }

    fn fill(&mut self) {
        while self.pos >= self.tokens.len() {
            let token = self.source.next_token();
            self.tokens.push(token);
        }
    }

    /// The next unconsumed token.
    ///
    /// An error token from the producer is reported here, at its position.
    pub fn peek(&mut self) -> Result<&Token, Error> {
        self.fill();

        let token = &self.tokens[self.pos];
        if token.kind == TokenKind::Error {
            return Err(Error::new(
                ErrorImpl::UnrecognisedToken {
                    token: token.value.clone(),
                },
                token.span.start.clone(),
            ));
        }

        Ok(token)
    }

    /// Consumes the front token. At end of input this does nothing.
    pub fn advance(&mut self) {
        self.fill();

        if self.tokens[self.pos].kind != TokenKind::EOF {
            self.pos += 1;
        }
    }

    /// The most recently consumed token, if any.
    pub fn previous(&self) -> Option<&Token> {
        self.pos.checked_sub(1).and_then(|pos| self.tokens.get(pos))
    }

    pub fn mark(&self) -> Checkpoint {
        tracing::trace!(pos = self.pos, "cursor mark");
        Checkpoint { pos: self.pos }
    }

    pub fn reset(&mut self, checkpoint: Checkpoint) {
        tracing::trace!(from = self.pos, to = checkpoint.pos, "cursor reset");
        self.pos = checkpoint.pos;
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        lexer::{lexer::Lexer, tokens::TokenKind},
        Position,
    };

    use super::*;

    fn cursor(source: &str) -> TokenCursor {
        TokenCursor::new(Box::new(Lexer::new(source.to_string(), None)))
    }

    fn token(kind: TokenKind, value: &str, line: u32, column: u32) -> Token {
        let start = Position::new(line, column, Rc::new(String::from("test.lang")));
        let end = Position::new(line, column + value.len() as u32, Rc::new(String::from("test.lang")));
        MK_TOKEN!(kind, None, String::from(value), Span::new(start, end))
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut cursor = cursor("a b");

        assert_eq!(cursor.peek().unwrap().value, "a");
        assert_eq!(cursor.peek().unwrap().value, "a");
        cursor.advance();
        assert_eq!(cursor.peek().unwrap().value, "b");
    }

    #[test]
    fn test_advance_stops_at_end_of_input() {
        let mut cursor = cursor("a");

        cursor.advance();
        assert_eq!(cursor.peek().unwrap().kind, TokenKind::EOF);
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.peek().unwrap().kind, TokenKind::EOF);
        assert_eq!(cursor.previous().unwrap().value, "a");
    }

    #[test]
    fn test_reset_rewinds_to_mark() {
        let mut cursor = cursor("a b c d");

        cursor.advance();
        let checkpoint = cursor.mark();
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.peek().unwrap().value, "d");

        cursor.reset(checkpoint);
        assert_eq!(cursor.peek().unwrap().value, "b");
        assert_eq!(cursor.previous().unwrap().value, "a");
    }

    #[test]
    fn test_checkpoints_nest() {
        let mut cursor = cursor("a b c d");

        let outer = cursor.mark();
        cursor.advance();
        let inner = cursor.mark();
        cursor.advance();
        cursor.advance();

        cursor.reset(inner);
        assert_eq!(cursor.peek().unwrap().value, "b");
        cursor.reset(outer);
        assert_eq!(cursor.peek().unwrap().value, "a");
    }

    #[test]
    fn test_error_token_surfaces_as_syntax_error() {
        let mut cursor = cursor("a\n  $");

        cursor.advance();
        let error = cursor.peek().unwrap_err();
        assert_eq!(error.get_error_name(), "SyntaxError");
        assert_eq!((error.line(), error.column()), (2, 3));
    }

    #[test]
    fn test_token_list_source() {
        let mut cursor = TokenCursor::new(Box::new(TokenList::new(vec![
            token(TokenKind::Identifier, "x", 1, 1),
            token(TokenKind::Semicolon, ";", 1, 2),
        ])));

        assert_eq!(cursor.peek().unwrap().kind, TokenKind::Identifier);
        cursor.advance();
        assert_eq!(cursor.peek().unwrap().kind, TokenKind::Semicolon);
        cursor.advance();

        let eof = cursor.peek().unwrap();
        assert_eq!(eof.kind, TokenKind::EOF);
        assert_eq!(eof.span.start.column, 3);
    }
}
