use std::{collections::VecDeque, rc::Rc};

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    parser::cursor::TokenSource,
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{SubKind, Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

fn pattern(regex: &str, handler: RegexHandler) -> RegexPattern {
    RegexPattern {
        // Every pattern only ever matches at the front of the remaining input
        regex: Regex::new(&format!("^(?:{})", regex)).expect("lexer patterns are valid regexes"),
        handler,
    }
}

lazy_static! {
    // Order matters: longer operators must be tried before their prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        pattern("[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
        pattern("[0-9]+(\\.[0-9]+)?", number_handler),
        pattern("\\s+", skip_handler),
        pattern("\"(\\\\.|[^\"\\\\])*\"", string_handler),
        pattern("'(\\\\.|[^'\\\\])'", char_handler),
        pattern("//[^\n]*", skip_handler),
        pattern("\\[", MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, None, "[")),
        pattern("\\]", MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, None, "]")),
        pattern("\\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, None, "{")),
        pattern("\\}", MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, None, "}")),
        pattern("\\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen, None, "(")),
        pattern("\\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen, None, ")")),
        pattern("==", MK_DEFAULT_HANDLER!(TokenKind::RelationalOperator, Some(SubKind::Equals), "==")),
        pattern("!=", MK_DEFAULT_HANDLER!(TokenKind::RelationalOperator, Some(SubKind::NotEquals), "!=")),
        pattern("<=", MK_DEFAULT_HANDLER!(TokenKind::RelationalOperator, Some(SubKind::LessEquals), "<=")),
        pattern(">=", MK_DEFAULT_HANDLER!(TokenKind::RelationalOperator, Some(SubKind::GreaterEquals), ">=")),
        pattern("<<", MK_DEFAULT_HANDLER!(TokenKind::BitwiseOperator, Some(SubKind::ShiftLeft), "<<")),
        pattern(">>", MK_DEFAULT_HANDLER!(TokenKind::BitwiseOperator, Some(SubKind::ShiftRight), ">>")),
        pattern("<", MK_DEFAULT_HANDLER!(TokenKind::RelationalOperator, Some(SubKind::Less), "<")),
        pattern(">", MK_DEFAULT_HANDLER!(TokenKind::RelationalOperator, Some(SubKind::Greater), ">")),
        pattern("&&", MK_DEFAULT_HANDLER!(TokenKind::LogicalOperator, Some(SubKind::And), "&&")),
        pattern("\\|\\|", MK_DEFAULT_HANDLER!(TokenKind::LogicalOperator, Some(SubKind::Or), "||")),
        pattern("!", MK_DEFAULT_HANDLER!(TokenKind::LogicalOperator, Some(SubKind::Not), "!")),
        pattern("\\+\\+", MK_DEFAULT_HANDLER!(TokenKind::AssignmentOperator, Some(SubKind::Increment), "++")),
        pattern("--", MK_DEFAULT_HANDLER!(TokenKind::AssignmentOperator, Some(SubKind::Decrement), "--")),
        pattern("\\+=", MK_DEFAULT_HANDLER!(TokenKind::AssignmentOperator, Some(SubKind::AddAssign), "+=")),
        pattern("-=", MK_DEFAULT_HANDLER!(TokenKind::AssignmentOperator, Some(SubKind::SubAssign), "-=")),
        pattern("\\*=", MK_DEFAULT_HANDLER!(TokenKind::AssignmentOperator, Some(SubKind::MulAssign), "*=")),
        pattern("/=", MK_DEFAULT_HANDLER!(TokenKind::AssignmentOperator, Some(SubKind::DivAssign), "/=")),
        pattern("%=", MK_DEFAULT_HANDLER!(TokenKind::AssignmentOperator, Some(SubKind::ModAssign), "%=")),
        pattern("=", MK_DEFAULT_HANDLER!(TokenKind::AssignmentOperator, Some(SubKind::Assign), "=")),
        pattern("\\+", MK_DEFAULT_HANDLER!(TokenKind::ArithmeticOperator, Some(SubKind::Add), "+")),
        pattern("-", MK_DEFAULT_HANDLER!(TokenKind::ArithmeticOperator, Some(SubKind::Sub), "-")),
        pattern("\\*", MK_DEFAULT_HANDLER!(TokenKind::ArithmeticOperator, Some(SubKind::Mul), "*")),
        pattern("/", MK_DEFAULT_HANDLER!(TokenKind::ArithmeticOperator, Some(SubKind::Div), "/")),
        pattern("%", MK_DEFAULT_HANDLER!(TokenKind::ArithmeticOperator, Some(SubKind::Mod), "%")),
        pattern("&", MK_DEFAULT_HANDLER!(TokenKind::BitwiseOperator, Some(SubKind::BitAnd), "&")),
        pattern("\\|", MK_DEFAULT_HANDLER!(TokenKind::BitwiseOperator, Some(SubKind::BitOr), "|")),
        pattern("\\^", MK_DEFAULT_HANDLER!(TokenKind::BitwiseOperator, Some(SubKind::BitXor), "^")),
        pattern("\\.\\.", MK_DEFAULT_HANDLER!(TokenKind::DotDot, None, "..")),
        pattern("\\.", MK_DEFAULT_HANDLER!(TokenKind::Dot, None, ".")),
        pattern(",", MK_DEFAULT_HANDLER!(TokenKind::Comma, None, ",")),
        pattern(";", MK_DEFAULT_HANDLER!(TokenKind::Semicolon, None, ";")),
        pattern(":", MK_DEFAULT_HANDLER!(TokenKind::Colon, None, ":")),
    ];
}

/// Pull-based tokenizer. Tokens are produced one at a time on request.
pub struct Lexer {
    pending: VecDeque<Token>,
    source: String,
    pos: usize,
    line: u32,
    column: u32,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            pending: VecDeque::new(),
            source,
            pos: 0,
            line: 1,
            column: 1,
            file: file_name,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column, Rc::clone(&self.file))
    }

    /// Span of the next `n` bytes, without consuming them.
    pub fn span_for(&self, n: usize) -> Span {
        let (line, column) = walk(&self.source[self.pos..self.pos + n], self.line, self.column);

        Span {
            start: self.position(),
            end: Position::new(line, column, Rc::clone(&self.file)),
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        let (line, column) = walk(&self.source[self.pos..self.pos + n], self.line, self.column);
        self.line = line;
        self.column = column;
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.pending.push_back(token);
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn next_token(&mut self) -> Token {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return token;
            }

            if self.at_eof() {
                let span = self.span_for(0);
                return MK_TOKEN!(TokenKind::EOF, None, String::from("EOF"), span);
            }

            self.scan();
        }
    }

    fn scan(&mut self) {
        let matched = PATTERNS
            .iter()
            .find(|pattern| pattern.regex.is_match(self.remainder()));

        match matched {
            Some(pattern) => (pattern.handler)(self, &pattern.regex),
            None => {
                // Hand the offending character to the parser as an error token
                let len = self.remainder().chars().next().map_or(1, char::len_utf8);
                let span = self.span_for(len);
                let value = String::from(&self.remainder()[..len]);

                tracing::trace!(%value, line = span.start.line, column = span.start.column, "unrecognised input");

                self.push(MK_TOKEN!(TokenKind::Error, None, value, span));
                self.advance_n(len);
            }
        }
    }
}

impl TokenSource for Lexer {
    fn next_token(&mut self) -> Token {
        Lexer::next_token(self)
    }
}

fn walk(text: &str, mut line: u32, mut column: u32) -> (u32, u32) {
    for c in text.chars() {
        if c == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }

    (line, column)
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) {
    let Some(matched) = regex.find(lexer.remainder()) else {
        return;
    };
    let value = matched.as_str().to_string();

    let span = lexer.span_for(value.len());
    lexer.advance_n(value.len());
    lexer.push(MK_TOKEN!(TokenKind::Number, None, value, span));
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) {
    if let Some(matched) = regex.find(lexer.remainder()) {
        lexer.advance_n(matched.end());
    }
}

fn unescape(literal: &str) -> String {
    let mut result = String::new();
    let mut chars = literal.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        match chars.peek() {
            Some('n') => {
                result.push('\n');
                chars.next();
            }
            Some('t') => {
                result.push('\t');
                chars.next();
            }
            Some('r') => {
                result.push('\r');
                chars.next();
            }
            Some('0') => {
                result.push('\0');
                chars.next();
            }
            Some(quote @ ('\\' | '"' | '\'')) => {
                result.push(*quote);
                chars.next();
            }
            Some('x') => {
                chars.next();
                let mut hex = String::new();

                for _ in 0..2 {
                    match chars.peek() {
                        Some(digit) if digit.is_ascii_hexdigit() => {
                            hex.push(*digit);
                            chars.next();
                        }
                        _ => break,
                    }
                }

                match u8::from_str_radix(&hex, 16) {
                    Ok(byte) => result.push(byte as char),
                    // `\x` with no digits stays as written
                    Err(_) => result.push_str("\\x"),
                }
            }
            _ => result.push(ch), // Keep the backslash
        }
    }

    result
}

fn string_handler(lexer: &mut Lexer, regex: &Regex) {
    let Some(matched) = regex.find(lexer.remainder()) else {
        return;
    };
    let len = matched.end();
    let value = unescape(&matched.as_str()[1..len - 1]);

    let span = lexer.span_for(len);
    lexer.advance_n(len);
    lexer.push(MK_TOKEN!(TokenKind::String, None, value, span));
}

fn char_handler(lexer: &mut Lexer, regex: &Regex) {
    let Some(matched) = regex.find(lexer.remainder()) else {
        return;
    };
    let len = matched.end();
    let value = unescape(&matched.as_str()[1..len - 1]);

    let span = lexer.span_for(len);
    lexer.advance_n(len);
    lexer.push(MK_TOKEN!(TokenKind::Char, None, value, span));
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) {
    let Some(matched) = regex.find(lexer.remainder()) else {
        return;
    };
    let value = matched.as_str().to_string();
    let kind = RESERVED_LOOKUP
        .get(value.as_str())
        .copied()
        .unwrap_or(TokenKind::Identifier);

    let span = lexer.span_for(value.len());
    lexer.advance_n(value.len());
    lexer.push(MK_TOKEN!(kind, None, value, span));
}

/// Tokenizes a whole source text up front, ending with the EOF token.
///
/// The parser pulls tokens lazily through [`TokenSource`]; this is for callers
/// that want the full stream, and it turns the first unrecognised input into
/// an error.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();

        match token.kind {
            TokenKind::Error => {
                return Err(Error::new(
                    ErrorImpl::UnrecognisedToken { token: token.value },
                    token.span.start,
                ))
            }
            TokenKind::EOF => {
                tokens.push(token);
                return Ok(tokens);
            }
            _ => tokens.push(token),
        }
    }
}
