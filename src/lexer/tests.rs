//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric, string and char literals
//! - Operators with their secondary classification
//! - Line/column tracking
//! - Error tokens

use super::{
    lexer::{tokenize, Lexer},
    tokens::{SubKind, TokenKind},
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.lang".to_string()))
        .unwrap()
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    let source = "import struct enum tuple func inline async work if else switch case default for return";

    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Import,
            TokenKind::Struct,
            TokenKind::Enum,
            TokenKind::Tuple,
            TokenKind::Func,
            TokenKind::Inline,
            TokenKind::Async,
            TokenKind::Work,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::Switch,
            TokenKind::Case,
            TokenKind::Default,
            TokenKind::For,
            TokenKind::Return,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar baz_123 _underscore CamelCase funcs".to_string();
    let tokens = tokenize(source, Some("test.lang".to_string())).unwrap();

    let values: Vec<&str> = tokens[..6].iter().map(|token| token.value.as_str()).collect();
    assert_eq!(values, vec!["foo", "bar", "baz_123", "_underscore", "CamelCase", "funcs"]);
    assert!(tokens[..6].iter().all(|token| token.kind == TokenKind::Identifier));
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_literals() {
    let source = r#"42 3.14 "hello" 'c' '\n'"#.to_string();
    let tokens = tokenize(source, Some("test.lang".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].kind, TokenKind::String);
    assert_eq!(tokens[2].value, "hello");
    assert_eq!(tokens[3].kind, TokenKind::Char);
    assert_eq!(tokens[3].value, "c");
    assert_eq!(tokens[4].kind, TokenKind::Char);
    assert_eq!(tokens[4].value, "\n");
}

#[test]
fn test_tokenize_string_escapes() {
    let source = r#""hello\nworld" "tab\there" "backslash\\" "hex\x41" "quote\"test""#.to_string();
    let tokens = tokenize(source, Some("test.lang".to_string())).unwrap();

    assert_eq!(tokens[0].value, "hello\nworld");
    assert_eq!(tokens[1].value, "tab\there");
    assert_eq!(tokens[2].value, "backslash\\");
    assert_eq!(tokens[3].value, "hexA");
    assert_eq!(tokens[4].value, "quote\"test");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_assignment_operators() {
    let source = "= += -= *= /= %= ++ --".to_string();
    let tokens = tokenize(source, Some("test.lang".to_string())).unwrap();

    let expected = [
        SubKind::Assign,
        SubKind::AddAssign,
        SubKind::SubAssign,
        SubKind::MulAssign,
        SubKind::DivAssign,
        SubKind::ModAssign,
        SubKind::Increment,
        SubKind::Decrement,
    ];

    for (token, sub_kind) in tokens.iter().zip(expected) {
        assert_eq!(token.kind, TokenKind::AssignmentOperator);
        assert_eq!(token.sub_kind, Some(sub_kind));
    }
}

#[test]
fn test_tokenize_operators() {
    let source = "+ - * / % == != < > <= >= && || ! & | ^ << >>".to_string();
    let tokens = tokenize(source, Some("test.lang".to_string())).unwrap();

    let expected = [
        (TokenKind::ArithmeticOperator, SubKind::Add),
        (TokenKind::ArithmeticOperator, SubKind::Sub),
        (TokenKind::ArithmeticOperator, SubKind::Mul),
        (TokenKind::ArithmeticOperator, SubKind::Div),
        (TokenKind::ArithmeticOperator, SubKind::Mod),
        (TokenKind::RelationalOperator, SubKind::Equals),
        (TokenKind::RelationalOperator, SubKind::NotEquals),
        (TokenKind::RelationalOperator, SubKind::Less),
        (TokenKind::RelationalOperator, SubKind::Greater),
        (TokenKind::RelationalOperator, SubKind::LessEquals),
        (TokenKind::RelationalOperator, SubKind::GreaterEquals),
        (TokenKind::LogicalOperator, SubKind::And),
        (TokenKind::LogicalOperator, SubKind::Or),
        (TokenKind::LogicalOperator, SubKind::Not),
        (TokenKind::BitwiseOperator, SubKind::BitAnd),
        (TokenKind::BitwiseOperator, SubKind::BitOr),
        (TokenKind::BitwiseOperator, SubKind::BitXor),
        (TokenKind::BitwiseOperator, SubKind::ShiftLeft),
        (TokenKind::BitwiseOperator, SubKind::ShiftRight),
    ];

    assert_eq!(tokens.len(), expected.len() + 1);
    for (token, (kind, sub_kind)) in tokens.iter().zip(expected) {
        assert_eq!((token.kind, token.sub_kind), (kind, Some(sub_kind)), "{}", token.value);
    }
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds("( ) { } [ ] . .. , ; :"),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
            TokenKind::Dot,
            TokenKind::DotDot,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::Colon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_pointer_markers() {
    let source = "**int".to_string();
    let tokens = tokenize(source, Some("test.lang".to_string())).unwrap();

    assert!(tokens[0].is_pointer_marker());
    assert!(tokens[1].is_pointer_marker());
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
}

#[test]
fn test_tokenize_comments() {
    let source = "x = 5; // this is a comment\ny = 10;".to_string();
    let tokens = tokenize(source, Some("test.lang".to_string())).unwrap();

    let values: Vec<&str> = tokens.iter().map(|token| token.value.as_str()).collect();
    assert_eq!(values, vec!["x", "=", "5", ";", "y", "=", "10", ";", "EOF"]);
}

#[test]
fn test_tokenize_tracks_lines_and_columns() {
    let source = "x: int;\n  y = 2;".to_string();
    let tokens = tokenize(source, Some("test.lang".to_string())).unwrap();

    assert_eq!((tokens[0].span.start.line, tokens[0].span.start.column), (1, 1));
    assert_eq!((tokens[2].span.start.line, tokens[2].span.start.column), (1, 4));
    assert_eq!((tokens[2].span.end.line, tokens[2].span.end.column), (1, 7));
    assert_eq!(tokens[4].value, "y");
    assert_eq!((tokens[4].span.start.line, tokens[4].span.start.column), (2, 3));
    assert_eq!(*tokens[4].span.start.file, "test.lang");
}

#[test]
fn test_tokenize_unrecognized_token() {
    let source = "x = @".to_string();
    let result = tokenize(source, Some("test.lang".to_string()));

    let error = result.unwrap_err();
    assert_eq!(error.get_error_name(), "SyntaxError");
    assert_eq!((error.line(), error.column()), (1, 5));
}

#[test]
fn test_lexer_hands_out_error_tokens() {
    let mut lexer = Lexer::new("a # b".to_string(), None);

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    let bad = lexer.next_token();
    assert_eq!(bad.kind, TokenKind::Error);
    assert_eq!(bad.value, "#");
    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    assert_eq!(lexer.next_token().kind, TokenKind::EOF);
    // end of input is sticky
    assert_eq!(lexer.next_token().kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_empty_source() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
    assert_eq!(kinds("   \n\t "), vec![TokenKind::EOF]);
}
