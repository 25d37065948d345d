#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod symbol_table;

extern crate regex;

pub use parser::parser::{parse, parse_source};

/// A location in a source file. Lines and columns are 1-based.
#[derive(Debug, Clone)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub file: Rc<String>,
}

impl Position {
    pub fn new(line: u32, column: u32, file: Rc<String>) -> Self {
        Position { line, column, file }
    }

    pub fn null() -> Self {
        Position::new(0, 0, Rc::new(String::from("<null>")))
    }
}

impl PartialEq for Position {
    // Same spot in the same file, regardless of which Rc holds the name
    fn eq(&self, other: &Self) -> bool {
        self.line == other.line && self.column == other.column && *self.file == *other.file
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Span { start, end }
    }

    pub fn null() -> Self {
        Span::new(Position::null(), Position::null())
    }
}

pub fn get_line_at_position(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source.lines().nth((line - 1) as usize)
}

pub fn render_error(error: &Error, source: &str) -> String {
    /*
        Error: SyntaxError (expected Semicolon, got end of input)
        -> main.lang
           |
        20 | x: int = 1
           |           ^
    */

    let position = error.get_position();
    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}:{}:{}\n", position.file, position.line, position.column));
    out.push_str(&format!("{:>padding$}\n", "|"));

    if let Some(line_text) = get_line_at_position(source, position.line) {
        let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
        out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

        let arrows = (position.column as usize).saturating_sub(removed_whitespace).max(1);
        out.push_str(&format!("{:>padding$} {:>arrows$}\n", "|", "^"));
    }

    out
}

pub fn display_error(error: &Error, source: &str) {
    eprint!("{}", render_error(error, source));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        Position,
    };

    #[test]
    fn test_get_line_at_position() {
        let source = "import \"io\";\n\nmain: = func() {\n    x = 1;\n};\n";

        assert_eq!(super::get_line_at_position(source, 1), Some("import \"io\";"));
        assert_eq!(super::get_line_at_position(source, 4), Some("    x = 1;"));
        assert_eq!(super::get_line_at_position(source, 0), None);
        assert_eq!(super::get_line_at_position(source, 40), None);
    }

    #[test]
    fn test_render_error_points_at_column() {
        let source = "main: = func() {\n    x = ;\n};";
        let error = Error::new(
            ErrorImpl::SyntaxError {
                expected: String::from("an expression"),
                got: String::from("Semicolon `;`"),
            },
            Position::new(2, 9, Rc::new(String::from("main.lang"))),
        );

        let rendered = super::render_error(&error, source);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Error: SyntaxError (expected an expression, got Semicolon `;`)");
        assert_eq!(lines[1], "-> main.lang:2:9");
        assert_eq!(lines[3], "2 | x = ;");
        // four columns of indentation were stripped, so the caret lands under `;`
        assert_eq!(lines[4], "  |     ^");
    }
}
