#![allow(clippy::module_inception)]

use std::{
    fmt::{self, Display, Write},
    path::Path,
};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// 1-based line and column of the first character of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn start() -> Self {
        Position { line: 1, column: 1 }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::start()
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Returns the text of the 1-based `line` of `source`, without its line break.
pub fn get_line_at_position(source: &str, line: u32) -> Option<&str> {
    source
        .lines()
        .nth(line.saturating_sub(1) as usize)
}

/// Renders a diagnostic against the source it was found in.
///
/// ```text
/// Error: UnexpectedToken (Insert `=` here)
/// -> input.mk:1:7
///   |
/// 1 | let x 5;
///   | ------^
/// expected next token to be =, got INT instead
/// ```
pub fn render_error(error: &Error, source: &str, name: &str) -> String {
    let position = error.get_position();
    let mut out = String::new();

    // Writing into a String cannot fail
    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(out, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    let _ = writeln!(out, "-> {}:{}", name, position);

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;
    let _ = writeln!(out, "{:>padding$}", "|");

    let line_text = get_line_at_position(source, position.line).unwrap_or("");
    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    let _ = writeln!(out, "{} | {}", line_string, line_text_removed.trim_end());

    let arrows = (position.column as usize)
        .saturating_sub(removed_whitespace)
        .max(1);
    let _ = writeln!(out, "{:>padding$} {:->arrows$}", "|", "^");
    let _ = writeln!(out, "{}", error);

    out
}

/// Name shown for a source file in rendered diagnostics: the final path
/// component, or the path itself when it has none.
pub fn source_name(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start_matches([' ', '\t']);
    // Columns count characters, so count the removed ones
    let removed = string[..string.len() - trimmed.len()].chars().count();

    (trimmed, removed)
}
