#![allow(clippy::module_inception)]

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

use crate::errors::errors::Error;

/// A 1-based line/column position in the analyzed source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// The position of the first character of any source text.
    pub fn start() -> Self {
        Position { line: 1, column: 1 }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Returns the requested 1-based line of `source`, if it exists.
pub fn line_at(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }
    source.lines().nth((line - 1) as usize)
}

pub fn display_error(error: &Error, source: &str, file: &str) {
    /*
        Error: UnexpectedToken (expected CloseCurly, found EOF)
        -> prog.mc
           |
         1 | int main(){
           | ----------^
    */

    let position = error.get_position();

    println!("Error: {} ({})", error.get_error_name(), error);
    println!("-> {}", file);

    let Some(line_text) = line_at(source, position.line) else {
        // EOF past the last line, nothing to underline
        println!("at {}", position);
        return;
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    println!("{} | {}", line_string, line_text_removed.trim_end());

    let column = position.column as usize;
    let arrows = if column > removed_whitespace {
        column - removed_whitespace
    } else {
        1
    };

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
