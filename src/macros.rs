//! Utility macros for the analyzer.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a lexer handler for a fixed token kind
//!
//! These macros reduce boilerplate in the lexer's pattern table.

/// Creates a Token instance carrying its matched lexeme.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's lexeme as a String
/// * `$position` - The token's start position
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), position);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $position:expr) => {
        Token {
            kind: $kind,
            value: Some($value),
            position: $position,
        }
    };
}

/// Creates a lexer handler that emits a token of the given kind.
///
/// Generates a handler function that records the current position, pushes a
/// token carrying the matched lexeme, and advances the cursor over it. Used
/// for every pattern whose kind is fixed: operators, delimiters, and the
/// number and string literals.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^\\+").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Plus),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {
        |lexer: &mut Lexer, lexeme: &str| {
            let position = lexer.position();
            lexer.push(MK_TOKEN!($kind, String::from(lexeme), position));
            lexer.advance_over(lexeme);
        }
    };
}
