//! Unit tests for error handling.
//!
//! This module contains tests for error construction, kind classification,
//! and message formatting.

use crate::errors::errors::{Error, ErrorImpl, ErrorKind};
use crate::lexer::tokens::TokenKind;
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter { character: '$' },
        Position { line: 1, column: 9 },
    );

    assert_eq!(error.get_error_name(), "UnrecognisedCharacter");
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::CloseCurly,
            found: TokenKind::EOF,
        },
        Position {
            line: 3,
            column: 42,
        },
    );

    assert_eq!(error.get_position().line, 3);
    assert_eq!(error.get_position().column, 42);
}

#[test]
fn test_lexical_error_kind() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter { character: '@' },
        Position { line: 1, column: 1 },
    );

    assert_eq!(error.get_kind(), ErrorKind::Lex);
}

#[test]
fn test_syntactic_error_kinds() {
    let syntactic = [
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Semicolon,
            found: TokenKind::CloseCurly,
        },
        ErrorImpl::ExpectedReturnType {
            found: TokenKind::Identifier,
        },
        ErrorImpl::ExpectedType {
            found: TokenKind::Void,
        },
        ErrorImpl::UnexpectedStatement {
            found: TokenKind::Plus,
        },
        ErrorImpl::UnexpectedFactor {
            found: TokenKind::Semicolon,
        },
    ];

    for error_impl in syntactic {
        let error = Error::new(error_impl, Position { line: 1, column: 1 });
        assert_eq!(error.get_kind(), ErrorKind::Syntax);
    }
}

#[test]
fn test_unexpected_token_message() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::CloseCurly,
            found: TokenKind::EOF,
        },
        Position {
            line: 1,
            column: 12,
        },
    );

    assert_eq!(error.to_string(), "expected CloseCurly, found EOF");
}

#[test]
fn test_unrecognised_character_message() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter { character: '$' },
        Position { line: 1, column: 9 },
    );

    assert_eq!(error.to_string(), "unrecognised character: '$'");
}

#[test]
fn test_error_kind_display() {
    assert_eq!(ErrorKind::Lex.to_string(), "lexical");
    assert_eq!(ErrorKind::Syntax.to_string(), "syntax");
}

#[test]
fn test_position_display() {
    let position = Position { line: 2, column: 7 };
    assert_eq!(position.to_string(), "line 2, column 7");
}
