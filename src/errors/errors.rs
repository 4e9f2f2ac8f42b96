use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// Whether a failure came from the lexing or the parsing pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lex,
    Syntax,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Lex => write!(f, "lexical"),
            ErrorKind::Syntax => write!(f, "syntax"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorKind::Lex,
            _ => ErrorKind::Syntax,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedReturnType { .. } => "ExpectedReturnType",
            ErrorImpl::ExpectedType { .. } => "ExpectedType",
            ErrorImpl::UnexpectedStatement { .. } => "UnexpectedStatement",
            ErrorImpl::UnexpectedFactor { .. } => "UnexpectedFactor",
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: char },
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },
    #[error("expected a function return type, found {found}")]
    ExpectedReturnType { found: TokenKind },
    #[error("expected a type keyword, found {found}")]
    ExpectedType { found: TokenKind },
    #[error("expected a statement, found {found}")]
    UnexpectedStatement { found: TokenKind },
    #[error("expected a factor, found {found}")]
    UnexpectedFactor { found: TokenKind },
}
