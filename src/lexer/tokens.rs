use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("for", TokenKind::For);
        map.insert("int", TokenKind::Int);
        map.insert("float", TokenKind::Float);
        map.insert("string", TokenKind::StringType);
        map.insert("bool", TokenKind::Bool);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("return", TokenKind::Return);
        map.insert("void", TokenKind::Void);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    String,
    Identifier,

    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Semicolon,
    Colon,
    Comma,

    Plus,
    Dash,
    Slash,
    Star,

    // Reserved
    If,
    Else,
    While,
    For,
    Int,
    Float,
    StringType,
    Bool,
    True,
    False,
    Return,
    Void,
}

impl TokenKind {
    /// A type keyword usable for parameters, for-loop initializers and
    /// variable declarations. `void` is excluded; it is only valid as a
    /// function return type.
    pub fn is_type_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Int | TokenKind::Float | TokenKind::StringType | TokenKind::Bool
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    /// The raw matched lexeme; `None` only for the EOF marker.
    pub value: Option<String>,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "Token({}, {:?}, {})", self.kind, value, self.position),
            None => write!(f, "Token({}, {})", self.kind, self.position),
        }
    }
}

impl Token {
    pub fn eof(position: Position) -> Token {
        Token {
            kind: TokenKind::EOF,
            value: None,
            position,
        }
    }
}
