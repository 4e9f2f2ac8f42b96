use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type PatternHandler = fn(&mut Lexer, &str);

pub struct RegexPattern {
    regex: Regex,
    handler: PatternHandler,
}

lazy_static! {
    /// The ordered pattern table. Scanning takes the FIRST entry matching at
    /// the cursor, so the order is load-bearing: comments before whitespace
    /// before everything else, every two-character operator before the
    /// one-character operator that is its prefix, `/` after the comment
    /// patterns, and the identifier pattern last since it is the most
    /// permissive.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"(?s)^/\*.*?\*/").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^//[^\n]*").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals) },
        RegexPattern { regex: Regex::new("^!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals) },
        RegexPattern { regex: Regex::new("^<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEquals) },
        RegexPattern { regex: Regex::new("^>=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals) },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment) },
        RegexPattern { regex: Regex::new("^<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less) },
        RegexPattern { regex: Regex::new("^>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater) },
        RegexPattern { regex: Regex::new(r"^\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus) },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash) },
        RegexPattern { regex: Regex::new(r"^\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star) },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash) },
        RegexPattern { regex: Regex::new(r"^\d+(\.\d*)?").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Number) },
        RegexPattern { regex: Regex::new(r#"(?s)^"(\\.|[^"\\])*""#).unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::String) },
        RegexPattern { regex: Regex::new(r"^\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen) },
        RegexPattern { regex: Regex::new(r"^\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen) },
        RegexPattern { regex: Regex::new(r"^\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly) },
        RegexPattern { regex: Regex::new(r"^\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly) },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon) },
        RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma) },
        RegexPattern { regex: Regex::new("^:").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon) },
        RegexPattern { regex: Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    line: u32,
    column: u32,
}

impl Lexer {
    pub fn new(source: String) -> Lexer {
        let start = Position::start();
        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            line: start.line,
            column: start.column,
        }
    }

    /// The position of the next unconsumed character.
    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }

    /// Moves the cursor past `lexeme`, updating the line/column counters for
    /// every character consumed. Newlines inside block comments and string
    /// literals go through the same rule as everything else.
    pub fn advance_over(&mut self, lexeme: &str) {
        for ch in lexeme.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.pos += lexeme.len();
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or('\0')
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn skip_handler(lexer: &mut Lexer, lexeme: &str) {
    lexer.advance_over(lexeme);
}

fn symbol_handler(lexer: &mut Lexer, lexeme: &str) {
    let position = lexer.position();

    if let Some(kind) = RESERVED_LOOKUP.get(lexeme) {
        lexer.push(MK_TOKEN!(*kind, String::from(lexeme), position));
    } else {
        lexer.push(MK_TOKEN!(TokenKind::Identifier, String::from(lexeme), position));
    }

    lexer.advance_over(lexeme);
}

pub fn tokenize(source: String) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        let mut matched = false;

        for pattern in PATTERNS.iter() {
            if let Some(found) = pattern.regex.find(lex.remainder()) {
                let lexeme = found.as_str().to_string();
                (pattern.handler)(&mut lex, &lexeme);
                matched = true;
                break;
            }
        }

        if !matched {
            return Err(Error::new(
                ErrorImpl::UnrecognisedCharacter { character: lex.at() },
                lex.position(),
            ));
        }
    }

    let position = lex.position();
    lex.push(Token::eof(position));
    Ok(lex.tokens)
}
