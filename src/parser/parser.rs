//! Parser state and entry point.
//!
//! The [`Parser`] owns the token stream and an index into it, nothing else.
//! It offers the two primitives every grammar function is written in terms
//! of: `advance` (unconditional) and `expect` (conditional on the current
//! token's kind, failing fast on a mismatch). The grammar functions
//! themselves live in [`super::stmt`] and [`super::expr`].

use lazy_static::lazy_static;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::stmt::parse_function_decl;

lazy_static! {
    // Defensive only: a lexer-produced stream always ends in a real EOF
    // token, so the sentinel is reachable just from hand-built vectors.
    static ref EOF_SENTINEL: Token = Token::eof(Position { line: 0, column: 0 });
}

pub struct Parser {
    /// The list of tokens to recognize
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, pos: 0 }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&EOF_SENTINEL)
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the kind of the token after the current one, without
    /// consuming anything. This is the single two-token-lookahead point,
    /// used to tell a call apart from an assignment or variable reference.
    pub fn next_token_kind(&self) -> TokenKind {
        self.tokens
            .get(self.pos + 1)
            .map(|token| token.kind)
            .unwrap_or(TokenKind::EOF)
    }

    /// Advances to the next token.
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Expects a token of the specified kind.
    ///
    /// Advances past the current token if it matches, otherwise fails with
    /// an error naming the expected and found kinds at the current token's
    /// position.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<(), Error> {
        let token = self.current_token();
        if token.kind != expected_kind {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    found: token.kind,
                },
                token.position,
            ));
        }

        self.advance();
        Ok(())
    }
}

/// Recognizes a complete program: a list of function declarations followed
/// by the end-of-input marker.
///
/// This is the main entry point for parsing. The first mismatch anywhere
/// aborts the whole parse; there is no recovery or resynchronization.
pub fn parse(tokens: Vec<Token>) -> Result<(), Error> {
    let mut parser = Parser::new(tokens);

    while parser.current_token_kind() != TokenKind::EOF {
        parse_function_decl(&mut parser)?;
    }

    parser.expect(TokenKind::EOF)
}
