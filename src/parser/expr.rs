//! Expression-level grammar functions.
//!
//! Two tiers only: `expression` handles the additive AND relational
//! operators in one flat level, `term` handles `*` and `/`. The flat tier is
//! a property of the grammar being recognized, not an oversight; collapsing
//! or splitting it would change which inputs are accepted.

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::stmt::parse_call,
};

use super::parser::Parser;

/// expression := term ( ("+"|"-"|"=="|"!="|"<"|">"|"<="|">=") term )*
pub fn parse_expr(parser: &mut Parser) -> Result<(), Error> {
    parse_term(parser)?;

    while matches!(
        parser.current_token_kind(),
        TokenKind::Plus
            | TokenKind::Dash
            | TokenKind::Equals
            | TokenKind::NotEquals
            | TokenKind::Less
            | TokenKind::Greater
            | TokenKind::LessEquals
            | TokenKind::GreaterEquals
    ) {
        parser.advance();
        parse_term(parser)?;
    }

    Ok(())
}

/// term := factor ( ("*"|"/") factor )*
pub fn parse_term(parser: &mut Parser) -> Result<(), Error> {
    parse_factor(parser)?;

    while matches!(
        parser.current_token_kind(),
        TokenKind::Star | TokenKind::Slash
    ) {
        parser.advance();
        parse_factor(parser)?;
    }

    Ok(())
}

/// factor := NUMBER | STRING_LITERAL | "true" | "false"
///         | IDENT [ "(" arguments ")" ] | "(" expression ")"
///
/// An identifier is a call iff the token after it is `(`, the same
/// lookahead rule as in statement position.
pub fn parse_factor(parser: &mut Parser) -> Result<(), Error> {
    match parser.current_token_kind() {
        TokenKind::Number | TokenKind::String | TokenKind::True | TokenKind::False => {
            parser.advance();
            Ok(())
        }
        TokenKind::Identifier => {
            if parser.next_token_kind() == TokenKind::OpenParen {
                parse_call(parser)
            } else {
                parser.advance();
                Ok(())
            }
        }
        TokenKind::OpenParen => {
            parser.advance();
            parse_expr(parser)?;
            parser.expect(TokenKind::CloseParen)
        }
        kind => Err(Error::new(
            ErrorImpl::UnexpectedFactor { found: kind },
            parser.current_token().position,
        )),
    }
}
