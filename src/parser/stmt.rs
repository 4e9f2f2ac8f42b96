//! Statement-level grammar functions.
//!
//! One function per nonterminal, from function declarations down to the
//! individual statement forms. Every function consumes exactly the tokens
//! of its production and propagates the first mismatch with `?`.

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::expr::parse_expr,
};

use super::parser::Parser;

/// functionDecl := ("int"|"float"|"string"|"bool"|"void") IDENT "(" parameters ")" block
pub fn parse_function_decl(parser: &mut Parser) -> Result<(), Error> {
    let kind = parser.current_token_kind();
    if kind.is_type_keyword() || kind == TokenKind::Void {
        parser.advance();
    } else {
        return Err(Error::new(
            ErrorImpl::ExpectedReturnType { found: kind },
            parser.current_token().position,
        ));
    }

    parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::OpenParen)?;
    parse_parameters(parser)?;
    parser.expect(TokenKind::CloseParen)?;
    parse_block(parser)
}

/// parameters := [ parameter ("," parameter)* ]
pub fn parse_parameters(parser: &mut Parser) -> Result<(), Error> {
    if parser.current_token_kind().is_type_keyword() {
        parse_parameter(parser)?;
        while parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
            parse_parameter(parser)?;
        }
    }

    Ok(())
}

/// parameter := ("int"|"float"|"string"|"bool") IDENT
pub fn parse_parameter(parser: &mut Parser) -> Result<(), Error> {
    let kind = parser.current_token_kind();
    if !kind.is_type_keyword() {
        return Err(Error::new(
            ErrorImpl::ExpectedType { found: kind },
            parser.current_token().position,
        ));
    }

    parser.advance();
    parser.expect(TokenKind::Identifier)
}

/// block := "{" statement* "}"
///
/// A trailing semicolon after any statement is consumed if present, never
/// required.
pub fn parse_block(parser: &mut Parser) -> Result<(), Error> {
    parser.expect(TokenKind::OpenCurly)?;

    while parser.current_token_kind() != TokenKind::CloseCurly
        && parser.current_token_kind() != TokenKind::EOF
    {
        parse_stmt(parser)?;
        if parser.current_token_kind() == TokenKind::Semicolon {
            parser.advance();
        }
    }

    parser.expect(TokenKind::CloseCurly)
}

/// Dispatches to the statement form selected by the current token kind.
///
/// An identifier is ambiguous between a call and an assignment; it is a
/// call iff the token after it is `(`.
pub fn parse_stmt(parser: &mut Parser) -> Result<(), Error> {
    let kind = parser.current_token_kind();

    if kind.is_type_keyword() || kind == TokenKind::Void {
        return parse_declaration(parser);
    }

    match kind {
        TokenKind::Identifier => {
            if parser.next_token_kind() == TokenKind::OpenParen {
                parse_call(parser)
            } else {
                parse_assignment(parser)
            }
        }
        TokenKind::If => parse_if_stmt(parser),
        TokenKind::While => parse_while_stmt(parser),
        TokenKind::For => parse_for_stmt(parser),
        TokenKind::Return => parse_return_stmt(parser),
        _ => Err(Error::new(
            ErrorImpl::UnexpectedStatement { found: kind },
            parser.current_token().position,
        )),
    }
}

/// call := IDENT "(" arguments ")"
pub fn parse_call(parser: &mut Parser) -> Result<(), Error> {
    parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::OpenParen)?;
    parse_arguments(parser)?;
    parser.expect(TokenKind::CloseParen)
}

/// arguments := [ expression ("," expression)* ]
pub fn parse_arguments(parser: &mut Parser) -> Result<(), Error> {
    if parser.current_token_kind() != TokenKind::CloseParen {
        parse_expr(parser)?;
        while parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
            parse_expr(parser)?;
        }
    }

    Ok(())
}

/// declaration := typeKeyword IDENT [ "=" expression ]
pub fn parse_declaration(parser: &mut Parser) -> Result<(), Error> {
    parser.advance();
    parser.expect(TokenKind::Identifier)?;

    if parser.current_token_kind() == TokenKind::Assignment {
        parser.advance();
        parse_expr(parser)?;
    }

    Ok(())
}

/// assignment := IDENT "=" expression
pub fn parse_assignment(parser: &mut Parser) -> Result<(), Error> {
    parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::Assignment)?;
    parse_expr(parser)
}

/// ifStmt := "if" "(" expression ")" block [ "else" block ]
pub fn parse_if_stmt(parser: &mut Parser) -> Result<(), Error> {
    parser.expect(TokenKind::If)?;
    parser.expect(TokenKind::OpenParen)?;
    parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;
    parse_block(parser)?;

    if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        parse_block(parser)?;
    }

    Ok(())
}

/// whileStmt := "while" "(" expression ")" block
pub fn parse_while_stmt(parser: &mut Parser) -> Result<(), Error> {
    parser.expect(TokenKind::While)?;
    parser.expect(TokenKind::OpenParen)?;
    parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;
    parse_block(parser)
}

/// forStmt := "for" "(" (declaration|assignment)? ";" expression ";" assignment ")" block
///
/// The update clause only accepts a full assignment; increment forms are
/// not part of the grammar.
pub fn parse_for_stmt(parser: &mut Parser) -> Result<(), Error> {
    parser.expect(TokenKind::For)?;
    parser.expect(TokenKind::OpenParen)?;

    if parser.current_token_kind().is_type_keyword() {
        parse_declaration(parser)?;
    } else if parser.current_token_kind() == TokenKind::Identifier {
        parse_assignment(parser)?;
    }

    parser.expect(TokenKind::Semicolon)?;
    parse_expr(parser)?;
    parser.expect(TokenKind::Semicolon)?;
    parse_assignment(parser)?;
    parser.expect(TokenKind::CloseParen)?;
    parse_block(parser)
}

/// returnStmt := "return" [ expression ]
///
/// The expression is parsed whenever the next token is not a semicolon,
/// so a bare `return` is only valid directly before `;`.
pub fn parse_return_stmt(parser: &mut Parser) -> Result<(), Error> {
    parser.expect(TokenKind::Return)?;

    if parser.current_token_kind() != TokenKind::Semicolon {
        parse_expr(parser)?;
    }

    Ok(())
}
