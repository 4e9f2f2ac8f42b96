//! Parser module: a recursive-descent recognizer.
//!
//! This module contains the parser that consumes the token stream produced
//! by the lexer and decides whether it conforms to the grammar. It builds no
//! AST and keeps no partial results; the outcome is acceptance or the first
//! error, with its source position.
//!
//! Each grammar nonterminal maps to one function. Dispatch is driven by the
//! current token's kind alone, with a single two-token-lookahead exception:
//! an identifier starts a call iff the token after it is `(`.

pub mod expr;
pub mod parser;
pub mod stmt;
