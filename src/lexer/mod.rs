//! Lexical analysis module for the analyzer.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using an ordered regex pattern table
//! - Recognition of keywords, identifiers, literals, and operators
//! - Line/column position tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;
