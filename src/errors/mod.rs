//! Error types and error handling for the analyzer.
//!
//! This module defines the error types used by both analysis passes:
//!
//! - Error structures with source position information
//! - The lexical error variant (no pattern matches at the cursor)
//! - The syntactic error variants (token mismatch, dispatch dead ends)
//! - Error kind classification and display formatting
//!
//! Both error kinds are terminal: raised once, propagated to the caller,
//! never recovered from.

pub mod errors;

#[cfg(test)]
mod tests;
