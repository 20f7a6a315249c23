//! Lexical analysis for Monkey source text.
//!
//! This module contains the lexer that converts source code into a stream
//! of tokens for parsing. It handles:
//!
//! - On-demand scanning, one token per call
//! - Recognition of keywords, identifiers, literals, and operators
//! - Token position tracking for error reporting
//! - Whitespace skipping and illegal-character reporting

pub mod lexer;
pub mod tokens;
