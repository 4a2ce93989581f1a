//! Lexer module for the pattern dialect
//!
//! This module contains the tokenization logic for the pattern dialect,
//! including token definitions and the lexer component.

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::{tokenize, tokenize_with_spans, PatternLexer};
pub use tokens::Token;
