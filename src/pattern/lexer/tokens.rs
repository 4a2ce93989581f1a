//! Token definitions for the pattern dialect
//!
//! This module defines all the tokens that can be produced by the pattern
//! lexer. The tokens are defined using the logos derive macro for efficient
//! tokenization. Tokens carry no text; callers pair them with their spans
//! and slice the source when the matched text is needed.

use logos::Logos;
use serde::Serialize;

/// All possible tokens in the pattern dialect
#[derive(Logos, Debug, PartialEq, Eq, Clone, Serialize)]
pub enum Token {
    // Alternation
    #[token("|")]
    Pipe,

    // Quantifiers
    #[token("*")]
    Star,
    #[token("+")]
    Plus,
    #[token("?")]
    Question,

    // Bounded repetition: {n}, {n,} or {n,m}
    #[regex(r"\{[0-9]+(,[0-9]*)?\}")]
    Range,

    // Grouping
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,

    // A whole bracket expression, optionally negated, with escapes allowed
    // inside: [abc], [^x-z], [\]\\]
    #[regex(r"\[\^?([^\]\\]|\\.)*\]")]
    CharacterClass,

    // Any-character wildcard
    #[token(".")]
    Dot,

    // Escaped character
    #[regex(r"\\.")]
    Escape,

    // Any single character that is not a metacharacter
    #[regex(r"[^\\|*+?.(){}\[\]]")]
    Literal,
}

impl Token {
    /// Lower-case tag used by the token formatters
    pub fn name(&self) -> &'static str {
        match self {
            Token::Pipe => "pipe",
            Token::Star => "star",
            Token::Plus => "plus",
            Token::Question => "question",
            Token::Range => "range",
            Token::OpenParen => "open-paren",
            Token::CloseParen => "close-paren",
            Token::CharacterClass => "class",
            Token::Dot => "dot",
            Token::Escape => "escape",
            Token::Literal => "literal",
        }
    }

    /// Check if this token can begin a quantifier
    pub fn is_quantifier_start(&self) -> bool {
        matches!(
            self,
            Token::Star | Token::Plus | Token::Question | Token::Range
        )
    }

    /// Check if this token can begin an atom
    pub fn is_atom_start(&self) -> bool {
        matches!(
            self,
            Token::OpenParen
                | Token::CharacterClass
                | Token::Dot
                | Token::Escape
                | Token::Literal
        )
    }

    /// Check if this token carries interesting matched text of its own
    pub fn has_text(&self) -> bool {
        matches!(
            self,
            Token::Range | Token::CharacterClass | Token::Escape | Token::Literal
        )
    }
}
