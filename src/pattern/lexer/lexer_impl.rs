//! Implementation of the pattern lexer
//!
//! Tokenization itself is handled entirely by logos; this module wraps it
//! in a component that owns the raw input plus a single error-listener
//! slot, and routes every unmatched character through that listener.

use logos::{Logos, Span};

use crate::pattern::lexer::tokens::Token;
use crate::pattern::listener::{BailListener, ErrorDisposition, ErrorListener, ParseError};

/// Lexer component over one raw input
///
/// Carries exactly one error listener; the default bails on the first
/// unmatched character. [`PatternLexer::with_error_listener`] replaces the
/// slot, so the last attached listener is the only active one.
pub struct PatternLexer<'s> {
    source: &'s str,
    listener: Box<dyn ErrorListener>,
}

impl<'s> PatternLexer<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            listener: Box::new(BailListener),
        }
    }

    /// Replace the attached listener; the previous one is dropped
    pub fn with_error_listener(mut self, listener: impl ErrorListener + 'static) -> Self {
        self.listener = Box::new(listener);
        self
    }

    pub fn source(&self) -> &'s str {
        self.source
    }

    /// Run the lexer over the whole input
    ///
    /// Every character no token rule matches is reported to the listener.
    /// An `Abort` disposition unwinds with the reported error; `Recover`
    /// skips the character and keeps lexing.
    pub fn tokens(&mut self) -> Result<Vec<(Token, Span)>, ParseError> {
        let mut lexer = Token::lexer(self.source);
        let mut tokens = Vec::new();

        while let Some(result) = lexer.next() {
            match result {
                Ok(token) => tokens.push((token, lexer.span())),
                Err(()) => {
                    let error = ParseError::lexical(lexer.span(), lexer.slice());
                    match self.listener.on_lexical_error(&error) {
                        ErrorDisposition::Abort => return Err(error),
                        ErrorDisposition::Recover => {}
                    }
                }
            }
        }

        Ok(tokens)
    }
}

/// Convenience function to tokenize a string and collect all tokens
///
/// Unmatched characters are silently skipped; use [`PatternLexer`] when
/// lexical errors matter.
pub fn tokenize(source: &str) -> Vec<Token> {
    Token::lexer(source)
        .filter_map(|result| result.ok())
        .collect()
}

/// Convenience function to tokenize a string and collect tokens with their spans
pub fn tokenize_with_spans(source: &str) -> Vec<(Token, Span)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tokens
}
