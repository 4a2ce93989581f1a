//! Error listeners for the lexer/parser pair
//!
//! Lexical and syntactic errors are never returned directly by the
//! components that detect them; they are reported to whichever listener is
//! attached at that moment, and the listener's disposition decides whether
//! the parse aborts or recovers. Each component holds exactly one listener
//! at a time; attaching a new one replaces the old.

use std::cell::RefCell;
use std::fmt;
use std::ops::Range;
use std::rc::Rc;

/// Classifies a reported error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No token rule matched the input at this point
    Lexical,
    /// The token sequence did not match any production
    Syntax,
}

/// A lexical or syntactic error with enough context to report or abort
#[derive(Debug, Clone)]
pub struct ParseError {
    pub kind: ErrorKind,
    /// Byte range of the offending input
    pub span: Range<usize>,
    /// The offending text itself
    pub text: String,
    pub message: String,
}

impl ParseError {
    pub fn lexical(span: Range<usize>, text: &str) -> Self {
        Self {
            kind: ErrorKind::Lexical,
            span,
            text: text.to_string(),
            message: format!("no token rule matches '{}'", text),
        }
    }

    pub fn syntax(span: Range<usize>, text: &str, message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Syntax,
            span,
            text: text.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            ErrorKind::Lexical => "lexical",
            ErrorKind::Syntax => "syntax",
        };
        write!(
            f,
            "{} error at {}..{}: {}",
            kind, self.span.start, self.span.end, self.message
        )
    }
}

impl std::error::Error for ParseError {}

/// What a listener wants the reporting component to do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorDisposition {
    /// Unwind the in-progress lex/parse with an error
    Abort,
    /// Skip past the offending input and keep going
    Recover,
}

/// Capability notified of lexical and syntactic errors during a parse
pub trait ErrorListener {
    fn on_lexical_error(&mut self, error: &ParseError) -> ErrorDisposition;
    fn on_syntax_error(&mut self, error: &ParseError) -> ErrorDisposition;
}

/// Default strategy: fail fast on the first error of either kind
#[derive(Debug, Default, Clone, Copy)]
pub struct BailListener;

impl ErrorListener for BailListener {
    fn on_lexical_error(&mut self, _error: &ParseError) -> ErrorDisposition {
        ErrorDisposition::Abort
    }

    fn on_syntax_error(&mut self, _error: &ParseError) -> ErrorDisposition {
        ErrorDisposition::Abort
    }
}

/// Records every reported error and lets the parse continue
///
/// The error sink is shared: keep a handle from [`CollectingListener::errors`]
/// to read the collected errors after the component has consumed the
/// listener itself.
#[derive(Debug, Default, Clone)]
pub struct CollectingListener {
    errors: Rc<RefCell<Vec<ParseError>>>,
}

impl CollectingListener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the collected errors
    pub fn errors(&self) -> Rc<RefCell<Vec<ParseError>>> {
        Rc::clone(&self.errors)
    }
}

impl ErrorListener for CollectingListener {
    fn on_lexical_error(&mut self, error: &ParseError) -> ErrorDisposition {
        self.errors.borrow_mut().push(error.clone());
        ErrorDisposition::Recover
    }

    fn on_syntax_error(&mut self, error: &ParseError) -> ErrorDisposition {
        self.errors.borrow_mut().push(error.clone());
        ErrorDisposition::Recover
    }
}

/// Discards every reported error and lets the parse continue
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentListener;

impl ErrorListener for SilentListener {
    fn on_lexical_error(&mut self, _error: &ParseError) -> ErrorDisposition {
        ErrorDisposition::Recover
    }

    fn on_syntax_error(&mut self, _error: &ParseError) -> ErrorDisposition {
        ErrorDisposition::Recover
    }
}
