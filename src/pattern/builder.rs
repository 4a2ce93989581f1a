//! Construction layer for the lexer/parser pair
//!
//! Thin assembly helpers: build a lexer over raw input, build a parser
//! over raw input or over an already-configured lexer, and run the whole
//! pipeline through to a diagram. Every component comes out with the
//! default bail listener attached; `with_error_listener` on the component
//! swaps it for a caller-supplied strategy.

use crate::pattern::diagram;
use crate::pattern::lexer::PatternLexer;
use crate::pattern::listener::ParseError;
use crate::pattern::parser::PatternParser;

/// Build a lexer over raw input, default bail listener attached
pub fn lexer(input: &str) -> PatternLexer<'_> {
    PatternLexer::new(input)
}

/// Build a parser over raw input
///
/// The lexer is built internally with the default listener; the parser's
/// own listener is independently defaulted.
pub fn parser(input: &str) -> PatternParser<'_> {
    PatternParser::new(input)
}

/// Build a parser over an already-configured lexer
///
/// Whatever listener discipline the caller applied to the lexer is
/// preserved; the parser's own listener starts as the default.
pub fn parser_from(lexer: PatternLexer<'_>) -> PatternParser<'_> {
    PatternParser::from_lexer(lexer)
}

/// Parse the input with default listeners and render its tree
pub fn diagram(input: &str) -> Result<String, ParseError> {
    let tree = parser(input).parse()?;
    Ok(diagram::render(&tree))
}
