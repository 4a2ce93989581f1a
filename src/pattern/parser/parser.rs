//! Parser component for the pattern dialect
//!
//! A hand-driven descent over the token stream. Grammar, top to bottom:
//!
//!   pattern     : alternation EOF
//!   alternation : expr ('|' expr)*
//!   expr        : element*
//!   element     : atom quantifier?
//!   quantifier  : ('*' | '+' | '?' | range) '?'?
//!   atom        : capture | class | '.' | escape | literal
//!   capture     : '(' alternation ')'
//!
//! Every syntactic error goes through the parser's listener; `Abort`
//! unwinds with the reported error, `Recover` skips the offending token
//! and resumes at the expr level, producing a best-effort tree.

use logos::Span;

use crate::pattern::lexer::{PatternLexer, Token};
use crate::pattern::listener::{BailListener, ErrorDisposition, ErrorListener, ParseError};
use crate::pattern::parser::tree::{NodeKind, ParseTree};

/// Parser component over one token stream
///
/// Holds the lexer it draws tokens from (with whatever listener the caller
/// attached to it) plus its own independent listener slot for syntactic
/// errors. Construction never fails; all failures surface from
/// [`PatternParser::parse`].
pub struct PatternParser<'s> {
    lexer: PatternLexer<'s>,
    listener: Box<dyn ErrorListener>,
}

impl<'s> PatternParser<'s> {
    /// Build a parser over raw input, lexer configured with the default
    /// bail listener
    pub fn new(source: &'s str) -> Self {
        Self::from_lexer(PatternLexer::new(source))
    }

    /// Wrap an already-configured lexer, preserving its listener
    ///
    /// The parser's own listener is independently set to the default.
    pub fn from_lexer(lexer: PatternLexer<'s>) -> Self {
        Self {
            lexer,
            listener: Box::new(BailListener),
        }
    }

    /// Replace the parser's listener; the previous one is dropped
    pub fn with_error_listener(mut self, listener: impl ErrorListener + 'static) -> Self {
        self.listener = Box::new(listener);
        self
    }

    /// Lex and parse the input into a tree
    ///
    /// Lexical errors are routed through the lexer's listener, syntactic
    /// errors through the parser's.
    pub fn parse(mut self) -> Result<ParseTree, ParseError> {
        let source = self.lexer.source();
        let tokens = self.lexer.tokens()?;
        let mut cursor = Cursor {
            source,
            tokens,
            pos: 0,
            listener: &mut *self.listener,
        };
        cursor.parse_pattern()
    }
}

/// Traversal state over the lexed token stream
struct Cursor<'a> {
    source: &'a str,
    tokens: Vec<(Token, Span)>,
    pos: usize,
    listener: &'a mut dyn ErrorListener,
}

impl Cursor<'_> {
    fn parse_pattern(&mut self) -> Result<ParseTree, ParseError> {
        let alternation = self.parse_alternation()?;

        // Anything left over is a stray token, e.g. an unbalanced ')'
        while self.peek().is_some() {
            let message = format!("unexpected '{}'", self.current_text());
            self.report(message)?;
            self.pos += 1;
        }

        Ok(ParseTree::node(NodeKind::Pattern, vec![alternation]))
    }

    fn parse_alternation(&mut self) -> Result<ParseTree, ParseError> {
        let mut children = vec![self.parse_expr()?];
        while matches!(self.peek(), Some(Token::Pipe)) {
            children.push(self.take_leaf());
            children.push(self.parse_expr()?);
        }
        Ok(ParseTree::node(NodeKind::Alternation, children))
    }

    fn parse_expr(&mut self) -> Result<ParseTree, ParseError> {
        let mut children = Vec::new();
        while let Some(token) = self.peek() {
            if matches!(token, Token::Pipe | Token::CloseParen) {
                break;
            }
            if let Some(element) = self.parse_element()? {
                children.push(element);
            }
        }
        Ok(ParseTree::node(NodeKind::Expr, children))
    }

    fn parse_element(&mut self) -> Result<Option<ParseTree>, ParseError> {
        let Some(atom) = self.parse_atom()? else {
            return Ok(None);
        };

        let mut children = vec![atom];
        if self.peek().map_or(false, Token::is_quantifier_start) {
            children.push(self.parse_quantifier());
        }
        Ok(Some(ParseTree::node(NodeKind::Element, children)))
    }

    fn parse_quantifier(&mut self) -> ParseTree {
        let mut children = vec![self.take_leaf()];
        // A trailing '?' makes the quantifier lazy
        if matches!(self.peek(), Some(Token::Question)) {
            children.push(self.take_leaf());
        }
        ParseTree::node(NodeKind::Quantifier, children)
    }

    fn parse_atom(&mut self) -> Result<Option<ParseTree>, ParseError> {
        match self.peek() {
            Some(Token::OpenParen) => self.parse_capture(),
            Some(token) if token.is_atom_start() => Ok(Some(self.take_leaf())),
            Some(_) => {
                // Only quantifier tokens reach this arm; the expr loop
                // already filtered '|' and ')'
                let message = format!("'{}' has nothing to repeat", self.current_text());
                self.report(message)?;
                self.pos += 1;
                Ok(None)
            }
            None => Ok(None),
        }
    }

    fn parse_capture(&mut self) -> Result<Option<ParseTree>, ParseError> {
        let mut children = vec![self.take_leaf()];
        children.push(self.parse_alternation()?);

        // The alternation stops only at ')' or at the end of input
        if matches!(self.peek(), Some(Token::CloseParen)) {
            children.push(self.take_leaf());
        } else {
            self.report("unclosed group, expected ')'".to_string())?;
        }
        Ok(Some(ParseTree::node(NodeKind::Capture, children)))
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(token, _)| token)
    }

    /// Consume the current token as a leaf carrying its matched text
    fn take_leaf(&mut self) -> ParseTree {
        let (_, span) = &self.tokens[self.pos];
        let text = &self.source[span.clone()];
        self.pos += 1;
        ParseTree::leaf(text)
    }

    fn current_span(&self) -> Span {
        self.tokens
            .get(self.pos)
            .map(|(_, span)| span.clone())
            .unwrap_or(self.source.len()..self.source.len())
    }

    fn current_text(&self) -> &str {
        &self.source[self.current_span()]
    }

    /// Report a syntactic error at the current position; `Err` on abort
    fn report(&mut self, message: String) -> Result<(), ParseError> {
        let span = self.current_span();
        let error = ParseError::syntax(span.clone(), &self.source[span], message);
        match self.listener.on_syntax_error(&error) {
            ErrorDisposition::Abort => Err(error),
            ErrorDisposition::Recover => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::listener::{CollectingListener, ErrorKind};
    use crate::pattern::parser::tree::NodeKind::*;

    fn node(kind: NodeKind, children: Vec<ParseTree>) -> ParseTree {
        ParseTree::node(kind, children)
    }

    fn leaf(text: &str) -> ParseTree {
        ParseTree::leaf(text)
    }

    #[test]
    fn test_single_literal() {
        let tree = PatternParser::new("a").parse().unwrap();
        assert_eq!(
            tree,
            node(
                Pattern,
                vec![node(
                    Alternation,
                    vec![node(Expr, vec![node(Element, vec![leaf("a")])])]
                )]
            )
        );
    }

    #[test]
    fn test_alternation_keeps_pipe_terminals() {
        let tree = PatternParser::new("a|b").parse().unwrap();
        assert_eq!(
            tree,
            node(
                Pattern,
                vec![node(
                    Alternation,
                    vec![
                        node(Expr, vec![node(Element, vec![leaf("a")])]),
                        leaf("|"),
                        node(Expr, vec![node(Element, vec![leaf("b")])]),
                    ]
                )]
            )
        );
    }

    #[test]
    fn test_capture_keeps_paren_terminals() {
        let tree = PatternParser::new("(a)").parse().unwrap();
        let capture = node(
            Capture,
            vec![
                leaf("("),
                node(
                    Alternation,
                    vec![node(Expr, vec![node(Element, vec![leaf("a")])])],
                ),
                leaf(")"),
            ],
        );
        assert_eq!(
            tree,
            node(
                Pattern,
                vec![node(
                    Alternation,
                    vec![node(Expr, vec![node(Element, vec![capture])])]
                )]
            )
        );
    }

    #[test]
    fn test_quantified_element() {
        let tree = PatternParser::new("a{2,3}").parse().unwrap();
        let element = node(
            Element,
            vec![leaf("a"), node(Quantifier, vec![leaf("{2,3}")])],
        );
        assert_eq!(
            tree,
            node(
                Pattern,
                vec![node(Alternation, vec![node(Expr, vec![element])])]
            )
        );
    }

    #[test]
    fn test_lazy_quantifier() {
        let tree = PatternParser::new("a+?").parse().unwrap();
        let element = node(
            Element,
            vec![leaf("a"), node(Quantifier, vec![leaf("+"), leaf("?")])],
        );
        assert_eq!(
            tree,
            node(
                Pattern,
                vec![node(Alternation, vec![node(Expr, vec![element])])]
            )
        );
    }

    #[test]
    fn test_empty_pattern_parses() {
        let tree = PatternParser::new("").parse().unwrap();
        assert_eq!(
            tree,
            node(Pattern, vec![node(Alternation, vec![node(Expr, vec![])])])
        );
    }

    #[test]
    fn test_empty_alternative_parses() {
        // "a|" is a valid alternation with an empty right-hand side
        let tree = PatternParser::new("a|").parse().unwrap();
        assert_eq!(
            tree,
            node(
                Pattern,
                vec![node(
                    Alternation,
                    vec![
                        node(Expr, vec![node(Element, vec![leaf("a")])]),
                        leaf("|"),
                        node(Expr, vec![]),
                    ]
                )]
            )
        );
    }

    #[test]
    fn test_unclosed_group_bails() {
        let error = PatternParser::new("(ab").parse().unwrap_err();
        assert_eq!(error.kind, ErrorKind::Syntax);
        assert!(error.message.contains("unclosed group"));
    }

    #[test]
    fn test_dangling_quantifier_bails() {
        let error = PatternParser::new("*a").parse().unwrap_err();
        assert_eq!(error.kind, ErrorKind::Syntax);
        assert!(error.message.contains("nothing to repeat"));
    }

    #[test]
    fn test_stray_close_paren_bails() {
        let error = PatternParser::new("a)").parse().unwrap_err();
        assert_eq!(error.kind, ErrorKind::Syntax);
        assert_eq!(error.text, ")");
    }

    #[test]
    fn test_recovery_skips_offending_tokens() {
        let listener = CollectingListener::new();
        let errors = listener.errors();

        let tree = PatternParser::new("*a")
            .with_error_listener(listener)
            .parse()
            .unwrap();

        assert_eq!(errors.borrow().len(), 1);
        assert_eq!(
            tree,
            node(
                Pattern,
                vec![node(
                    Alternation,
                    vec![node(Expr, vec![node(Element, vec![leaf("a")])])]
                )]
            )
        );
    }

    #[test]
    fn test_from_lexer_preserves_lexer_listener() {
        let listener = CollectingListener::new();
        let errors = listener.errors();

        // '}' alone is a lexical error; the lexer's listener absorbs it
        // while the parser keeps its default bail strategy
        let lexer = PatternLexer::new("a}b").with_error_listener(listener);
        let tree = PatternParser::from_lexer(lexer).parse().unwrap();

        assert_eq!(errors.borrow().len(), 1);
        assert_eq!(errors.borrow()[0].kind, ErrorKind::Lexical);
        assert_eq!(tree.node_count(), 7);
    }
}
