//! Parser state and token stream management

use crate::frontend::lexer::tokens::*;
use crate::util::span::Span;

/// Parse error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// Expected a specific token
    #[error("expected {expected}, found {found} at {}", .span.start)]
    ExpectedToken {
        expected: TokenKind,
        found: TokenKind,
        span: Span,
    },
    /// A value was required but the token cannot start one
    #[error("expected value, found {found} at {}", .span.start)]
    UnexpectedToken { found: TokenKind, span: Span },
    /// Octal literal does not fit in `i64`
    #[error("octal literal {text} at {} does not fit in a 64-bit signed integer", .span.start)]
    LiteralTooLarge { text: String, span: Span },
    /// Arrays nested beyond the configured limit
    #[error("arrays nested deeper than {limit} levels at {}", .span.start)]
    NestingTooDeep { limit: usize, span: Span },
}

/// Parser state for tracking position and nesting
#[derive(Debug)]
pub struct ParserState<'a> {
    /// Token stream
    tokens: &'a [Token],
    /// Current position in token stream
    pos: usize,
    /// Current array nesting
    depth: usize,
    max_depth: usize,
}

impl<'a> ParserState<'a> {
    /// Create a new parser state
    #[inline]
    pub fn new(
        tokens: &'a [Token],
        max_depth: usize,
    ) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
            max_depth,
        }
    }

    /// Check if at end of token stream
    #[inline]
    pub fn at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    /// Get current token
    #[inline]
    pub fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Kind of the current token, `Eof` past the end of the stream
    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().map(|t| t.kind).unwrap_or(TokenKind::Eof)
    }

    /// Span of the current token
    ///
    /// Past the end of the stream this is the end of the last token.
    pub fn span(&self) -> Span {
        match self.current() {
            Some(token) => token.span,
            None => self
                .tokens
                .last()
                .map(|t| Span::point(t.span.end))
                .unwrap_or_default(),
        }
    }

    /// Check if current token matches kind
    #[inline]
    pub fn at(
        &self,
        kind: TokenKind,
    ) -> bool {
        self.current_kind() == kind
    }

    /// Advance to next token
    pub fn bump(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// Consume the current token if it matches kind
    pub fn skip(
        &mut self,
        kind: TokenKind,
    ) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consume a token of the given kind or fail
    pub fn expect(
        &mut self,
        kind: TokenKind,
    ) -> Result<&'a Token, ParseError> {
        if self.at(kind) {
            if let Some(token) = self.bump() {
                return Ok(token);
            }
        }
        Err(ParseError::ExpectedToken {
            expected: kind,
            found: self.current_kind(),
            span: self.span(),
        })
    }

    /// Enter one array level
    pub fn enter_nested(
        &mut self,
        span: Span,
    ) -> Result<(), ParseError> {
        if self.depth >= self.max_depth {
            return Err(ParseError::NestingTooDeep {
                limit: self.max_depth,
                span,
            });
        }
        self.depth += 1;
        Ok(())
    }

    /// Leave one array level
    #[inline]
    pub fn exit_nested(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
