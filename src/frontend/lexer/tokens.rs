//! Token types

use crate::util::span::{Position, Span};
use std::fmt;

/// Lexer error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LexError {
    #[error("unexpected character '{ch}' at {position}")]
    UnexpectedChar { ch: char, position: Position },
}

/// Token kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Octal literal, `0o17`
    Number,
    Identifier,
    /// `def`
    KwDef,
    /// `:=`
    Assign,
    Bang,
    LBracket,
    RBracket,
    LParen,
    RParen,
    Comma,

    // Special
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let name = match self {
            TokenKind::Number => "NUMBER",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::KwDef => "DEF",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Bang => "BANG",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Comma => "COMMA",
            TokenKind::Eof => "end of input",
        };
        f.write_str(name)
    }
}

/// Token
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source text of the lexeme (empty for `Eof`)
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        text: impl Into<String>,
        span: Span,
    ) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Line of the first character
    #[inline]
    pub fn line(&self) -> usize {
        self.span.start.line
    }

    /// Column of the first character
    #[inline]
    pub fn column(&self) -> usize {
        self.span.start.column
    }
}
