//! Tokenizer implementation
//!
//! Rules are tried in a fixed order at each position: whitespace, newline,
//! octal number, the `def` keyword, identifier, then punctuation. Identifiers
//! must start with an uppercase letter or `_` and the keyword only matches a
//! lowercase `def` that is not followed by an identifier character, so no two
//! rules can match at the same position.

use super::tokens::*;
use crate::util::span::{Position, Span};
use std::iter::Peekable;
use std::str::Chars;

const KEYWORD_DEF: &str = "def";

/// Main lexer structure
pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    offset: usize,
    line: usize,
    column: usize,
    start: Position,
    text: String,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source
    pub fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().peekable(),
            offset: 0,
            line: 1,
            column: 1,
            start: Position::start(),
            text: String::new(),
        }
    }

    /// Get current position
    pub fn position(&self) -> Position {
        Position::with_offset(self.line, self.column, self.offset)
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        match self.chars.next() {
            Some('\n') => {
                self.offset += 1;
                self.line += 1;
                self.column = 1;
                Some('\n')
            }
            Some(c) => {
                self.offset += c.len_utf8();
                self.column += 1;
                self.text.push(c);
                Some(c)
            }
            None => None,
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn peek_nth(
        &self,
        n: usize,
    ) -> Option<char> {
        self.chars.clone().nth(n)
    }

    /// Skip horizontal whitespace and newlines
    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\n') = self.peek() {
            self.advance();
        }
    }

    /// Generate next token, `Ok(None)` at end of input
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        self.skip_whitespace();

        let Some(c) = self.peek() else {
            return Ok(None);
        };

        self.start = self.position();
        self.text.clear();

        let kind = match c {
            '0' if self.at_octal_prefix() => {
                self.advance();
                self.advance();
                self.eat_while(is_octal_digit);
                TokenKind::Number
            }
            c if c.is_ascii_lowercase() && self.at_keyword(KEYWORD_DEF) => {
                self.eat_while(is_identifier_char);
                TokenKind::KwDef
            }
            c if is_identifier_start(c) => {
                self.eat_while(is_identifier_char);
                TokenKind::Identifier
            }
            ':' if self.peek_nth(1) == Some('=') => {
                self.advance();
                self.advance();
                TokenKind::Assign
            }
            '!' => self.single(TokenKind::Bang),
            '[' => self.single(TokenKind::LBracket),
            ']' => self.single(TokenKind::RBracket),
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            ',' => self.single(TokenKind::Comma),
            ch => {
                return Err(LexError::UnexpectedChar {
                    ch,
                    position: self.start,
                })
            }
        };

        Ok(Some(self.make_token(kind)))
    }

    /// `0o` or `0O` followed by at least one octal digit
    fn at_octal_prefix(&self) -> bool {
        matches!(self.peek_nth(1), Some('o' | 'O'))
            && self.peek_nth(2).map(is_octal_digit).unwrap_or(false)
    }

    /// Keyword at the current position, not followed by an identifier character
    fn at_keyword(
        &self,
        keyword: &str,
    ) -> bool {
        let mut ahead = self.chars.clone();
        keyword.chars().all(|k| ahead.next() == Some(k))
            && !ahead.next().map(is_identifier_char).unwrap_or(false)
    }

    fn eat_while(
        &mut self,
        pred: impl Fn(char) -> bool,
    ) {
        while self.peek().map(&pred).unwrap_or(false) {
            self.advance();
        }
    }

    fn single(
        &mut self,
        kind: TokenKind,
    ) -> TokenKind {
        self.advance();
        kind
    }

    /// Create token with current span and text
    fn make_token(
        &self,
        kind: TokenKind,
    ) -> Token {
        Token::new(kind, self.text.clone(), Span::new(self.start, self.position()))
    }
}

#[inline]
fn is_octal_digit(c: char) -> bool {
    ('0'..='7').contains(&c)
}

#[inline]
fn is_identifier_start(c: char) -> bool {
    c.is_ascii_uppercase() || c == '_'
}

#[inline]
fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
