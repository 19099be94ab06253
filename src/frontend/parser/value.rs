//! Value parsing: numbers, arrays, and constant references

use super::ast::Value;
use super::state::{ParseError, ParserState};
use crate::frontend::lexer::tokens::*;

/// Decode the text of a `Number` token (`0o17`, `0O17`) as base 8
///
/// Returns `None` when the value does not fit in `i64`.
pub fn decode_octal(text: &str) -> Option<i64> {
    let digits = text.get(2..)?;
    digits.chars().try_fold(0i64, |acc, c| {
        let digit = c.to_digit(8)?;
        acc.checked_mul(8)?.checked_add(i64::from(digit))
    })
}

impl<'a> ParserState<'a> {
    /// value := number | array | constant_ref
    pub fn parse_value(&mut self) -> Result<Value, ParseError> {
        match self.current_kind() {
            TokenKind::Number => self.parse_number(),
            TokenKind::LParen => self.parse_array(),
            TokenKind::Bang => self.parse_const_ref(),
            found => Err(ParseError::UnexpectedToken {
                found,
                span: self.span(),
            }),
        }
    }

    fn parse_number(&mut self) -> Result<Value, ParseError> {
        let token = self.expect(TokenKind::Number)?;
        match decode_octal(&token.text) {
            Some(n) => Ok(Value::Number(n, token.span)),
            None => Err(ParseError::LiteralTooLarge {
                text: token.text.clone(),
                span: token.span,
            }),
        }
    }

    /// array := LPAREN (value COMMA?)* RPAREN
    fn parse_array(&mut self) -> Result<Value, ParseError> {
        let open = self.expect(TokenKind::LParen)?;
        self.enter_nested(open.span)?;

        let mut elements = Vec::new();
        while !self.at(TokenKind::RParen) && !self.at_end() {
            elements.push(self.parse_value()?);
            self.skip(TokenKind::Comma);
        }

        let close = self.expect(TokenKind::RParen)?;
        self.exit_nested();
        Ok(Value::Array(elements, open.span.to(close.span)))
    }

    /// constant_ref := BANG LBRACKET IDENTIFIER RBRACKET
    fn parse_const_ref(&mut self) -> Result<Value, ParseError> {
        let bang = self.expect(TokenKind::Bang)?;
        self.expect(TokenKind::LBracket)?;
        let name = self.expect(TokenKind::Identifier)?;
        let close = self.expect(TokenKind::RBracket)?;
        Ok(Value::ConstRef(name.text.clone(), bang.span.to(close.span)))
    }
}
