//! Definition parsing

use super::ast::Definition;
use super::state::{ParseError, ParserState};
use crate::frontend::lexer::tokens::*;

impl<'a> ParserState<'a> {
    /// definition := KEYWORD_DEF IDENTIFIER ASSIGN value
    pub fn parse_definition(&mut self) -> Result<Definition, ParseError> {
        let kw = self.expect(TokenKind::KwDef)?;
        let name = self.expect(TokenKind::Identifier)?;
        self.expect(TokenKind::Assign)?;
        let value = self.parse_value()?;
        let span = kw.span.to(value.span());

        Ok(Definition {
            name: name.text.clone(),
            value,
            span,
        })
    }
}
