//! Parser module
//!
//! Recursive-descent parser with one token of lookahead. The grammar:
//!
//! ```text
//! program      := definition*
//! definition   := DEF IDENTIFIER ASSIGN value
//! value        := NUMBER | array | constant_ref
//! array        := LPAREN (value COMMA?)* RPAREN
//! constant_ref := BANG LBRACKET IDENTIFIER RBRACKET
//! ```

pub mod ast;
mod definition;
mod state;
#[cfg(test)]
mod tests;
mod value;

pub use state::{ParseError, ParserState};
pub use value::decode_octal;

use crate::frontend::lexer::tokens::*;
use crate::util::config::DEFAULT_MAX_DEPTH;
use ast::*;

/// Parse tokens into definitions, in source order
///
/// # Arguments
/// * `tokens` - Token stream from the lexer
///
/// # Returns
/// All definitions or the first parse error
pub fn parse(tokens: &[Token]) -> Result<Vec<Definition>, ParseError> {
    parse_with_depth(tokens, DEFAULT_MAX_DEPTH)
}

/// Parse tokens with an explicit array nesting limit
pub fn parse_with_depth(
    tokens: &[Token],
    max_depth: usize,
) -> Result<Vec<Definition>, ParseError> {
    let mut state = ParserState::new(tokens, max_depth);
    let mut definitions = Vec::new();

    while !state.at_end() {
        definitions.push(state.parse_definition()?);
    }

    tracing::debug!("parsed {} definitions", definitions.len());
    Ok(definitions)
}
