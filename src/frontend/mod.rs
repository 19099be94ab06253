//! Frontend: lexer and parser
//!
//! Turns definition source text into a list of [`parser::ast::Definition`]s.

pub mod lexer;
pub mod parser;

use parser::ast::Definition;
use thiserror::Error;

/// Lexing or parsing failure
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FrontendError {
    #[error(transparent)]
    Lex(#[from] lexer::LexError),
    #[error(transparent)]
    Parse(#[from] parser::ParseError),
}

/// Tokenize and parse `source` in one step
pub fn parse_source(
    source: &str,
    max_depth: usize,
) -> Result<Vec<Definition>, FrontendError> {
    let tokens = lexer::tokenize(source)?;
    Ok(parser::parse_with_depth(&tokens, max_depth)?)
}
