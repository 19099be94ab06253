//! Lexer module
//!
//! Turns definition source text into a flat token stream terminated by `Eof`.

pub mod tokenizer;
pub mod tokens;
#[cfg(test)]
mod tests;

// Re-export types
pub use tokenizer::Lexer;
pub use tokens::{LexError, Token, TokenKind};

use crate::util::span::Span;

/// Tokenize source text
///
/// The returned vector always ends with an `Eof` token positioned just past
/// the last character of the input.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    tracing::debug!("lexing {} bytes", source.len());

    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next_token()? {
        tracing::trace!("token {} {:?} at {}", token.kind, token.text, token.span.start);
        tokens.push(token);
    }

    let end = lexer.position();
    tokens.push(Token::new(TokenKind::Eof, "", Span::point(end)));

    tracing::debug!("lexed {} tokens", tokens.len());
    Ok(tokens)
}
