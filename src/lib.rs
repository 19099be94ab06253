//! octconf
//!
//! Converts a small definition language into flat `name = value` configuration.
//!
//! ```text
//! def SIZE   := 0o20
//! def LIMITS := (![SIZE], 0o777)
//! ```
//!
//! becomes
//!
//! ```text
//! SIZE = 16
//! LIMITS = [16, 511]
//! ```
//!
//! The pipeline is tokenize -> parse -> resolve -> serialize. Each stage fails
//! fast with its own error type; nothing is produced on failure.

#![warn(rust_2018_idioms)]

pub mod eval;
pub mod frontend;
pub mod util;

use thiserror::Error;
use tracing::debug;

use crate::eval::EvalError;
use crate::frontend::FrontendError;
use crate::frontend::lexer::LexError;
use crate::frontend::parser::ParseError;
use crate::util::config::{UserConfig, DEFAULT_MAX_DEPTH};

/// Tool version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tool name
pub const NAME: &str = "octconf";

/// Any failure of the conversion pipeline
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl From<FrontendError> for Error {
    fn from(err: FrontendError) -> Self {
        match err {
            FrontendError::Lex(e) => Error::Lex(e),
            FrontendError::Parse(e) => Error::Parse(e),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Conversion options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Limit for array nesting and reference chains
    pub max_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl From<&UserConfig> for Options {
    fn from(config: &UserConfig) -> Self {
        Self {
            max_depth: config.eval.max_depth,
        }
    }
}

/// Convert definition source to `name = value` lines with default options
///
/// # Example
///
/// ```
/// let out = octconf::convert("def CONFIG := ((0o1, 0o2), (0o3, 0o4))").unwrap();
/// assert_eq!(out, "CONFIG = [[1, 2], [3, 4]]");
/// ```
pub fn convert(source: &str) -> Result<String> {
    convert_with(source, &Options::default())
}

/// Convert definition source with explicit options
///
/// The result has no trailing newline.
pub fn convert_with(
    source: &str,
    options: &Options,
) -> Result<String> {
    debug!("converting {} bytes, max depth {}", source.len(), options.max_depth);
    let definitions = frontend::parse_source(source, options.max_depth)?;
    let output = eval::to_toml(&definitions, options.max_depth)?;
    debug!("produced {} bytes of output", output.len());
    Ok(output)
}
