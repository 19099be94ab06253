//! Evaluation and serialization
//!
//! Resolves constant references against the definition table and renders the
//! resolved values as `name = value` lines.

pub mod evaluator;
pub mod serialize;
pub mod value;


pub use evaluator::{EvalError, Evaluator};
pub use serialize::{render, render_line, to_toml};
pub use value::ResolvedValue;
