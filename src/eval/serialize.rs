//! Flat `name = value` output

use std::rc::Rc;

use super::evaluator::{EvalError, Evaluator};
use super::value::ResolvedValue;
use crate::frontend::parser::ast::Definition;

/// Render one `name = value` line
pub fn render_line(
    name: &str,
    value: &ResolvedValue,
) -> String {
    format!("{} = {}", name, value)
}

/// Join rendered lines with `\n`, without a trailing newline
pub fn render(entries: &[(&str, Rc<ResolvedValue>)]) -> String {
    entries
        .iter()
        .map(|(name, value)| render_line(name, value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Resolve all definitions and serialize them in table order
pub fn to_toml(
    definitions: &[Definition],
    max_depth: usize,
) -> Result<String, EvalError> {
    let mut evaluator = Evaluator::new(definitions).with_max_depth(max_depth);
    let resolved = evaluator.evaluate_all()?;
    Ok(render(&resolved))
}
