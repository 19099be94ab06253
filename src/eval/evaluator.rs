//! Reference-resolving evaluator
//!
//! Lowers parsed definitions into [`ResolvedValue`]s:
//! - the definition table is built up front, so forward references resolve
//! - every referenced name is resolved once and memoized
//! - names currently being resolved are tracked to report reference cycles
//! - recursion through arrays and references is bounded by `max_depth`,
//!   including the levels a memoized value already contains

use indexmap::{IndexMap, IndexSet};
use std::collections::HashMap;
use std::rc::Rc;

use super::value::ResolvedValue;
use crate::frontend::parser::ast::{Definition, Value};
use crate::util::config::DEFAULT_MAX_DEPTH;
use crate::util::span::Position;

/// Evaluation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("undefined constant '{name}'{}", at(.position))]
    UndefinedReference {
        name: String,
        position: Option<Position>,
    },
    #[error("cyclic reference: {cycle}")]
    CyclicReference { cycle: String },
    #[error("reference chain or array nesting deeper than {limit} levels")]
    DepthExceeded { limit: usize },
}

fn at(position: &Option<Position>) -> String {
    position.map(|p| format!(" at {}", p)).unwrap_or_default()
}

/// Evaluator over one set of definitions
///
/// The memo cache lives as long as the evaluator; create a new one per run.
#[derive(Debug)]
pub struct Evaluator<'a> {
    /// name -> definition, last definition of a name wins
    table: IndexMap<&'a str, &'a Definition>,
    /// Memoized results per name, with the nesting height each one spans
    cache: HashMap<&'a str, (Rc<ResolvedValue>, usize)>,
    /// Names currently being resolved, in resolution order
    resolving: IndexSet<&'a str>,
    depth: usize,
    max_depth: usize,
}

impl<'a> Evaluator<'a> {
    /// Build the definition table
    ///
    /// A later definition with an already-seen name replaces the earlier one
    /// and takes the position of the later occurrence.
    pub fn new(definitions: &'a [Definition]) -> Self {
        let mut table: IndexMap<&'a str, &'a Definition> =
            IndexMap::with_capacity(definitions.len());
        for def in definitions {
            if table.shift_remove(def.name.as_str()).is_some() {
                tracing::debug!("definition '{}' replaces an earlier one", def.name);
            }
            table.insert(def.name.as_str(), def);
        }

        Self {
            table,
            cache: HashMap::new(),
            resolving: IndexSet::new(),
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set the maximum recursion depth
    pub fn with_max_depth(
        mut self,
        max_depth: usize,
    ) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Table names in output order
    pub fn names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.table.keys().copied()
    }

    /// Look up a definition by name
    pub fn definition(
        &self,
        name: &str,
    ) -> Option<&'a Definition> {
        self.table.get(name).copied()
    }

    /// Resolve a named definition, memoized
    pub fn resolve(
        &mut self,
        name: &str,
    ) -> Result<Rc<ResolvedValue>, EvalError> {
        self.resolve_at(name, None).map(|(value, _)| value)
    }

    /// Resolve every table entry, in table order
    pub fn evaluate_all(&mut self) -> Result<Vec<(&'a str, Rc<ResolvedValue>)>, EvalError> {
        let names: Vec<&'a str> = self.names().collect();
        let mut resolved = Vec::with_capacity(names.len());
        for name in names {
            let value = self.resolve(name)?;
            resolved.push((name, value));
        }
        tracing::debug!("resolved {} definitions", resolved.len());
        Ok(resolved)
    }

    /// Reduce an AST value to a resolved value
    pub fn evaluate(
        &mut self,
        value: &Value,
    ) -> Result<Rc<ResolvedValue>, EvalError> {
        self.evaluate_measured(value).map(|(value, _)| value)
    }

    /// Evaluate `value` and report how many levels below the current one it
    /// spans: arrays and reference hops each count one level
    fn evaluate_measured(
        &mut self,
        value: &Value,
    ) -> Result<(Rc<ResolvedValue>, usize), EvalError> {
        match value {
            Value::Number(n, _) => Ok((Rc::new(ResolvedValue::Int(*n)), 0)),
            Value::Array(elements, _) => self.nested(|this| {
                let mut items = Vec::with_capacity(elements.len());
                let mut height = 0;
                for element in elements {
                    let (item, item_height) = this.evaluate_measured(element)?;
                    height = height.max(item_height);
                    items.push(item);
                }
                Ok((Rc::new(ResolvedValue::List(items)), height + 1))
            }),
            Value::ConstRef(name, span) => self.nested(|this| {
                let (value, height) = this.resolve_at(name, Some(span.start))?;
                Ok((value, height + 1))
            }),
        }
    }

    fn resolve_at(
        &mut self,
        name: &str,
        position: Option<Position>,
    ) -> Result<(Rc<ResolvedValue>, usize), EvalError> {
        if let Some((cached, height)) = self.cache.get(name) {
            if self.depth + height > self.max_depth {
                return Err(EvalError::DepthExceeded {
                    limit: self.max_depth,
                });
            }
            return Ok((Rc::clone(cached), *height));
        }

        let def = self
            .definition(name)
            .ok_or_else(|| EvalError::UndefinedReference {
                name: name.to_string(),
                position,
            })?;
        let key = def.name.as_str();

        if let Some(start) = self.resolving.get_index_of(key) {
            return Err(EvalError::CyclicReference {
                cycle: self.format_cycle(start, key),
            });
        }

        self.resolving.insert(key);
        let result = self.evaluate_measured(&def.value);
        self.resolving.pop();

        let (value, height) = result?;
        tracing::trace!("resolved '{}' = {} (height {})", key, value, height);
        self.cache.insert(key, (Rc::clone(&value), height));
        Ok((value, height))
    }

    /// `A -> B -> A`, starting at the first occurrence of the repeated name
    fn format_cycle(
        &self,
        start: usize,
        repeated: &str,
    ) -> String {
        let mut parts: Vec<&str> = self.resolving.iter().skip(start).copied().collect();
        parts.push(repeated);
        parts.join(" -> ")
    }

    /// Run `f` one recursion level deeper
    fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, EvalError>,
    ) -> Result<T, EvalError> {
        if self.depth >= self.max_depth {
            return Err(EvalError::DepthExceeded {
                limit: self.max_depth,
            });
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }
}
