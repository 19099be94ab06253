//! Abstract Syntax Tree types

use crate::util::span::Span;

/// Right-hand side of a definition
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Decoded octal literal
    Number(i64, Span),
    /// `( ... )`, element order is significant
    Array(Vec<Value>, Span),
    /// `![NAME]`, resolved lazily against the definition table
    ConstRef(String, Span),
}

impl Value {
    pub fn span(&self) -> Span {
        match self {
            Value::Number(_, span) | Value::Array(_, span) | Value::ConstRef(_, span) => *span,
        }
    }
}

/// Top-level `def NAME := value`
#[derive(Debug, Clone, PartialEq)]
pub struct Definition {
    pub name: String,
    pub value: Value,
    pub span: Span,
}
