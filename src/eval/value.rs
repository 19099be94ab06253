//! Resolved values

use std::fmt;
use std::rc::Rc;

/// Fully resolved value; never contains a reference
///
/// List elements are shared: every reference to the same definition points at
/// the same memoized `Rc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedValue {
    Int(i64),
    List(Vec<Rc<ResolvedValue>>),
}

impl ResolvedValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ResolvedValue::Int(n) => Some(*n),
            ResolvedValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Rc<ResolvedValue>]> {
        match self {
            ResolvedValue::Int(_) => None,
            ResolvedValue::List(items) => Some(items),
        }
    }
}

/// Integers in decimal, lists as `[a, b, c]`
impl fmt::Display for ResolvedValue {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            ResolvedValue::Int(n) => write!(f, "{}", n),
            ResolvedValue::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
        }
    }
}
