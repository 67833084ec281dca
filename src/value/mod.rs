//! Defines the [`Value`] enum, representing any value that can be
//! substituted into a template.

mod from;
#[cfg(feature = "serde")]
mod ser;

use std::fmt;
use std::mem;

pub use std::collections::BTreeMap as Map;
pub use std::vec::Vec as List;

#[cfg(feature = "serde")]
pub(crate) use crate::value::ser::to_values;
#[cfg(feature = "serde")]
pub use crate::value::ser::to_value;

/// A record of placeholder values, keyed by placeholder name.
pub type Values = Map<String, Value>;

/// Data to be substituted represented as a recursive enum.
///
/// [`Value::None`] doubles as the "absent" marker: a key mapped to it is
/// skipped when merging and is unresolved when rendering.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    None,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(List<Value>),
    Map(Map<String, Value>),
}

impl Value {
    /// Returns `true` if this is the absent marker.
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub(crate) fn human(&self) -> &'static str {
        match self {
            Value::None => "none",
            Value::Bool(_) => "bool",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(s), Self::Bool(o)) => s == o,
            (Self::Integer(s), Self::Integer(o)) => s == o,
            (Self::Float(s), Self::Float(o)) => s == o,
            (Self::String(s), Self::String(o)) => s == o,
            (Self::List(s), Self::List(o)) => s == o,
            (Self::Map(s), Self::Map(o)) => s == o,
            _ => mem::discriminant(self) == mem::discriminant(other),
        }
    }
}

/// Formats the value the way it is substituted into a template.
///
/// - [`Value::None`]: empty string
/// - [`Value::Bool`]: `true` or `false`
/// - [`Value::Integer`] and [`Value::Float`]: using their
///   [`Display`][std::fmt::Display] implementation
/// - [`Value::String`]: the string, unescaped
/// - [`Value::List`]: each element formatted and joined with `,`
/// - [`Value::Map`]: `{key: value, ...}` in key order
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Integer(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::String(s) => f.write_str(s),
            Value::List(list) => {
                for (i, v) in list.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{v}")?;
                }
                Ok(())
            }
            Value::Map(map) => {
                f.write_str("{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                f.write_str("}")
            }
        }
    }
}
