// Runtime types and the length capability of argument values

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Runtime type of an argument value.
///
/// `Number` is an umbrella accepted by both integers and floats; the type
/// reported for a concrete value is always one of the other variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    Null,
    Bool,
    /// Numbers representable as `i64` or `u64`
    Integer,
    /// Numbers only representable as `f64`
    Float,
    Number,
    String,
    Array,
    Object,
}

impl ValueType {
    /// The concrete type of `value`.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueType::Null,
            Value::Bool(_) => ValueType::Bool,
            Value::Number(n) if n.is_i64() || n.is_u64() => ValueType::Integer,
            Value::Number(_) => ValueType::Float,
            Value::String(_) => ValueType::String,
            Value::Array(_) => ValueType::Array,
            Value::Object(_) => ValueType::Object,
        }
    }

    /// Whether `value` is an instance of this type.
    pub fn matches(&self, value: &Value) -> bool {
        let actual = Self::of(value);
        match self {
            ValueType::Number => matches!(actual, ValueType::Integer | ValueType::Float),
            expected => *expected == actual,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Null => "null",
            ValueType::Bool => "bool",
            ValueType::Integer => "integer",
            ValueType::Float => "float",
            ValueType::Number => "number",
            ValueType::String => "string",
            ValueType::Array => "array",
            ValueType::Object => "object",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values that expose a length.
pub trait Measure {
    /// Length of the value, or `None` when it has none.
    fn measure(&self) -> Option<usize>;
}

impl Measure for Value {
    fn measure(&self) -> Option<usize> {
        match self {
            Value::String(s) => Some(s.chars().count()),
            Value::Array(items) => Some(items.len()),
            Value::Object(entries) => Some(entries.len()),
            Value::Null | Value::Bool(_) | Value::Number(_) => None,
        }
    }
}

/// Equality used for membership checks: numbers compare by numeric value,
/// so `1` and `1.0` are the same choice.
pub(crate) fn same_value(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_i64(), y.as_i64()) {
            (Some(x), Some(y)) => x == y,
            _ => match (x.as_u64(), y.as_u64()) {
                (Some(x), Some(y)) => x == y,
                _ => x.as_f64() == y.as_f64(),
            },
        },
        _ => a == b,
    }
}
