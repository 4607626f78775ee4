//! Value kind classification.
//!
//! Every check in this crate dispatches on an explicit kind tag rather than
//! probing the value ad hoc. The tag distinguishes:
//! - int from float (a number that is not i64/u64-representable is a float)
//! - bool from int (a boolean is never treated as a number)
//!
//! No coercion happens anywhere downstream of this classification.

use std::fmt;

use serde_json::Value;

/// Runtime kind of an untyped value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// JSON null
    Null,
    /// Boolean
    Bool,
    /// 64-bit integer (i64 or u64)
    Int,
    /// Floating-point number
    Float,
    /// UTF-8 string
    String,
    /// Ordered sequence
    Array,
    /// String-keyed mapping
    Object,
}

impl ValueKind {
    /// Returns the kind name for error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classifies a value into its kind tag.
pub fn kind_of(value: &Value) -> ValueKind {
    match value {
        Value::Null => ValueKind::Null,
        Value::Bool(_) => ValueKind::Bool,
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                ValueKind::Int
            } else {
                ValueKind::Float
            }
        }
        Value::String(_) => ValueKind::String,
        Value::Array(_) => ValueKind::Array,
        Value::Object(_) => ValueKind::Object,
    }
}
