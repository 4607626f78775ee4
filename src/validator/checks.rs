//! Composable shape checks over untyped values.
//!
//! Check semantics:
//! - Base-type checks match the value kind exactly, no coercion
//! - `equals` compares structurally; kind must match too
//! - `none_or` short-circuits on null before delegating
//! - `union` tries alternatives in order and succeeds on the first match
//! - `list` checks every element, labelling failures with the index
//! - Dict shapes check required keys, then optional keys, then (for the
//!   exact form) reject any undeclared key
//!
//! Checks are built once and hold their sub-checks as owned fields; a
//! composed check is an inspectable tree, not a closure. Validation is a
//! pure read: the value is never mutated and no state survives the call.

use serde_json::Value;

use super::errors::{ValidationError, ValidationResult};
use super::value::{kind_of, ValueKind};

/// A named field inside a dict shape: the key and the check for its value.
///
/// Field lists preserve their written order; the order documents the schema
/// and fixes which missing key is reported first, but does not change
/// whether a value validates.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Key name in the mapping
    pub name: String,
    /// Check applied to the key's value
    pub validator: Validator,
}

impl Field {
    /// Creates a field from a key name and the check for its value.
    pub fn new(name: impl Into<String>, validator: Validator) -> Self {
        Self {
            name: name.into(),
            validator,
        }
    }
}

/// Shorthand for [`Field::new`], keeping field lists compact.
pub fn field(name: impl Into<String>, validator: Validator) -> Field {
    Field::new(name, validator)
}

/// A composable check over an untyped value tree.
///
/// Constructed via the `check_*` functions and [`equals`], composed freely,
/// and applied with [`Validator::validate`]. A validator is immutable after
/// construction and safe to share across threads.
#[derive(Debug, Clone, PartialEq)]
pub enum Validator {
    /// Accepts booleans
    Bool,
    /// Accepts integers (never floats, never booleans)
    Int,
    /// Accepts strings
    String,
    /// Accepts exactly one constant value
    Equals(Value),
    /// Accepts null, or whatever the inner check accepts
    NoneOr(Box<Validator>),
    /// Accepts a value any alternative accepts, tried in order
    Union(Vec<Validator>),
    /// Accepts arrays whose every element passes the element check
    List(Box<Validator>),
    /// Accepts mappings matching the declared fields; `exact` closes the
    /// key set
    Dict {
        /// Keys that must be present
        required: Vec<Field>,
        /// Keys that may be present
        optional: Vec<Field>,
        /// Reject keys declared by neither list
        exact: bool,
    },
}

impl Validator {
    /// Applies the check to `value`.
    ///
    /// `label` identifies the value's position and is only used in error
    /// messages; nested failures extend it with `.key` and `[index]`
    /// segments.
    pub fn validate(&self, label: &str, value: &Value) -> ValidationResult<()> {
        match self {
            Validator::Bool => expect_kind(label, value, ValueKind::Bool),
            Validator::Int => expect_kind(label, value, ValueKind::Int),
            Validator::String => expect_kind(label, value, ValueKind::String),
            Validator::Equals(expected) => {
                if value == expected {
                    Ok(())
                } else {
                    Err(ValidationError::LiteralMismatch {
                        label: label.to_string(),
                        expected: expected.clone(),
                        actual: value.clone(),
                    })
                }
            }
            Validator::NoneOr(inner) => {
                if value.is_null() {
                    Ok(())
                } else {
                    inner.validate(label, value)
                }
            }
            Validator::Union(alternatives) => {
                for alternative in alternatives {
                    if alternative.validate(label, value).is_ok() {
                        return Ok(());
                    }
                }
                Err(ValidationError::UnionExhausted {
                    label: label.to_string(),
                    expected: self.describe(),
                    actual: kind_of(value),
                })
            }
            Validator::List(element) => {
                let items = match value {
                    Value::Array(items) => items,
                    _ => {
                        return Err(ValidationError::TypeMismatch {
                            label: label.to_string(),
                            expected: "array",
                            actual: kind_of(value),
                        })
                    }
                };
                for (index, item) in items.iter().enumerate() {
                    element.validate(&format!("{}[{}]", label, index), item)?;
                }
                Ok(())
            }
            Validator::Dict {
                required,
                optional,
                exact,
            } => {
                let obj = match value {
                    Value::Object(map) => map,
                    _ => {
                        return Err(ValidationError::TypeMismatch {
                            label: label.to_string(),
                            expected: "object",
                            actual: kind_of(value),
                        })
                    }
                };

                for field in required {
                    match obj.get(&field.name) {
                        Some(inner) => {
                            field
                                .validator
                                .validate(&key_path(label, &field.name), inner)?;
                        }
                        None => {
                            return Err(ValidationError::MissingKey {
                                label: label.to_string(),
                                key: field.name.clone(),
                            })
                        }
                    }
                }

                for field in optional {
                    if let Some(inner) = obj.get(&field.name) {
                        field
                            .validator
                            .validate(&key_path(label, &field.name), inner)?;
                    }
                }

                if *exact {
                    for key in obj.keys() {
                        let declared = required
                            .iter()
                            .chain(optional.iter())
                            .any(|field| field.name == *key);
                        if !declared {
                            return Err(ValidationError::UnknownKey {
                                label: label.to_string(),
                                key: key.clone(),
                            });
                        }
                    }
                }

                Ok(())
            }
        }
    }

    /// Returns a short human-readable summary of what the check accepts.
    ///
    /// Used in union-exhaustion messages; not a serialization format.
    pub fn describe(&self) -> String {
        match self {
            Validator::Bool => "bool".to_string(),
            Validator::Int => "int".to_string(),
            Validator::String => "string".to_string(),
            Validator::Equals(literal) => literal.to_string(),
            Validator::NoneOr(inner) => format!("{} | null", inner.describe()),
            Validator::Union(alternatives) => {
                if alternatives.is_empty() {
                    "nothing".to_string()
                } else {
                    alternatives
                        .iter()
                        .map(Validator::describe)
                        .collect::<Vec<_>>()
                        .join(" | ")
                }
            }
            Validator::List(element) => format!("array of {}", element.describe()),
            Validator::Dict { .. } => "object".to_string(),
        }
    }
}

/// Accepts exactly boolean values.
pub fn check_bool() -> Validator {
    Validator::Bool
}

/// Accepts exactly integer values (floats and booleans are rejected).
pub fn check_int() -> Validator {
    Validator::Int
}

/// Accepts exactly string values.
pub fn check_string() -> Validator {
    Validator::String
}

/// Accepts exactly the given constant, compared structurally.
///
/// The comparison is kind-aware: `equals(1)` rejects `true` and `1.0`.
pub fn equals(literal: impl Into<Value>) -> Validator {
    Validator::Equals(literal.into())
}

/// Accepts null, or whatever `inner` accepts.
pub fn check_none_or(inner: Validator) -> Validator {
    Validator::NoneOr(Box::new(inner))
}

/// Accepts a value any of `alternatives` accepts, trying them in order.
pub fn check_union(alternatives: Vec<Validator>) -> Validator {
    Validator::Union(alternatives)
}

/// Accepts arrays whose every element passes `element`.
pub fn check_list(element: Validator) -> Validator {
    Validator::List(Box::new(element))
}

/// Accepts mappings where declared keys validate; undeclared keys are
/// permitted.
pub fn check_dict(required: Vec<Field>, optional: Vec<Field>) -> Validator {
    Validator::Dict {
        required,
        optional,
        exact: false,
    }
}

/// Accepts mappings with exactly the declared key set: required keys must
/// be present, optional keys may be, and nothing else is allowed.
pub fn check_dict_only(required: Vec<Field>, optional: Vec<Field>) -> Validator {
    Validator::Dict {
        required,
        optional,
        exact: true,
    }
}

/// Checks the value's kind tag against the expected kind.
fn expect_kind(label: &str, value: &Value, expected: ValueKind) -> ValidationResult<()> {
    let actual = kind_of(value);
    if actual == expected {
        Ok(())
    } else {
        Err(ValidationError::TypeMismatch {
            label: label.to_string(),
            expected: expected.as_str(),
            actual,
        })
    }
}

/// Creates a key path from a parent label and a field name.
pub(crate) fn key_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}
