//! Validation error types.
//!
//! Every failure carries the diagnostic label of the offending position,
//! extended with `.key` / `[index]` segments as the failure propagates out
//! of nested dicts and lists. Failures surface immediately; there is no
//! partial-success mode and nothing is swallowed.

use serde_json::Value;
use thiserror::Error;

use super::value::ValueKind;

/// Result type for validation calls
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A single validation failure with full positional context
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    // ==================
    // Shape Failures
    // ==================
    /// Value kind does not match the expected kind
    #[error("{label}: expected {expected}, got {actual}")]
    TypeMismatch {
        /// Path of the offending value
        label: String,
        /// Expected kind name
        expected: &'static str,
        /// Actual kind found
        actual: ValueKind,
    },

    /// Value does not equal a required constant
    #[error("{label}: expected exactly {expected}, got {actual}")]
    LiteralMismatch {
        /// Path of the offending value
        label: String,
        /// The required constant
        expected: Value,
        /// The value found
        actual: Value,
    },

    // ==================
    // Key Failures
    // ==================
    /// A required key is absent from a mapping
    #[error("{label}: missing required key '{key}'")]
    MissingKey {
        /// Path of the mapping
        label: String,
        /// The absent key
        key: String,
    },

    /// A mapping contains a key not declared by a closed schema
    #[error("{label}: unexpected key '{key}'")]
    UnknownKey {
        /// Path of the mapping
        label: String,
        /// The undeclared key
        key: String,
    },

    // ==================
    // Composite Failures
    // ==================
    /// No alternative of a union check accepted the value
    #[error("{label}: no alternative matched (expected {expected}), got {actual}")]
    UnionExhausted {
        /// Path of the offending value
        label: String,
        /// Summary of the alternatives that were tried
        expected: String,
        /// Actual kind found
        actual: ValueKind,
    },

    /// Generic shape passed, but a cross-field rule failed
    #[error("{label}: {reason}")]
    Refinement {
        /// Path of the event that failed the rule
        label: String,
        /// What the rule required
        reason: String,
    },
}

impl ValidationError {
    /// Returns the path label of the failure.
    pub fn label(&self) -> &str {
        match self {
            ValidationError::TypeMismatch { label, .. }
            | ValidationError::LiteralMismatch { label, .. }
            | ValidationError::MissingKey { label, .. }
            | ValidationError::UnknownKey { label, .. }
            | ValidationError::UnionExhausted { label, .. }
            | ValidationError::Refinement { label, .. } => label,
        }
    }

    /// Returns the stable code for this failure class.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::TypeMismatch { .. } => "TYPE_MISMATCH",
            ValidationError::LiteralMismatch { .. } => "LITERAL_MISMATCH",
            ValidationError::MissingKey { .. } => "MISSING_KEY",
            ValidationError::UnknownKey { .. } => "UNKNOWN_KEY",
            ValidationError::UnionExhausted { .. } => "UNION_EXHAUSTED",
            ValidationError::Refinement { .. } => "REFINEMENT_FAILED",
        }
    }
}
