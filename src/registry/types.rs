//! Property type declarations
//!
//! Declared types:
//! - bool: Boolean
//! - int: 64-bit integer
//! - string: UTF-8 string
//! - int_or_null: integer or null
//! - string_or_null: string or null

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validator::{kind_of, ValueKind};

/// Declared value type of a registered property.
///
/// A closed enumeration: every property a host registers carries exactly
/// one of these, and the refinement checks match on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    /// Boolean
    Bool,
    /// 64-bit integer
    Int,
    /// UTF-8 string
    String,
    /// Integer or null
    IntOrNull,
    /// String or null
    StringOrNull,
}

impl PropertyType {
    /// Returns whether `value` has the declared type.
    ///
    /// Kind-exact: booleans never pass as integers, floats never pass as
    /// integers.
    pub fn accepts(&self, value: &Value) -> bool {
        let kind = kind_of(value);
        match self {
            PropertyType::Bool => kind == ValueKind::Bool,
            PropertyType::Int => kind == ValueKind::Int,
            PropertyType::String => kind == ValueKind::String,
            PropertyType::IntOrNull => kind == ValueKind::Int || kind == ValueKind::Null,
            PropertyType::StringOrNull => kind == ValueKind::String || kind == ValueKind::Null,
        }
    }

    /// Returns the expected-shape description for error messages.
    pub fn expected(&self) -> &'static str {
        match self {
            PropertyType::Bool => "bool",
            PropertyType::Int => "int",
            PropertyType::String => "string",
            PropertyType::IntOrNull => "int | null",
            PropertyType::StringOrNull => "string | null",
        }
    }
}

/// Who may post to a stream.
///
/// The wire values are the platform's fixed integers; anything outside the
/// enumeration is an illegal `stream_post_policy` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamPostPolicy {
    /// Any member may post
    Everyone,
    /// Only administrators may post
    AdminsOnly,
    /// New members may not post
    RestrictNewMembers,
}

impl StreamPostPolicy {
    /// Every legal policy, in wire-value order.
    pub const ALL: [StreamPostPolicy; 3] = [
        StreamPostPolicy::Everyone,
        StreamPostPolicy::AdminsOnly,
        StreamPostPolicy::RestrictNewMembers,
    ];

    /// Returns the policy's wire value.
    pub fn as_i64(&self) -> i64 {
        match self {
            StreamPostPolicy::Everyone => 1,
            StreamPostPolicy::AdminsOnly => 2,
            StreamPostPolicy::RestrictNewMembers => 3,
        }
    }

    /// Looks up the policy for a wire value.
    pub fn from_i64(raw: i64) -> Option<StreamPostPolicy> {
        match raw {
            1 => Some(StreamPostPolicy::Everyone),
            2 => Some(StreamPostPolicy::AdminsOnly),
            3 => Some(StreamPostPolicy::RestrictNewMembers),
            _ => None,
        }
    }
}
