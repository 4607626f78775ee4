//! Event schema builder
//!
//! Every event shares two conventions: a `"type"` string discriminator the
//! producer always sets, and an integer `"id"` assigned by the delivery
//! queue. The builder bakes both into a closed dict check and rejects
//! malformed field lists up front, so a schema that constructs is a schema
//! that can be trusted at check time.

use std::collections::HashSet;

use serde_json::Value;

use crate::validator::{check_dict_only, check_int, field, Field, ValidationResult, Validator};

use super::errors::{BuildError, BuildResult};

/// A closed-shape check for one event kind.
///
/// Built once from field lists and reused for every event of that kind.
/// The key set always contains `"type"` (declared) and `"id"` (injected).
#[derive(Debug, Clone)]
pub struct EventSchema {
    validator: Validator,
}

impl EventSchema {
    /// Assembles an event schema from required and optional field lists.
    ///
    /// Preconditions, checked here and never at validation time:
    /// - no key is declared twice across the two lists
    /// - the required list declares `"type"`
    /// - neither list declares `"id"`; the builder injects `("id", int)`
    pub fn new(required: Vec<Field>, optional: Vec<Field>) -> BuildResult<Self> {
        let mut seen: HashSet<String> = HashSet::new();
        for declared in required.iter().chain(optional.iter()) {
            if !seen.insert(declared.name.clone()) {
                return Err(BuildError::DuplicateKey {
                    key: declared.name.clone(),
                });
            }
        }
        if !required.iter().any(|declared| declared.name == "type") {
            return Err(BuildError::MissingTypeKey);
        }
        if seen.contains("id") {
            return Err(BuildError::ReservedIdKey);
        }

        let mut required = required;
        required.push(field("id", check_int()));
        Ok(Self {
            validator: check_dict_only(required, optional),
        })
    }

    /// Checks an event against the schema.
    ///
    /// `label` names the event in failure messages, typically the event
    /// kind such as `"stream_create"`.
    pub fn check(&self, label: &str, event: &Value) -> ValidationResult<()> {
        self.validator.validate(label, event)
    }

    /// Returns the underlying dict check.
    ///
    /// Useful where a schema participates in a larger composition, such as
    /// a list of event payloads.
    pub fn validator(&self) -> &Validator {
        &self.validator
    }
}
