//! Realm update event schema.
//!
//! A realm update names a property and its new value; which value type is
//! legal depends on the property, declared by the host in a
//! [`PropertyRegistry`].

use serde_json::Value;

use crate::registry::PropertyRegistry;
use crate::schema::{BuildResult, EventSchema};
use crate::validator::{
    check_string, equals, field, key_path, kind_of, ValidationError, ValidationResult,
};

use super::common::check_value;

/// Context-sensitive check for `realm/update` events.
#[derive(Debug, Clone)]
pub struct RealmUpdateCheck {
    schema: EventSchema,
    properties: PropertyRegistry,
}

impl RealmUpdateCheck {
    /// Builds the check around the host's realm property declarations.
    pub fn new(properties: PropertyRegistry) -> BuildResult<Self> {
        let schema = EventSchema::new(
            vec![
                field("type", equals("realm")),
                field("op", equals("update")),
                field("property", check_string()),
                field("value", check_value()),
            ],
            vec![],
        )?;
        Ok(Self { schema, properties })
    }

    /// Checks a realm update event.
    ///
    /// After the generic schema, the property must be declared in the
    /// registry and the value must have its declared type.
    pub fn check(&self, label: &str, event: &Value) -> ValidationResult<()> {
        self.schema.check(label, event)?;

        let obj = event.as_object().unwrap(); // Already validated above
        let property = obj["property"].as_str().unwrap(); // Already validated above
        let value = &obj["value"];

        let Some(property_type) = self.properties.get(property) else {
            return Err(reject(
                key_path(label, "property"),
                format!("unknown property '{}'", property),
            ));
        };
        if !property_type.accepts(value) {
            return Err(reject(
                key_path(label, "value"),
                format!(
                    "property '{}' expects {}, got {}",
                    property,
                    property_type.expected(),
                    kind_of(value)
                ),
            ));
        }
        Ok(())
    }
}

fn reject(label: String, reason: String) -> ValidationError {
    let err = ValidationError::Refinement { label, reason };
    tracing::debug!(error = %err, "realm update rejected");
    err
}
