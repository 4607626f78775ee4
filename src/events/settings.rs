//! Display settings update event schema.
//!
//! A display settings update names a user setting and its new value. The
//! legal value type comes from the host's user-settings declarations, and
//! the human-readable `language_name` accompanies exactly one setting:
//! `default_language`.

use serde_json::Value;

use crate::registry::PropertyRegistry;
use crate::schema::{BuildResult, EventSchema};
use crate::validator::{
    check_string, equals, field, key_path, kind_of, ValidationError, ValidationResult,
};

use super::common::check_value;

/// Context-sensitive check for `update_display_settings` events.
#[derive(Debug, Clone)]
pub struct DisplaySettingsCheck {
    schema: EventSchema,
    settings: PropertyRegistry,
}

impl DisplaySettingsCheck {
    /// Builds the check around the host's user-setting declarations.
    pub fn new(settings: PropertyRegistry) -> BuildResult<Self> {
        let schema = EventSchema::new(
            vec![
                field("type", equals("update_display_settings")),
                field("setting_name", check_string()),
                field("setting", check_value()),
                field("user", check_string()),
            ],
            vec![field("language_name", check_string())],
        )?;
        Ok(Self { schema, settings })
    }

    /// Checks a display settings update event.
    ///
    /// After the generic schema: the setting must be declared, the value
    /// must have its declared type, and `language_name` must be present
    /// if and only if the setting is `default_language`.
    pub fn check(&self, label: &str, event: &Value) -> ValidationResult<()> {
        self.schema.check(label, event)?;

        let obj = event.as_object().unwrap(); // Already validated above
        let setting_name = obj["setting_name"].as_str().unwrap(); // Already validated above
        let setting = &obj["setting"];

        let Some(setting_type) = self.settings.get(setting_name) else {
            return Err(reject(
                key_path(label, "setting_name"),
                format!("unknown setting '{}'", setting_name),
            ));
        };
        if !setting_type.accepts(setting) {
            return Err(reject(
                key_path(label, "setting"),
                format!(
                    "setting '{}' expects {}, got {}",
                    setting_name,
                    setting_type.expected(),
                    kind_of(setting)
                ),
            ));
        }

        let has_language_name = obj.contains_key("language_name");
        if setting_name == "default_language" && !has_language_name {
            return Err(reject(
                label.to_string(),
                "language_name must accompany default_language".to_string(),
            ));
        }
        if setting_name != "default_language" && has_language_name {
            return Err(reject(
                label.to_string(),
                format!("language_name does not accompany '{}'", setting_name),
            ));
        }
        Ok(())
    }
}

fn reject(label: String, reason: String) -> ValidationError {
    let err = ValidationError::Refinement { label, reason };
    tracing::debug!(error = %err, "display settings update rejected");
    err
}
