//! Stream event schemas.
//!
//! Covers the `stream` event family: the creation event carrying full
//! stream records, and the update event whose shape depends on which
//! property changed.

use std::collections::BTreeSet;

use serde_json::Value;

use crate::registry::{PropertyType, StreamPostPolicy};
use crate::schema::{BuildResult, EventSchema};
use crate::validator::{
    check_bool, check_dict_only, check_int, check_list, check_none_or, check_string, equals, field,
    key_path, kind_of, Field, ValidationError, ValidationResult,
};

use super::common::check_optional_value;

/// Keys every stream update event carries regardless of the property.
const BASE_KEYS: [&str; 7] = ["id", "type", "op", "property", "value", "name", "stream_id"];

/// The fields of a stream record as delivered to every client.
///
/// `message_retention_days` is pinned to null until retention ships on
/// this event; `stream_post_policy` is an integer here and range-checked
/// only where a policy change is being applied.
pub fn basic_stream_fields() -> Vec<Field> {
    vec![
        field("description", check_string()),
        field("first_message_id", check_none_or(check_int())),
        field("history_public_to_subscribers", check_bool()),
        field("invite_only", check_bool()),
        field("is_announcement_only", check_bool()),
        field("is_web_public", check_bool()),
        field("message_retention_days", equals(Value::Null)),
        field("name", check_string()),
        field("rendered_description", check_string()),
        field("stream_id", check_int()),
        field("stream_post_policy", check_int()),
    ]
}

/// Schema for `stream/create`: a batch of newly created stream records.
pub fn stream_create_schema() -> BuildResult<EventSchema> {
    EventSchema::new(
        vec![
            field("type", equals("stream")),
            field("op", equals("create")),
            field(
                "streams",
                check_list(check_dict_only(basic_stream_fields(), vec![])),
            ),
        ],
        vec![],
    )
}

/// Context-sensitive check for `stream/update` events.
///
/// The generic schema admits any property name and any scalar-or-null
/// value; the second pass dispatches on the property to pin down the
/// value's type and which companion keys must ride along.
#[derive(Debug, Clone)]
pub struct StreamUpdateCheck {
    schema: EventSchema,
}

impl StreamUpdateCheck {
    /// Builds the check.
    pub fn new() -> BuildResult<Self> {
        let schema = EventSchema::new(
            vec![
                field("type", equals("stream")),
                field("op", equals("update")),
                field("property", check_string()),
                field("value", check_optional_value()),
                field("name", check_string()),
                field("stream_id", check_int()),
            ],
            vec![
                field("rendered_description", check_string()),
                field("history_public_to_subscribers", check_bool()),
            ],
        )?;
        Ok(Self { schema })
    }

    /// Checks a stream update event.
    pub fn check(&self, label: &str, event: &Value) -> ValidationResult<()> {
        self.schema.check(label, event)?;

        let obj = event.as_object().unwrap(); // Already validated above
        let property = obj["property"].as_str().unwrap(); // Already validated above
        let value = &obj["value"];

        let extras: BTreeSet<&str> = obj
            .keys()
            .map(String::as_str)
            .filter(|key| !BASE_KEYS.contains(key))
            .collect();

        match property {
            "description" => {
                expect_extras(label, property, &extras, &["rendered_description"])?;
                expect_value(label, property, value, PropertyType::String)
            }
            "email_address" => {
                expect_extras(label, property, &extras, &[])?;
                expect_value(label, property, value, PropertyType::String)
            }
            "invite_only" => {
                expect_extras(label, property, &extras, &["history_public_to_subscribers"])?;
                expect_value(label, property, value, PropertyType::Bool)
            }
            "message_retention_days" => {
                expect_extras(label, property, &extras, &[])?;
                expect_value(label, property, value, PropertyType::IntOrNull)
            }
            "name" => {
                expect_extras(label, property, &extras, &[])?;
                expect_value(label, property, value, PropertyType::String)
            }
            "stream_post_policy" => {
                expect_extras(label, property, &extras, &[])?;
                expect_post_policy(label, value)
            }
            other => Err(reject(
                key_path(label, "property"),
                format!("unknown property '{}'", other),
            )),
        }
    }
}

/// Requires the update to carry exactly the companion keys the property
/// calls for.
fn expect_extras(
    label: &str,
    property: &str,
    extras: &BTreeSet<&str>,
    expected: &[&str],
) -> ValidationResult<()> {
    let expected_set: BTreeSet<&str> = expected.iter().copied().collect();
    if *extras == expected_set {
        return Ok(());
    }
    Err(reject(
        label.to_string(),
        format!(
            "property '{}' must carry companion keys [{}], found [{}]",
            property,
            expected.join(", "),
            extras.iter().copied().collect::<Vec<_>>().join(", ")
        ),
    ))
}

/// Requires the update's value to have the type the property calls for.
fn expect_value(
    label: &str,
    property: &str,
    value: &Value,
    expected: PropertyType,
) -> ValidationResult<()> {
    if expected.accepts(value) {
        return Ok(());
    }
    Err(reject(
        key_path(label, "value"),
        format!(
            "property '{}' expects {}, got {}",
            property,
            expected.expected(),
            kind_of(value)
        ),
    ))
}

/// Requires the value to be a legal stream post policy.
fn expect_post_policy(label: &str, value: &Value) -> ValidationResult<()> {
    if value.as_i64().and_then(StreamPostPolicy::from_i64).is_some() {
        return Ok(());
    }
    Err(reject(
        key_path(label, "value"),
        format!(
            "property 'stream_post_policy' expects a legal policy, got {}",
            value
        ),
    ))
}

fn reject(label: String, reason: String) -> ValidationError {
    let err = ValidationError::Refinement { label, reason };
    tracing::debug!(error = %err, "stream update rejected");
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_stream() -> Value {
        json!({
            "description": "Dev chatter",
            "first_message_id": null,
            "history_public_to_subscribers": false,
            "invite_only": false,
            "is_announcement_only": false,
            "is_web_public": false,
            "message_retention_days": null,
            "name": "devel",
            "rendered_description": "<p>Dev chatter</p>",
            "stream_id": 14,
            "stream_post_policy": 1,
        })
    }

    fn update_event(property: &str, value: Value) -> Value {
        json!({
            "id": 5,
            "type": "stream",
            "op": "update",
            "property": property,
            "value": value,
            "name": "devel",
            "stream_id": 14,
        })
    }

    fn with_key(mut event: Value, key: &str, value: Value) -> Value {
        event
            .as_object_mut()
            .unwrap()
            .insert(key.to_string(), value);
        event
    }

    #[test]
    fn test_stream_create_accepts_full_record() {
        let schema = stream_create_schema().unwrap();
        let event = json!({
            "id": 1,
            "type": "stream",
            "op": "create",
            "streams": [sample_stream()],
        });
        assert!(schema.check("stream_create", &event).is_ok());
    }

    #[test]
    fn test_stream_create_rejects_incomplete_record() {
        let schema = stream_create_schema().unwrap();
        let mut stream = sample_stream();
        stream.as_object_mut().unwrap().remove("invite_only");
        let event = json!({
            "id": 1,
            "type": "stream",
            "op": "create",
            "streams": [sample_stream(), stream],
        });
        let err = schema.check("stream_create", &event).unwrap_err();
        assert_eq!(err.code(), "MISSING_KEY");
        assert_eq!(err.label(), "stream_create.streams[1]");
    }

    #[test]
    fn test_stream_create_rejects_undeclared_record_key() {
        let schema = stream_create_schema().unwrap();
        let stream = with_key(sample_stream(), "subscriber_count", json!(12));
        let event = json!({
            "id": 1,
            "type": "stream",
            "op": "create",
            "streams": [stream],
        });
        let err = schema.check("stream_create", &event).unwrap_err();
        assert_eq!(err.code(), "UNKNOWN_KEY");
    }

    #[test]
    fn test_stream_create_retention_pinned_to_null() {
        let schema = stream_create_schema().unwrap();
        let stream = with_key(sample_stream(), "message_retention_days", json!(30));
        let event = json!({
            "id": 1,
            "type": "stream",
            "op": "create",
            "streams": [stream],
        });
        let err = schema.check("stream_create", &event).unwrap_err();
        assert_eq!(err.code(), "LITERAL_MISMATCH");
    }

    #[test]
    fn test_update_description_needs_rendering() {
        let check = StreamUpdateCheck::new().unwrap();
        let event = with_key(
            update_event("description", json!("New topic")),
            "rendered_description",
            json!("<p>New topic</p>"),
        );
        assert!(check.check("stream_update", &event).is_ok());

        let bare = update_event("description", json!("New topic"));
        let err = check.check("stream_update", &bare).unwrap_err();
        assert_eq!(err.code(), "REFINEMENT_FAILED");
        assert!(err.to_string().contains("rendered_description"));
    }

    #[test]
    fn test_update_email_address() {
        let check = StreamUpdateCheck::new().unwrap();
        let event = update_event("email_address", json!("devel@example.com"));
        assert!(check.check("stream_update", &event).is_ok());

        let err = check
            .check("stream_update", &update_event("email_address", json!(7)))
            .unwrap_err();
        assert_eq!(err.label(), "stream_update.value");
    }

    #[test]
    fn test_update_invite_only_needs_history_flag() {
        let check = StreamUpdateCheck::new().unwrap();
        let event = with_key(
            update_event("invite_only", json!(true)),
            "history_public_to_subscribers",
            json!(false),
        );
        assert!(check.check("stream_update", &event).is_ok());

        let bare = update_event("invite_only", json!(true));
        assert!(check.check("stream_update", &bare).is_err());
    }

    #[test]
    fn test_update_retention_takes_int_or_null() {
        let check = StreamUpdateCheck::new().unwrap();
        let days = update_event("message_retention_days", json!(90));
        assert!(check.check("stream_update", &days).is_ok());
        let forever = update_event("message_retention_days", json!(null));
        assert!(check.check("stream_update", &forever).is_ok());

        let err = check
            .check(
                "stream_update",
                &update_event("message_retention_days", json!("90")),
            )
            .unwrap_err();
        assert!(err.to_string().contains("int | null"));
    }

    #[test]
    fn test_update_name_takes_string() {
        let check = StreamUpdateCheck::new().unwrap();
        assert!(check
            .check("stream_update", &update_event("name", json!("design")))
            .is_ok());
        assert!(check
            .check("stream_update", &update_event("name", json!(true)))
            .is_err());
    }

    #[test]
    fn test_update_name_allows_no_companions() {
        let check = StreamUpdateCheck::new().unwrap();
        let event = with_key(
            update_event("name", json!("design")),
            "rendered_description",
            json!("<p></p>"),
        );
        let err = check.check("stream_update", &event).unwrap_err();
        assert_eq!(err.code(), "REFINEMENT_FAILED");
    }

    #[test]
    fn test_update_post_policy_range() {
        let check = StreamUpdateCheck::new().unwrap();
        for raw in 1..=3 {
            let event = update_event("stream_post_policy", json!(raw));
            assert!(check.check("stream_update", &event).is_ok());
        }
        for bad in [json!(0), json!(4), json!("everyone"), json!(null)] {
            let event = update_event("stream_post_policy", bad);
            let err = check.check("stream_update", &event).unwrap_err();
            assert_eq!(err.code(), "REFINEMENT_FAILED");
        }
    }

    #[test]
    fn test_update_unknown_property() {
        let check = StreamUpdateCheck::new().unwrap();
        let err = check
            .check("stream_update", &update_event("color", json!("#fff")))
            .unwrap_err();
        assert_eq!(err.code(), "REFINEMENT_FAILED");
        assert!(err.to_string().contains("unknown property 'color'"));
    }

    #[test]
    fn test_update_schema_rejects_undeclared_key_first() {
        let check = StreamUpdateCheck::new().unwrap();
        let event = with_key(update_event("name", json!("x")), "bogus", json!(true));
        let err = check.check("stream_update", &event).unwrap_err();
        assert_eq!(err.code(), "UNKNOWN_KEY");
    }
}
