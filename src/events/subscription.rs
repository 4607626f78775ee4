//! Subscription event schemas.
//!
//! Covers the `subscription` event family: the add event carrying full
//! per-user subscription records, the lightweight peer add/remove
//! notifications, and the remove event.

use serde_json::Value;

use crate::schema::{BuildResult, EventSchema};
use crate::validator::{
    check_bool, check_dict_only, check_int, check_list, check_none_or, check_string, equals, field,
    key_path, Field, ValidationError, ValidationResult, Validator,
};

/// The fields of a subscription record: the stream record plus the
/// subscriber's personal settings for it.
pub fn subscription_fields() -> Vec<Field> {
    let mut fields = super::stream::basic_stream_fields();
    fields.extend([
        field("audible_notifications", check_none_or(check_bool())),
        field("color", check_string()),
        field("desktop_notifications", check_none_or(check_bool())),
        field("email_address", check_string()),
        field("email_notifications", check_none_or(check_bool())),
        field("in_home_view", check_bool()),
        field("is_muted", check_bool()),
        field("pin_to_top", check_bool()),
        field("push_notifications", check_none_or(check_bool())),
        field("stream_weekly_traffic", check_none_or(check_int())),
        field("wildcard_mentions_notify", check_none_or(check_bool())),
    ]);
    fields
}

/// One subscription record; `subscribers` rides along only when the
/// client asked for subscriber lists.
fn subscription_dict() -> Validator {
    check_dict_only(
        subscription_fields(),
        vec![field("subscribers", check_list(check_int()))],
    )
}

/// Context-sensitive check for `subscription/add` events.
///
/// Whether each record must carry `subscribers` depends on the client's
/// registration, which the payload does not state; callers pass that
/// context to [`SubscriptionAddCheck::check`].
#[derive(Debug, Clone)]
pub struct SubscriptionAddCheck {
    schema: EventSchema,
}

impl SubscriptionAddCheck {
    /// Builds the check.
    pub fn new() -> BuildResult<Self> {
        let schema = EventSchema::new(
            vec![
                field("type", equals("subscription")),
                field("op", equals("add")),
                field("subscriptions", check_list(subscription_dict())),
            ],
            vec![],
        )?;
        Ok(Self { schema })
    }

    /// Checks a subscription add event.
    ///
    /// `include_subscribers` states whether the receiving client asked for
    /// subscriber lists: if true every record must carry `subscribers`, if
    /// false none may.
    pub fn check(
        &self,
        label: &str,
        event: &Value,
        include_subscribers: bool,
    ) -> ValidationResult<()> {
        self.schema.check(label, event)?;

        let subscriptions = event["subscriptions"].as_array().unwrap(); // Already validated above
        for (index, subscription) in subscriptions.iter().enumerate() {
            let record = subscription.as_object().unwrap(); // Already validated above
            let has_subscribers = record.contains_key("subscribers");
            if has_subscribers == include_subscribers {
                continue;
            }
            let record_label = format!("{}[{}]", key_path(label, "subscriptions"), index);
            let reason = if include_subscribers {
                "subscribers must be present when subscriber lists were requested"
            } else {
                "subscribers must be absent when subscriber lists were not requested"
            };
            let err = ValidationError::Refinement {
                label: record_label,
                reason: reason.to_string(),
            };
            tracing::debug!(error = %err, "subscription add rejected");
            return Err(err);
        }
        Ok(())
    }
}

/// Schema for `subscription/peer_add`: another user joined a stream.
pub fn subscription_peer_add_schema() -> BuildResult<EventSchema> {
    peer_schema("peer_add")
}

/// Schema for `subscription/peer_remove`: another user left a stream.
pub fn subscription_peer_remove_schema() -> BuildResult<EventSchema> {
    peer_schema("peer_remove")
}

fn peer_schema(op: &str) -> BuildResult<EventSchema> {
    EventSchema::new(
        vec![
            field("type", equals("subscription")),
            field("op", equals(op)),
            field("user_id", check_int()),
            field("stream_id", check_int()),
        ],
        vec![],
    )
}

/// Schema for `subscription/remove`: the receiving user unsubscribed.
///
/// Only the stream's name and id are sent; the full record is gone by the
/// time the event fires.
pub fn subscription_remove_schema() -> BuildResult<EventSchema> {
    EventSchema::new(
        vec![
            field("type", equals("subscription")),
            field("op", equals("remove")),
            field(
                "subscriptions",
                check_list(check_dict_only(
                    vec![field("name", check_string()), field("stream_id", check_int())],
                    vec![],
                )),
            ),
        ],
        vec![],
    )
}
