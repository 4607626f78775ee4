//! Event schema catalog for eventshape
//!
//! Named schemas for the server-to-client event kinds, built through the
//! schema builder, plus the context-sensitive checks whose correctness
//! depends on more than the payload's shape.
//!
//! # Design Principles
//!
//! - Every schema goes through `EventSchema::new`; none is hand-rolled
//! - Plain schemas are pure shape; cross-field rules live in check structs
//! - Check structs run their generic schema first, refinement second
//! - Rejections on the refinement paths are logged at debug level

mod common;
mod realm;
mod settings;
mod stream;
mod subscription;

pub use common::{check_optional_value, check_value};
pub use realm::RealmUpdateCheck;
pub use settings::DisplaySettingsCheck;
pub use stream::{basic_stream_fields, stream_create_schema, StreamUpdateCheck};
pub use subscription::{
    subscription_fields, subscription_peer_add_schema, subscription_peer_remove_schema,
    subscription_remove_schema, SubscriptionAddCheck,
};
