//! eventshape - structural validation for server-to-client event payloads
//!
//! Composable shape checks over untyped value trees, an event schema
//! builder with build-time preconditions, and context-sensitive checks
//! for the event kinds whose correctness spans multiple fields.

pub mod events;
pub mod registry;
pub mod schema;
pub mod validator;
