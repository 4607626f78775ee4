//! Event schema builder subsystem for eventshape
//!
//! # Design Principles
//!
//! - Preconditions checked at build time, never during validation
//! - Every event schema requires a `"type"` discriminator
//! - The integer `"id"` field is injected, never declared
//! - Key sets are closed; undeclared keys abort validation

mod errors;
mod event;

pub use errors::{BuildError, BuildResult};
pub use event::EventSchema;
