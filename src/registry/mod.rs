//! Property registry subsystem for eventshape
//!
//! # Design Principles
//!
//! - Declared types are a closed enumeration
//! - Hosts populate registries; this crate defines the types
//! - Lookup is exact; a missing name fails in the consuming check
//! - Registries are treated as immutable once a check holds one

mod properties;
mod types;

pub use properties::PropertyRegistry;
pub use types::{PropertyType, StreamPostPolicy};
