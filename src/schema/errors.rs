//! Schema construction error types
//!
//! Error codes:
//! - DUPLICATE_KEY
//! - MISSING_TYPE_KEY
//! - RESERVED_ID_KEY
//!
//! These surface schema-authoring mistakes when the schema is assembled,
//! before any event is checked. They are a separate type from validation
//! errors so a bad schema can never be mistaken for a bad event.

use thiserror::Error;

/// Result type for schema construction
pub type BuildResult<T> = Result<T, BuildError>;

/// An event schema that violates the builder's preconditions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The same key is declared twice across the required and optional lists
    #[error("duplicate key '{key}' in field lists")]
    DuplicateKey {
        /// Offending key name
        key: String,
    },

    /// Event schemas must declare a required "type" discriminator
    #[error("required fields must include 'type'")]
    MissingTypeKey,

    /// The "id" field is injected by the builder and may not be declared
    #[error("'id' is reserved and injected automatically")]
    ReservedIdKey,
}

impl BuildError {
    /// Returns the stable string code for this error
    pub fn code(&self) -> &'static str {
        match self {
            BuildError::DuplicateKey { .. } => "DUPLICATE_KEY",
            BuildError::MissingTypeKey => "MISSING_TYPE_KEY",
            BuildError::ReservedIdKey => "RESERVED_ID_KEY",
        }
    }
}
