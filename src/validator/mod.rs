//! Validator combinator engine for eventshape
//!
//! Small composable checks over untyped value trees, combined into schemas
//! by the `schema` module.
//!
//! # Design Principles
//!
//! - Exact kind matching; no coercion between bool, int, float, string
//! - Integers and floats are distinct kinds
//! - First failure wins; errors carry the path to the offending value
//! - Checks are immutable trees, built once and reused
//! - Deterministic validation

mod checks;
mod errors;
mod value;

pub use checks::{
    check_bool, check_dict, check_dict_only, check_int, check_list, check_none_or, check_string,
    check_union, equals, field, Field, Validator,
};
pub(crate) use checks::key_path;
pub use errors::{ValidationError, ValidationResult};
pub use value::{kind_of, ValueKind};
