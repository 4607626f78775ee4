//! Shared checks for flexible setting values.
//!
//! Update events carry a `value` (or `setting`) field whose concrete type
//! depends on the property being updated; the generic schemas admit any of
//! the scalar kinds and leave the exact kind to the refinement pass.

use serde_json::Value;

use crate::validator::{check_bool, check_int, check_string, check_union, equals, Validator};

/// Accepts a scalar setting value: bool, int, or string.
pub fn check_value() -> Validator {
    check_union(vec![check_bool(), check_int(), check_string()])
}

/// Accepts a scalar setting value or null.
pub fn check_optional_value() -> Validator {
    check_union(vec![
        check_bool(),
        check_int(),
        check_string(),
        equals(Value::Null),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_check_value_scalars_only() {
        let checker = check_value();
        assert!(checker.validate("v", &json!(true)).is_ok());
        assert!(checker.validate("v", &json!(30)).is_ok());
        assert!(checker.validate("v", &json!("compact")).is_ok());
        assert!(checker.validate("v", &json!(null)).is_err());
        assert!(checker.validate("v", &json!(1.5)).is_err());
        assert!(checker.validate("v", &json!([1])).is_err());
        assert!(checker.validate("v", &json!({})).is_err());
    }

    #[test]
    fn test_check_optional_value_adds_null() {
        let checker = check_optional_value();
        assert!(checker.validate("v", &json!(null)).is_ok());
        assert!(checker.validate("v", &json!(false)).is_ok());
        assert!(checker.validate("v", &json!(0)).is_ok());
        assert!(checker.validate("v", &json!("")).is_ok());
        assert!(checker.validate("v", &json!(2.5)).is_err());
        assert!(checker.validate("v", &json!([null])).is_err());
    }
}
