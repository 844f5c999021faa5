//! Presence rules

use crate::validator::{Rule, Validator};
use crate::value::Value;

/// Validator that passes any value except `Null`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Required;

impl Validator for Required {
    #[inline]
    fn evaluate(&self, value: &Value) -> bool {
        !value.is_null()
    }
}

/// Rule that checks the value is present.
///
/// # Example
///
/// ```rust
/// use sentinel::{is_required, Value};
///
/// assert!(is_required().evaluate(&Value::from(0)));
/// assert!(is_required().evaluate(&Value::from("")));
/// assert!(!is_required().evaluate(&Value::Null));
/// ```
pub fn is_required() -> Rule {
    Rule::new(Required)
}

/// Alias for [`is_required`].
pub fn is_present() -> Rule {
    is_required()
}

/// Alias for [`is_required`].
pub fn has_value() -> Rule {
    is_required()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_required() {
        assert!(Required.evaluate(&json!(false)));
        assert!(Required.evaluate(&json!([])));
        assert!(!Required.evaluate(&json!(null)));
    }

    #[test]
    fn test_aliases() {
        for rule in [is_required(), is_present(), has_value()] {
            assert!(rule.evaluate(&json!("x")));
            assert!(!rule.evaluate(&json!(null)));
        }
    }
}
