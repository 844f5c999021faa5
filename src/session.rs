//! Validation sessions
//!
//! A [`Session`] is one validation request: it takes the subject and the
//! validator arguments, computes the verdict once at construction and then
//! answers [`is_valid`](Session::is_valid) / [`is_invalid`](Session::is_invalid)
//! without re-evaluating.

use crate::engine::ValidatorSet;
use crate::value::Value;

/// The verdict of validating one value.
///
/// # Example
///
/// ```rust
/// use sentinel::{all, any, has_min_max_length, is_email, is_greater_than, is_number, Session};
///
/// assert!(Session::new(36, [is_number(), is_greater_than(30)]).is_valid());
/// assert!(Session::new("36px", is_number()).is_invalid());
/// assert!(Session::new(36, any([is_email(), is_greater_than(30)])).is_valid());
/// assert!(Session::new(
///     "johndoe@example.com",
///     all([is_email(), has_min_max_length(10, 13)]),
/// )
/// .is_invalid());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    value: Value,
    valid: bool,
}

impl Session {
    /// Validate `value` against `validators`.
    ///
    /// `validators` may be a single rule, a list or array of rules (flattened
    /// one level) or a composite built with [`all`](crate::all) /
    /// [`any`](crate::any). An empty argument list is invalid.
    pub fn new(value: impl Into<Value>, validators: impl Into<ValidatorSet>) -> Self {
        let value = value.into();
        let set = validators.into();
        let valid = set.evaluate(&value);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            mode = set.mode().as_str(),
            rules = set.len(),
            valid,
            "validation session evaluated"
        );

        Self { value, valid }
    }

    /// Validate and return the verdict directly.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sentinel::{is_zip_code_valid, Session};
    ///
    /// assert!(Session::validate("12345-678", is_zip_code_valid()));
    /// ```
    pub fn validate(value: impl Into<Value>, validators: impl Into<ValidatorSet>) -> bool {
        Self::new(value, validators).is_valid()
    }

    /// Returns true if the value passed.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns true if the value failed.
    #[inline]
    pub fn is_invalid(&self) -> bool {
        !self.valid
    }

    /// The validated value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Consume the session, returning the validated value.
    pub fn into_value(self) -> Value {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{is_email, is_number, is_required};
    use crate::testing::Counting;
    use crate::validator::Rule;
    use serde_json::json;

    #[test]
    fn test_single_rule() {
        assert!(Session::new(36, is_number()).is_valid());
        assert!(Session::new("johndoe@example.com", is_number()).is_invalid());
    }

    #[test]
    fn test_empty_arguments_are_invalid() {
        let session = Session::new(36, Vec::<Rule>::new());
        assert!(!session.is_valid());
        assert!(session.is_invalid());
    }

    #[test]
    fn test_verdict_computed_once() {
        let counter = Counting::passing();
        let session = Session::new(json!("x"), counter.rule());
        assert_eq!(counter.calls(), 1);
        assert!(session.is_valid());
        assert!(session.is_valid());
        assert!(!session.is_invalid());
        assert_eq!(counter.calls(), 1);
    }

    #[test]
    fn test_value_accessors() {
        let session = Session::new("johndoe@example.com", [is_required(), is_email()]);
        assert_eq!(session.value(), &json!("johndoe@example.com"));
        assert_eq!(session.into_value(), json!("johndoe@example.com"));
    }

    #[test]
    fn test_null_subject() {
        assert!(Session::new(Value::Null, is_required()).is_invalid());
        assert!(Session::new(json!(0), is_required()).is_valid());
    }

    #[test]
    fn test_validate_shorthand() {
        assert!(Session::validate(36, [is_number()]));
        assert!(!Session::validate("x", [is_number()]));
    }

    #[cfg(feature = "tracing")]
    mod tracing_tests {
        use super::*;
        use tracing_test::traced_test;

        #[traced_test]
        #[test]
        fn logs_verdict() {
            let session = Session::new(36, is_number());
            assert!(session.is_valid());
            assert!(logs_contain("validation session evaluated"));
            assert!(logs_contain("valid=true"));
        }
    }
}
