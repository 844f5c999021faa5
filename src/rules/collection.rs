//! Membership rules

use crate::validator::{Rule, Validator};
use crate::value::{strict_equals, Value};

/// Validator that checks the value is one of a fixed set of allowed values.
#[derive(Clone, Debug, Default)]
pub struct InArray {
    allowed: Vec<Value>,
}

impl InArray {
    /// Create a membership validator.
    pub fn new<I>(allowed: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    /// The allowed values.
    pub fn allowed(&self) -> &[Value] {
        &self.allowed
    }
}

impl Validator for InArray {
    fn evaluate(&self, value: &Value) -> bool {
        self.allowed.iter().any(|allowed| strict_equals(allowed, value))
    }
}

/// Rule that checks the value strictly equals one of `allowed`.
///
/// # Example
///
/// ```rust
/// use sentinel::{in_array, Value};
///
/// let sizes = in_array([1, 2, 3]);
/// assert!(sizes.evaluate(&Value::from(2)));
/// assert!(!sizes.evaluate(&Value::from("2")));
/// ```
pub fn in_array<I>(allowed: I) -> Rule
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    Rule::new(InArray::new(allowed))
}
