//! Length rules
//!
//! Lengths are counted in characters of the value's string form. Values with
//! no string form (`Null`) fail the bounded checks; the exact-length check
//! treats them as the empty string.

use crate::validator::{Rule, Validator};
use crate::value::{string_form, string_form_or_empty, Value};

/// Validator that checks the string-form length falls within bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LengthBounds {
    min: Option<usize>,
    max: Option<usize>,
}

impl LengthBounds {
    /// Both bounds, inclusive.
    pub fn between(min: usize, max: usize) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Lower bound only, inclusive.
    pub fn at_least(min: usize) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Upper bound only, inclusive.
    pub fn at_most(max: usize) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }
}

impl Validator for LengthBounds {
    fn evaluate(&self, value: &Value) -> bool {
        let Some(text) = string_form(value) else {
            return false;
        };
        let len = text.chars().count();
        self.min.is_none_or(|min| len >= min) && self.max.is_none_or(|max| len <= max)
    }
}

/// Validator that checks the string-form length is exactly `size`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExactLength {
    size: usize,
}

impl Validator for ExactLength {
    fn evaluate(&self, value: &Value) -> bool {
        string_form_or_empty(value).chars().count() == self.size
    }
}

/// Rule that checks the value has at least `min` characters.
///
/// # Example
///
/// ```rust
/// use sentinel::{has_min_length, Value};
///
/// assert!(has_min_length(3).evaluate(&Value::from("abc")));
/// assert!(has_min_length(3).evaluate(&Value::from(12345)));
/// assert!(!has_min_length(3).evaluate(&Value::from("ab")));
/// assert!(!has_min_length(0).evaluate(&Value::Null));
/// ```
pub fn has_min_length(min: usize) -> Rule {
    Rule::new(LengthBounds::at_least(min))
}

/// Rule that checks the value has at most `max` characters.
///
/// # Example
///
/// ```rust
/// use sentinel::{has_max_length, Value};
///
/// assert!(has_max_length(5).evaluate(&Value::from("hello")));
/// assert!(!has_max_length(5).evaluate(&Value::from("toolong")));
/// ```
pub fn has_max_length(max: usize) -> Rule {
    Rule::new(LengthBounds::at_most(max))
}

/// Rule that checks the value has between `min` and `max` characters.
///
/// # Example
///
/// ```rust
/// use sentinel::{has_min_max_length, Value};
///
/// let p = has_min_max_length(10, 13);
/// assert!(p.evaluate(&Value::from("0123456789")));
/// assert!(!p.evaluate(&Value::from("johndoe@example.com")));
/// ```
pub fn has_min_max_length(min: usize, max: usize) -> Rule {
    Rule::new(LengthBounds::between(min, max))
}

/// Rule that checks the value has exactly `size` characters.
///
/// # Example
///
/// ```rust
/// use sentinel::{has_exact_length, Value};
///
/// assert!(has_exact_length(5).evaluate(&Value::from("12345")));
/// assert!(has_exact_length(0).evaluate(&Value::Null));
/// ```
pub fn has_exact_length(size: usize) -> Rule {
    Rule::new(ExactLength { size })
}
