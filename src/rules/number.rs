//! Numeric rules
//!
//! [`is_number`] is deliberately permissive: it accepts numbers, the string
//! `"0"` and anything whose loose numeric form truncates to a positive 32-bit
//! integer. Negative numeric strings and fractional strings below one fail.

use std::cmp::Ordering;

use crate::validator::{Rule, Validator};
use crate::value::{loose_compare, loose_number, to_int32, Value};

/// Validator for numeric-looking values.
#[derive(Clone, Copy, Debug, Default)]
pub struct IsNumber;

impl Validator for IsNumber {
    fn evaluate(&self, value: &Value) -> bool {
        match value {
            Value::Number(_) => true,
            Value::String(s) if s == "0" => true,
            Value::Bool(_) => false,
            other => to_int32(loose_number(other)) > 0,
        }
    }
}

/// Rule that checks the value is numeric.
///
/// # Example
///
/// ```rust
/// use sentinel::{is_number, Value};
///
/// assert!(is_number().evaluate(&Value::from(36)));
/// assert!(is_number().evaluate(&Value::from("36")));
/// assert!(!is_number().evaluate(&Value::from("36px")));
/// assert!(!is_number().evaluate(&Value::from("johndoe@example.com")));
/// ```
pub fn is_number() -> Rule {
    Rule::new(IsNumber)
}

/// Validator for values below a fixed comparer.
#[derive(Clone, Debug)]
pub struct LessThan {
    comparer: Value,
    allow_equal: bool,
}

impl LessThan {
    /// Create a strict less-than validator.
    pub fn new(comparer: impl Into<Value>) -> Self {
        Self {
            comparer: comparer.into(),
            allow_equal: false,
        }
    }

    /// Also accept values equal to the comparer.
    pub fn or_equal(mut self) -> Self {
        self.allow_equal = true;
        self
    }
}

impl Validator for LessThan {
    fn evaluate(&self, value: &Value) -> bool {
        match loose_compare(value, &self.comparer) {
            Some(Ordering::Less) => true,
            Some(Ordering::Equal) => self.allow_equal,
            _ => false,
        }
    }
}

/// Validator for values above a fixed comparer.
#[derive(Clone, Debug)]
pub struct GreaterThan {
    comparer: Value,
    allow_equal: bool,
}

impl GreaterThan {
    /// Create a strict greater-than validator.
    pub fn new(comparer: impl Into<Value>) -> Self {
        Self {
            comparer: comparer.into(),
            allow_equal: false,
        }
    }

    /// Also accept values equal to the comparer.
    pub fn or_equal(mut self) -> Self {
        self.allow_equal = true;
        self
    }
}

impl Validator for GreaterThan {
    fn evaluate(&self, value: &Value) -> bool {
        match loose_compare(value, &self.comparer) {
            Some(Ordering::Greater) => true,
            Some(Ordering::Equal) => self.allow_equal,
            _ => false,
        }
    }
}

/// Rule that checks the value is less than `comparer`.
///
/// Strings compare lexically against string comparers; every other pairing
/// compares numerically and fails on NaN.
///
/// # Example
///
/// ```rust
/// use sentinel::{is_less_than, Value};
///
/// assert!(is_less_than(10).evaluate(&Value::from(9)));
/// assert!(!is_less_than(10).evaluate(&Value::from(10)));
/// assert!(is_less_than("b").evaluate(&Value::from("a")));
/// ```
pub fn is_less_than(comparer: impl Into<Value>) -> Rule {
    Rule::new(LessThan::new(comparer))
}

/// Rule that checks the value is less than or equal to `comparer`.
///
/// # Example
///
/// ```rust
/// use sentinel::{is_less_or_equal_than, Value};
///
/// assert!(is_less_or_equal_than(10).evaluate(&Value::from(10)));
/// assert!(!is_less_or_equal_than(10).evaluate(&Value::from(11)));
/// ```
pub fn is_less_or_equal_than(comparer: impl Into<Value>) -> Rule {
    Rule::new(LessThan::new(comparer).or_equal())
}

/// Rule that checks the value is greater than `comparer`.
///
/// # Example
///
/// ```rust
/// use sentinel::{is_greater_than, Value};
///
/// assert!(is_greater_than(30).evaluate(&Value::from(36)));
/// assert!(is_greater_than(30).evaluate(&Value::from("36")));
/// assert!(!is_greater_than(30).evaluate(&Value::from("abc")));
/// ```
pub fn is_greater_than(comparer: impl Into<Value>) -> Rule {
    Rule::new(GreaterThan::new(comparer))
}

/// Rule that checks the value is greater than or equal to `comparer`.
///
/// # Example
///
/// ```rust
/// use sentinel::{is_greater_or_equal_than, Value};
///
/// assert!(is_greater_or_equal_than(18).evaluate(&Value::from(18)));
/// assert!(!is_greater_or_equal_than(18).evaluate(&Value::from(17.5)));
/// ```
pub fn is_greater_or_equal_than(comparer: impl Into<Value>) -> Rule {
    Rule::new(GreaterThan::new(comparer).or_equal())
}
