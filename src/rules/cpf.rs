//! Brazilian CPF numbers
//!
//! A CPF has eleven digits; the last two are mod-11 check digits. Punctuation
//! is ignored, so `529.982.247-25` and `52998224725` are the same number.

use crate::validator::{Rule, Validator};
use crate::value::{is_falsy, string_form_or_empty, Value};

const CPF_LENGTH: usize = 11;

/// Passes the check-digit test but is reserved as a placeholder.
const RESERVED_SEQUENCE: [u32; CPF_LENGTH] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 0];

/// Check digit over nine digits: weighted sum with weights 1..=9, mod 11,
/// mod 10.
pub(crate) fn check_digit(digits: &[u32]) -> u32 {
    digits
        .iter()
        .zip(1..)
        .map(|(digit, weight)| digit * weight)
        .sum::<u32>()
        % 11
        % 10
}

/// Validator for CPF numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cpf {
    required: bool,
}

impl Cpf {
    /// Create a CPF validator.
    ///
    /// `required` only adds the falsy-value check; a blank value still fails
    /// the length check when the CPF is optional.
    pub fn new(required: bool) -> Self {
        Self { required }
    }
}

impl Default for Cpf {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Validator for Cpf {
    fn evaluate(&self, value: &Value) -> bool {
        if self.required && is_falsy(value) {
            return false;
        }
        let digits: Vec<u32> = string_form_or_empty(value)
            .chars()
            .filter_map(|c| c.to_digit(10))
            .collect();
        if digits.len() != CPF_LENGTH
            || digits.iter().all(|&d| d == digits[0])
            || digits == RESERVED_SEQUENCE
        {
            return false;
        }
        check_digit(&digits[..9]) == digits[9] && check_digit(&digits[1..10]) == digits[10]
    }
}

/// Rule that checks the value is a valid CPF.
///
/// # Example
///
/// ```rust
/// use sentinel::{is_cpf_valid, Value};
///
/// assert!(is_cpf_valid(true).evaluate(&Value::from("529.982.247-25")));
/// assert!(!is_cpf_valid(true).evaluate(&Value::from("529.982.247-26")));
/// assert!(!is_cpf_valid(true).evaluate(&Value::from("")));
/// assert!(!is_cpf_valid(false).evaluate(&Value::from("")));
/// ```
pub fn is_cpf_valid(required: bool) -> Rule {
    Rule::new(Cpf::new(required))
}
