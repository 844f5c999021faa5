//! Text format rules: email, password complexity, postal codes and
//! caller-supplied patterns.
//!
//! All of these check the value's string form; `Null` never matches.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::RuleError;
use crate::validator::{Rule, Validator};
use crate::value::{string_form, Value};

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?\.)+[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?$",
    )
    .expect("email pattern compiles")
});

static US_ZIP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}(?:-[0-9]{4})?$").expect("US zip pattern compiles"));

static BR_ZIP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}-?[0-9]{3}$").expect("BR zip pattern compiles"));

const EMAIL_LENGTH: std::ops::RangeInclusive<usize> = 6..=254;
const LOCAL_PART_MAX: usize = 64;
const DOMAIN_LABEL_MAX: usize = 63;
const PASSWORD_MIN_LENGTH: usize = 8;

// ============================================================================
// EMAIL
// ============================================================================

/// Validator for RFC 5322 style addresses.
///
/// Checks the address shape (dot-separated atoms, `@`, two or more hostname
/// labels) and the size limits: 6 to 254 characters overall, at most 64 in
/// the local part and 63 per domain label.
#[derive(Clone, Copy, Debug, Default)]
pub struct Email;

impl Email {
    fn check(address: &str) -> bool {
        // the pattern only admits ASCII, so byte lengths are character counts
        if !EMAIL_LENGTH.contains(&address.len()) || !EMAIL_REGEX.is_match(address) {
            return false;
        }
        match address.split_once('@') {
            Some((local, domain)) => {
                local.len() <= LOCAL_PART_MAX
                    && domain.split('.').all(|label| label.len() <= DOMAIN_LABEL_MAX)
            }
            None => false,
        }
    }
}

impl Validator for Email {
    fn evaluate(&self, value: &Value) -> bool {
        string_form(value).is_some_and(|s| Self::check(&s))
    }
}

/// Rule that checks the value is an email address.
///
/// # Example
///
/// ```rust
/// use sentinel::{is_email, Value};
///
/// assert!(is_email().evaluate(&Value::from("johndoe@example.com")));
/// assert!(is_email().evaluate(&Value::from("John.Doe@Example.COM")));
/// assert!(!is_email().evaluate(&Value::from("johndoe@localhost")));
/// assert!(!is_email().evaluate(&Value::from(36)));
/// ```
pub fn is_email() -> Rule {
    Rule::new(Email)
}

// ============================================================================
// PASSWORD
// ============================================================================

/// Validator for password complexity.
///
/// A single line of at least eight characters that uses at least three of
/// the four classes: lowercase, uppercase, digit, symbol. Symbols are any
/// character outside `[A-Za-z0-9_]`.
#[derive(Clone, Copy, Debug, Default)]
pub struct PasswordComplexity;

impl PasswordComplexity {
    fn check(password: &str) -> bool {
        if password.contains('\n') || password.chars().count() < PASSWORD_MIN_LENGTH {
            return false;
        }
        let lower = password.chars().any(|c| c.is_ascii_lowercase());
        let upper = password.chars().any(|c| c.is_ascii_uppercase());
        let digit = password.chars().any(|c| c.is_ascii_digit());
        let symbol = password
            .chars()
            .any(|c| !(c.is_ascii_alphanumeric() || c == '_'));

        [lower, upper, digit, symbol].iter().filter(|&&class| class).count() >= 3
    }
}

impl Validator for PasswordComplexity {
    fn evaluate(&self, value: &Value) -> bool {
        string_form(value).is_some_and(|s| Self::check(&s))
    }
}

/// Rule that checks the value is a sufficiently complex password.
///
/// # Example
///
/// ```rust
/// use sentinel::{is_password_valid, Value};
///
/// assert!(is_password_valid().evaluate(&Value::from("Passw0rd")));
/// assert!(is_password_valid().evaluate(&Value::from("p@ssw0rd")));
/// assert!(!is_password_valid().evaluate(&Value::from("password")));
/// assert!(!is_password_valid().evaluate(&Value::from("Pa5s")));
/// ```
pub fn is_password_valid() -> Rule {
    Rule::new(PasswordComplexity)
}

// ============================================================================
// POSTAL CODES
// ============================================================================

/// Postal code formats understood by [`ZipCode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZipRegion {
    /// `12345` or `12345-6789`.
    Us,
    /// `12345-678` or `12345678`.
    Br,
    /// Either of the above.
    Any,
}

/// Validator for postal codes.
#[derive(Clone, Copy, Debug)]
pub struct ZipCode {
    region: ZipRegion,
}

impl ZipCode {
    /// Create a postal code validator for `region`.
    pub fn new(region: ZipRegion) -> Self {
        Self { region }
    }

    fn check(&self, code: &str) -> bool {
        match self.region {
            ZipRegion::Us => US_ZIP_REGEX.is_match(code),
            ZipRegion::Br => BR_ZIP_REGEX.is_match(code),
            ZipRegion::Any => US_ZIP_REGEX.is_match(code) || BR_ZIP_REGEX.is_match(code),
        }
    }
}

impl Validator for ZipCode {
    fn evaluate(&self, value: &Value) -> bool {
        string_form(value).is_some_and(|s| self.check(&s))
    }
}

/// Rule that checks the value is a US zip code.
///
/// # Example
///
/// ```rust
/// use sentinel::{is_us_zip_code_valid, Value};
///
/// assert!(is_us_zip_code_valid().evaluate(&Value::from("90210")));
/// assert!(is_us_zip_code_valid().evaluate(&Value::from("90210-1234")));
/// assert!(!is_us_zip_code_valid().evaluate(&Value::from("01310-100")));
/// ```
pub fn is_us_zip_code_valid() -> Rule {
    Rule::new(ZipCode::new(ZipRegion::Us))
}

/// Rule that checks the value is a Brazilian CEP.
///
/// # Example
///
/// ```rust
/// use sentinel::{is_br_zip_code_valid, Value};
///
/// assert!(is_br_zip_code_valid().evaluate(&Value::from("01310-100")));
/// assert!(is_br_zip_code_valid().evaluate(&Value::from("01310100")));
/// assert!(!is_br_zip_code_valid().evaluate(&Value::from("90210")));
/// ```
pub fn is_br_zip_code_valid() -> Rule {
    Rule::new(ZipCode::new(ZipRegion::Br))
}

/// Rule that checks the value is a US or Brazilian postal code.
///
/// # Example
///
/// ```rust
/// use sentinel::{is_zip_code_valid, Value};
///
/// assert!(is_zip_code_valid().evaluate(&Value::from("90210")));
/// assert!(is_zip_code_valid().evaluate(&Value::from("01310-100")));
/// assert!(!is_zip_code_valid().evaluate(&Value::from("9021")));
/// ```
pub fn is_zip_code_valid() -> Rule {
    Rule::new(ZipCode::new(ZipRegion::Any))
}

// ============================================================================
// PATTERN
// ============================================================================

/// Validator that checks the string form against a regular expression.
#[derive(Clone, Debug)]
pub struct MatchesPattern {
    pattern: Regex,
}

impl MatchesPattern {
    /// Compile `pattern` into a validator.
    pub fn new(pattern: &str) -> Result<Self, RuleError> {
        Regex::new(pattern)
            .map(|pattern| Self { pattern })
            .map_err(|source| RuleError::invalid_pattern(pattern, source))
    }

    /// The compiled pattern.
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }
}

impl Validator for MatchesPattern {
    fn evaluate(&self, value: &Value) -> bool {
        string_form(value).is_some_and(|s| self.pattern.is_match(&s))
    }
}

/// Rule that checks the value matches `pattern`.
///
/// This is the only rule constructor that can fail: an invalid pattern is
/// reported when the rule is built, never during evaluation.
///
/// # Example
///
/// ```rust
/// use sentinel::{matches_pattern, Value};
///
/// let phone = matches_pattern(r"^\d{3}-\d{4}$").unwrap();
/// assert!(phone.evaluate(&Value::from("555-1234")));
/// assert!(!phone.evaluate(&Value::from("5551234")));
///
/// assert!(matches_pattern("(unclosed").is_err());
/// ```
pub fn matches_pattern(pattern: &str) -> Result<Rule, RuleError> {
    MatchesPattern::new(pattern).map(Rule::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_email_valid() {
        assert!(Email.evaluate(&json!("johndoe@example.com")));
        assert!(Email.evaluate(&json!("a.b+tag@sub.example.co")));
        assert!(Email.evaluate(&json!("x!#$%&'*+/=?^_`{|}~-@ex-ample.org")));
    }

    #[test]
    fn test_email_shape_rejections() {
        assert!(!Email.evaluate(&json!("plainaddress")));
        assert!(!Email.evaluate(&json!(".john@example.com")));
        assert!(!Email.evaluate(&json!("john..doe@example.com")));
        assert!(!Email.evaluate(&json!("john@-example.com")));
        assert!(!Email.evaluate(&json!("john@example-.com")));
        assert!(!Email.evaluate(&json!("john@example")));
        assert!(!Email.evaluate(&json!("jo@hn@example.com")));
        assert!(!Email.evaluate(&json!("jöhn@example.com")));
    }

    #[test]
    fn test_email_size_limits() {
        assert!(!Email.evaluate(&json!("a@b.c")));
        assert!(Email.evaluate(&json!("a@b.co")));

        let local = "a".repeat(64);
        assert!(Email.evaluate(&json!(format!("{local}@example.com"))));
        let local = "a".repeat(65);
        assert!(!Email.evaluate(&json!(format!("{local}@example.com"))));

        let label = "b".repeat(63);
        assert!(Email.evaluate(&json!(format!("a@{label}.com"))));
        let label = "b".repeat(64);
        assert!(!Email.evaluate(&json!(format!("a@{label}.com"))));

        let long = format!("a@{}.com", vec!["c".repeat(60); 5].join("."));
        assert!(long.len() > 254);
        assert!(!Email.evaluate(&json!(long)));
    }

    #[test]
    fn test_email_non_strings() {
        assert!(!Email.evaluate(&json!(null)));
        assert!(!Email.evaluate(&json!(36)));
        assert!(!Email.evaluate(&json!(["johndoe@example.com", "x"])));
        assert!(Email.evaluate(&json!(["johndoe@example.com"])));
    }

    #[test]
    fn test_password_classes() {
        // lower + upper + digit
        assert!(PasswordComplexity.evaluate(&json!("Abcdefg1")));
        // lower + upper + symbol
        assert!(PasswordComplexity.evaluate(&json!("Abcdefg!")));
        // lower + digit + symbol
        assert!(PasswordComplexity.evaluate(&json!("abcdef1!")));
        // upper + digit + symbol
        assert!(PasswordComplexity.evaluate(&json!("ABCDEF1!")));
    }

    #[test]
    fn test_password_rejections() {
        assert!(!PasswordComplexity.evaluate(&json!("abcdefgh")));
        assert!(!PasswordComplexity.evaluate(&json!("Abcdefgh")));
        assert!(!PasswordComplexity.evaluate(&json!("abcdefg1")));
        assert!(!PasswordComplexity.evaluate(&json!("Abc1!")));
        assert!(!PasswordComplexity.evaluate(&json!("Abcdefg1\nxyz")));
        assert!(!PasswordComplexity.evaluate(&json!(null)));
    }

    #[test]
    fn test_password_underscore_is_not_a_symbol() {
        assert!(!PasswordComplexity.evaluate(&json!("abcdefg_1")));
        assert!(PasswordComplexity.evaluate(&json!("abcdéfg1")));
    }

    #[test]
    fn test_zip_codes() {
        let us = ZipCode::new(ZipRegion::Us);
        assert!(us.evaluate(&json!("12345")));
        assert!(us.evaluate(&json!(12345)));
        assert!(us.evaluate(&json!("12345-6789")));
        assert!(!us.evaluate(&json!("12345-678")));
        assert!(!us.evaluate(&json!("12345\n")));

        let br = ZipCode::new(ZipRegion::Br);
        assert!(br.evaluate(&json!("12345-678")));
        assert!(br.evaluate(&json!("12345678")));
        assert!(!br.evaluate(&json!("12345")));

        let any = ZipCode::new(ZipRegion::Any);
        assert!(any.evaluate(&json!("12345")));
        assert!(any.evaluate(&json!("12345678")));
        assert!(!any.evaluate(&json!("1234-567")));
        assert!(!any.evaluate(&json!(null)));
    }

    #[test]
    fn test_matches_pattern() {
        let p = MatchesPattern::new(r"^[A-Z]{2}\d{2}$").expect("valid pattern");
        assert!(p.evaluate(&json!("AB12")));
        assert!(!p.evaluate(&json!("ab12")));
        assert_eq!(p.pattern().as_str(), r"^[A-Z]{2}\d{2}$");
    }

    #[test]
    fn test_matches_pattern_invalid() {
        let err = MatchesPattern::new("[").expect_err("invalid pattern");
        assert!(matches!(err, RuleError::InvalidPattern { .. }));
    }
}
