//! Subject values and the loose coercions rules rely on
//!
//! Validators accept any [`Value`]. Most rules do not care about the exact
//! runtime type of the subject: a length check looks at its string form, an
//! ordering check at its numeric form. The helpers here define those forms
//! once so every rule coerces the same way.
//!
//! # Example
//!
//! ```rust
//! use sentinel::value::{loose_number, string_form, Value};
//!
//! assert_eq!(string_form(&Value::from(36)).as_deref(), Some("36"));
//! assert_eq!(string_form(&Value::Null), None);
//! assert_eq!(loose_number(&Value::from(" 12 ")), 12.0);
//! assert!(loose_number(&Value::from("36px")).is_nan());
//! ```

use std::borrow::Cow;
use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;

pub use serde_json::Value;

static DECIMAL_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
        .expect("decimal literal pattern compiles")
});

/// Magnitudes outside `EXPONENT_BELOW..EXPONENT_FROM` print in exponent form.
const EXPONENT_FROM: f64 = 1e21;
const EXPONENT_BELOW: f64 = 1e-6;

const TWO_POW_32: f64 = 4_294_967_296.0;
const TWO_POW_31: f64 = 2_147_483_648.0;

/// String form of a value, or `None` when the value has none (`Null`).
///
/// Numbers print without a trailing `.0` when integral, arrays join the
/// string forms of their elements with `,` and objects collapse to
/// `"[object Object]"`.
pub fn string_form(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
        Value::Number(n) => Some(Cow::Owned(number_string(n))),
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Array(items) => Some(Cow::Owned(
            items
                .iter()
                .map(|item| string_form(item).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(","),
        )),
        Value::Object(_) => Some(Cow::Borrowed("[object Object]")),
    }
}

/// String form of a value, with `Null` mapped to the empty string.
pub fn string_form_or_empty(value: &Value) -> Cow<'_, str> {
    string_form(value).unwrap_or_default()
}

fn number_string(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        // -0 prints as 0
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if !(EXPONENT_BELOW..EXPONENT_FROM).contains(&f.abs()) => exponent_string(f),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

/// Shortest exponent form with an explicit sign: `1e+21`, `-1.5e-7`.
fn exponent_string(f: f64) -> String {
    let formatted = format!("{:e}", f);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}

/// Loose numeric form of a value.
///
/// `Null` is 0, booleans are 0 or 1, strings are parsed after trimming
/// (empty is 0, unparseable is NaN), arrays go through their string form and
/// objects are NaN.
///
/// # Example
///
/// ```rust
/// use sentinel::value::{loose_number, Value};
///
/// assert_eq!(loose_number(&Value::Null), 0.0);
/// assert_eq!(loose_number(&Value::from(true)), 1.0);
/// assert_eq!(loose_number(&Value::from("0x1F")), 31.0);
/// assert_eq!(loose_number(&Value::from("")), 0.0);
/// ```
pub fn loose_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => parse_number(s),
        Value::Array(_) => string_form(value).map_or(f64::NAN, |s| parse_number(&s)),
        Value::Object(_) => f64::NAN,
    }
}

/// Parse a string the way [`loose_number`] does.
pub fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    if let Some(prefixed) = parse_prefixed(trimmed) {
        return prefixed;
    }
    if DECIMAL_LITERAL.is_match(trimmed) {
        trimmed.parse::<f64>().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

/// `0x`, `0o` and `0b` literals. `None` means the text carries no prefix.
fn parse_prefixed(text: &str) -> Option<f64> {
    let lower = text.get(..2)?.to_ascii_lowercase();
    let radix = match lower.as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };
    let digits = &text[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    let parsed = digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|d| acc * f64::from(radix) + f64::from(d))
    });
    Some(parsed.unwrap_or(f64::NAN))
}

/// Truncate a float to a wrapping 32-bit integer. NaN and infinities map to 0.
///
/// # Example
///
/// ```rust
/// use sentinel::value::to_int32;
///
/// assert_eq!(to_int32(3.9), 3);
/// assert_eq!(to_int32(-3.9), -3);
/// assert_eq!(to_int32(4_294_967_296.0), 0);
/// assert_eq!(to_int32(f64::NAN), 0);
/// ```
pub fn to_int32(number: f64) -> i32 {
    if !number.is_finite() {
        return 0;
    }
    let wrapped = number.trunc().rem_euclid(TWO_POW_32);
    if wrapped >= TWO_POW_31 {
        (wrapped - TWO_POW_32) as i32
    } else {
        wrapped as i32
    }
}

enum Primitive<'a> {
    Text(Cow<'a, str>),
    Number(f64),
}

fn primitive(value: &Value) -> Primitive<'_> {
    match value {
        Value::String(s) => Primitive::Text(Cow::Borrowed(s.as_str())),
        Value::Array(_) | Value::Object(_) => Primitive::Text(string_form_or_empty(value)),
        other => Primitive::Number(loose_number(other)),
    }
}

/// Relational comparison between two values.
///
/// Two strings (or string-like composites) compare lexically; any other pair
/// compares numerically. `None` when either side is NaN.
///
/// # Example
///
/// ```rust
/// use std::cmp::Ordering;
/// use sentinel::value::{loose_compare, Value};
///
/// assert_eq!(loose_compare(&Value::from(36), &Value::from(30)), Some(Ordering::Greater));
/// assert_eq!(loose_compare(&Value::from("36"), &Value::from(30)), Some(Ordering::Greater));
/// assert_eq!(loose_compare(&Value::from("b"), &Value::from("ab")), Some(Ordering::Greater));
/// assert_eq!(loose_compare(&Value::from("abc"), &Value::from(30)), None);
/// ```
pub fn loose_compare(left: &Value, right: &Value) -> Option<Ordering> {
    match (primitive(left), primitive(right)) {
        (Primitive::Text(a), Primitive::Text(b)) => Some(a.cmp(&b)),
        (Primitive::Number(a), Primitive::Number(b)) => a.partial_cmp(&b),
        (Primitive::Text(a), Primitive::Number(b)) => parse_number(&a).partial_cmp(&b),
        (Primitive::Number(a), Primitive::Text(b)) => a.partial_cmp(&parse_number(&b)),
    }
}

/// Strict equality: same type and same value. Numbers compare by numeric
/// value, so `1` equals `1.0`. Arrays and objects never compare equal.
pub fn strict_equals(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => match (a.as_f64(), b.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        },
        _ => false,
    }
}

/// `Null`, `false`, zero and the empty string are falsy.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_none_or(|f| f == 0.0 || f.is_nan()),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
