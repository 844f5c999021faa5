//! Date rules

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::validator::{Rule, Validator};
use crate::value::{string_form, Value};

/// Largest epoch offset, in milliseconds, a timestamp may carry.
const MAX_EPOCH_MILLIS: f64 = 8.64e15;

const ISO_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const ISO_OFFSET_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%d %H:%M%:z"];

const ISO_DATE_FORMATS: &[&str] = &["%Y-%m-%d"];

/// Validator for calendar-valid dates.
///
/// With a format, the string form must parse under that `chrono` strftime
/// pattern as a date-time (with or without offset) or as a date. Without a
/// format, strings must be ISO 8601 dates or date-times and numbers are
/// accepted as epoch milliseconds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IsDate {
    format: Option<String>,
}

impl IsDate {
    /// Create a date validator, optionally bound to a strftime pattern.
    pub fn new(format: Option<&str>) -> Self {
        Self {
            format: format.map(str::to_owned),
        }
    }

    /// The configured format, if any.
    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }
}

impl Validator for IsDate {
    fn evaluate(&self, value: &Value) -> bool {
        match (&self.format, value) {
            (_, Value::Null) => false,
            (Some(format), other) => {
                string_form(other).is_some_and(|text| parses_with(&text, format))
            }
            (None, Value::Number(n)) => n
                .as_f64()
                .is_some_and(|millis| millis.is_finite() && millis.abs() <= MAX_EPOCH_MILLIS),
            (None, Value::String(text)) => parses_iso(text.trim()),
            (None, _) => false,
        }
    }
}

fn parses_with(text: &str, format: &str) -> bool {
    DateTime::parse_from_str(text, format).is_ok()
        || NaiveDateTime::parse_from_str(text, format).is_ok()
        || NaiveDate::parse_from_str(text, format).is_ok()
}

fn parses_iso(text: &str) -> bool {
    DateTime::parse_from_rfc3339(text).is_ok()
        || ISO_OFFSET_FORMATS
            .iter()
            .any(|format| DateTime::parse_from_str(text, format).is_ok())
        || ISO_DATE_TIME_FORMATS
            .iter()
            .any(|format| NaiveDateTime::parse_from_str(text, format).is_ok())
        || ISO_DATE_FORMATS
            .iter()
            .any(|format| NaiveDate::parse_from_str(text, format).is_ok())
        || parses_compact(text)
}

/// `YYYYMMDD`.
fn parses_compact(text: &str) -> bool {
    if text.len() != 8 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let field = |range: std::ops::Range<usize>| text[range].parse::<u32>().ok();
    match (field(0..4), field(4..6), field(6..8)) {
        (Some(year), Some(month), Some(day)) => {
            i32::try_from(year).is_ok_and(|year| NaiveDate::from_ymd_opt(year, month, day).is_some())
        }
        _ => false,
    }
}

/// Rule that checks the value is a valid date.
///
/// # Example
///
/// ```rust
/// use sentinel::{is_date, Value};
///
/// assert!(is_date(None).evaluate(&Value::from("2024-02-29")));
/// assert!(!is_date(None).evaluate(&Value::from("2023-02-29")));
/// assert!(is_date(Some("%d/%m/%Y")).evaluate(&Value::from("31/12/2020")));
/// assert!(!is_date(Some("%d/%m/%Y")).evaluate(&Value::from("31/02/2020")));
/// ```
pub fn is_date(format: Option<&str>) -> Rule {
    Rule::new(IsDate::new(format))
}
