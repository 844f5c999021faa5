//! Error types for rule construction.
//!
//! Evaluation never fails: a value that does not fit a rule is simply
//! invalid. The only errors are configuration mistakes caught when a rule is
//! built.

use std::fmt;

/// Error returned when a rule cannot be built from its configuration.
///
/// # Examples
///
/// ```rust
/// use sentinel::{matches_pattern, RuleError};
///
/// match matches_pattern("[a-z") {
///     Err(RuleError::InvalidPattern { pattern, .. }) => assert_eq!(pattern, "[a-z"),
///     _ => panic!("Expected invalid pattern"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum RuleError {
    /// A regular expression failed to compile.
    InvalidPattern {
        /// The pattern as supplied.
        pattern: String,
        /// The compile error.
        source: regex::Error,
    },
}

impl RuleError {
    /// Create an invalid pattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }

    /// Returns true if this is an invalid pattern error.
    pub fn is_invalid_pattern(&self) -> bool {
        matches!(self, Self::InvalidPattern { .. })
    }
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPattern { pattern, .. } => {
                write!(f, "invalid pattern {:?}", pattern)
            }
        }
    }
}

impl std::error::Error for RuleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPattern { source, .. } => Some(source),
        }
    }
}
