//! Testing utilities for code that builds rules
//!
//! Provides a counting stub validator for asserting short-circuit behavior,
//! assertion macros for sessions and, behind the `proptest` feature,
//! strategies for generating subjects.
//!
//! # Examples
//!
//! ## Counting stub
//!
//! ```rust
//! use sentinel::testing::Counting;
//! use sentinel::{all, Session};
//!
//! let failing = Counting::failing();
//! let after = Counting::passing();
//!
//! let session = Session::new(36, all([failing.rule(), after.rule()]));
//! assert!(session.is_invalid());
//! assert_eq!(failing.calls(), 1);
//! assert_eq!(after.calls(), 0);
//! ```
//!
//! ## Assertion macros
//!
//! ```rust
//! use sentinel::{assert_invalid, assert_valid, is_number, Session};
//!
//! assert_valid!(Session::new(36, is_number()));
//! assert_invalid!(Session::new("36px", is_number()));
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::validator::{Rule, Validator};
use crate::value::Value;

/// Stub validator with a fixed verdict that counts its invocations.
///
/// Clones share the same counters.
#[derive(Clone, Debug, Default)]
pub struct Counting {
    verdict: bool,
    calls: Arc<AtomicUsize>,
    resolutions: Arc<AtomicUsize>,
}

impl Counting {
    /// A stub that always passes.
    pub fn passing() -> Self {
        Self {
            verdict: true,
            ..Self::default()
        }
    }

    /// A stub that always fails.
    pub fn failing() -> Self {
        Self::default()
    }

    /// Number of times the stub was evaluated.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Number of times the stub's lazy rule was resolved.
    pub fn resolutions(&self) -> usize {
        self.resolutions.load(Ordering::SeqCst)
    }

    /// A pre-built rule wrapping this stub.
    pub fn rule(&self) -> Rule {
        Rule::new(self.clone())
    }

    /// A factory rule that records each resolution before yielding the stub.
    pub fn lazy_rule(&self) -> Rule {
        let stub = self.clone();
        Rule::factory(move || {
            stub.resolutions.fetch_add(1, Ordering::SeqCst);
            stub.clone()
        })
    }
}

impl Validator for Counting {
    fn evaluate(&self, _value: &Value) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.verdict
    }
}

/// Assert that a session is valid.
///
/// # Example
///
/// ```rust
/// use sentinel::{assert_valid, is_email, Session};
///
/// assert_valid!(Session::new("johndoe@example.com", is_email()));
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($session:expr) => {
        match &$session {
            session if session.is_valid() => {}
            session => {
                panic!("Expected valid, got invalid for subject: {}", session.value());
            }
        }
    };
}

/// Assert that a session is invalid.
///
/// # Example
///
/// ```rust
/// use sentinel::{assert_invalid, is_email, Session};
///
/// assert_invalid!(Session::new("johndoe", is_email()));
/// ```
#[macro_export]
macro_rules! assert_invalid {
    ($session:expr) => {
        match &$session {
            session if session.is_invalid() => {}
            session => {
                panic!("Expected invalid, got valid for subject: {}", session.value());
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

/// Strategy for well-formed CPF numbers as bare eleven-digit strings.
///
/// # Example
///
/// ```rust,ignore
/// use proptest::prelude::*;
/// use sentinel::testing::valid_cpf;
///
/// proptest! {
///     #[test]
///     fn accepts(cpf in valid_cpf()) {
///         prop_assert!(sentinel::Session::validate(cpf, sentinel::is_cpf_valid(true)));
///     }
/// }
/// ```
#[cfg(feature = "proptest")]
pub fn valid_cpf() -> impl Strategy<Value = String> {
    prop::collection::vec(0u32..10, 9)
        .prop_filter("repeated digits", |digits| {
            digits.iter().any(|&d| d != digits[0])
        })
        .prop_map(|mut digits| {
            let first = crate::rules::check_digit(&digits);
            digits.push(first);
            let second = crate::rules::check_digit(&digits[1..10]);
            digits.push(second);
            digits
                .iter()
                .filter_map(|&d| char::from_digit(d, 10))
                .collect::<String>()
        })
        .prop_filter("reserved sequence", |cpf| cpf != "01234567890")
}

/// Strategy for arbitrary scalar and shallow composite subjects.
#[cfg(feature = "proptest")]
pub fn any_subject() -> impl Strategy<Value = Value> {
    let scalar = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        (-1.0e9..1.0e9_f64).prop_map(Value::from),
        ".{0,24}".prop_map(Value::from),
    ]
    .boxed();
    prop_oneof![
        4 => scalar.clone(),
        1 => prop::collection::vec(scalar, 0..4).prop_map(Value::from),
    ]
}
