//! # Sentinel
//!
//! Composable value validation with a single boolean verdict.
//!
//! Rules are small, total predicates over a dynamic [`Value`]. They are
//! grouped with [`all`] (every rule must pass) or [`any`] (one rule must
//! pass), and a [`Session`] evaluates a value against them once, with
//! short-circuiting, in declaration order.
//!
//! ## Quick Example
//!
//! ```rust
//! use sentinel::{all, any, has_min_max_length, is_email, is_greater_than, is_number, Session};
//!
//! // A flat list: every rule must pass
//! assert!(Session::new(36, [is_number(), is_greater_than(30)]).is_valid());
//!
//! // Explicit groups
//! let contact = all([is_email(), has_min_max_length(10, 13)]);
//! assert!(Session::new("johndoe@example.com", contact).is_invalid());
//!
//! let either = any([is_email(), is_greater_than(30)]);
//! assert!(Session::new(36, either).is_valid());
//!
//! // No rules at all is never valid
//! assert!(Session::new(36, Vec::<sentinel::Rule>::new()).is_invalid());
//! ```
//!
//! ## Failing closed
//!
//! Evaluation never errors. Values of the wrong shape, entries that cannot
//! produce a validator and empty rule lists all yield an invalid verdict.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod compose;
pub mod engine;
pub mod error;
pub mod rules;
pub mod session;
pub mod testing;
pub mod validator;
pub mod value;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-exports
pub use compose::{all, any, Composite};
pub use engine::{Mode, ValidatorSet};
pub use error::RuleError;
pub use rules::*;
pub use session::Session;
pub use validator::{AlwaysFalse, Rule, Validator};
pub use value::Value;

pub mod prelude;
