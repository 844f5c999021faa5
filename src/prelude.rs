//! Prelude for convenient imports
//!
//! # Example
//!
//! ```rust
//! use sentinel::prelude::*;
//!
//! let session = Session::new("johndoe@example.com", all([is_required(), is_email()]));
//! assert!(session.is_valid());
//! ```

// Core types
pub use crate::compose::{all, any, Composite};
pub use crate::engine::{Mode, ValidatorSet};
pub use crate::session::Session;
pub use crate::validator::{Rule, Validator};
pub use crate::value::Value;

// Rules
pub use crate::rules::{
    has_exact_length, has_max_length, has_min_length, has_min_max_length, has_value, in_array,
    is_br_zip_code_valid, is_cpf_valid, is_date, is_email, is_greater_or_equal_than,
    is_greater_than, is_less_or_equal_than, is_less_than, is_number, is_password_valid,
    is_present, is_required, is_us_zip_code_valid, is_zip_code_valid, matches_pattern,
};
