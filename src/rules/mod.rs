//! Rule library
//!
//! Each constructor captures its configuration and returns a [`Rule`]
//! wrapping a concrete validator struct. Every validator is total over
//! [`Value`]: values of the wrong shape fail instead of panicking.
//!
//! # Example
//!
//! ```rust
//! use sentinel::rules::*;
//! use sentinel::Value;
//!
//! assert!(is_number().evaluate(&Value::from("36")));
//! assert!(has_min_length(3).evaluate(&Value::from("hello")));
//! assert!(in_array(["red", "green"]).evaluate(&Value::from("red")));
//! assert!(is_cpf_valid(true).evaluate(&Value::from("529.982.247-25")));
//! ```
//!
//! [`Rule`]: crate::Rule
//! [`Value`]: crate::Value

mod collection;
mod cpf;
mod date;
mod format;
mod length;
mod number;
mod presence;

pub use collection::{in_array, InArray};
pub use cpf::{is_cpf_valid, Cpf};
pub use date::{is_date, IsDate};
pub use format::{
    is_br_zip_code_valid, is_email, is_password_valid, is_us_zip_code_valid, is_zip_code_valid,
    matches_pattern, Email, MatchesPattern, PasswordComplexity, ZipCode, ZipRegion,
};
pub use length::{
    has_exact_length, has_max_length, has_min_length, has_min_max_length, ExactLength, LengthBounds,
};
pub use number::{
    is_greater_or_equal_than, is_greater_than, is_less_or_equal_than, is_less_than, is_number,
    GreaterThan, IsNumber, LessThan,
};
pub use presence::{has_value, is_present, is_required, Required};

pub(crate) use cpf::check_digit;
