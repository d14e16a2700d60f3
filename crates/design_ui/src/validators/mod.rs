//! Message-returning validators for form inputs.
//!
//! Validators return `None` on success and a user-facing message on
//! failure; they never produce a [`crate::ConfigError`].

mod date;
mod value;

pub use date::{
    clean_date_string, matches_format, max_date_validator, min_date_validator,
    min_max_birthdate_validator, DateFormat, MaxDateConfig, MinDateConfig, MinMaxDateConfig,
    Validator, DATE_FORMATS,
};
pub use value::{min_max_validator, validate_truthy};
