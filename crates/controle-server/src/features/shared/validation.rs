//! Shared validation utilities
//!
//! Lengths are counted in characters, not bytes, and "required" means the
//! value is not blank once surrounding whitespace is removed.
//!
//! # Examples
//!
//! ```rust,ignore
//! use controle_server::features::shared::validation::{validate_text, validate_range};
//!
//! validate_text("name", &command.name, 200)?;
//! validate_range("level", command.level, 1, 5)?;
//! ```

use thiserror::Error;

/// Errors raised by field validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldValidationError {
    #[error("{field} is required and cannot be empty")]
    Required { field: &'static str },

    #[error("{field} must be at most {max_length} characters")]
    TooLong {
        field: &'static str,
        max_length: usize,
    },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },
}

/// Validate a required text field
///
/// # Rules
/// - Must not be blank after trimming whitespace
/// - Must not exceed `max_length` characters
pub fn validate_text(
    field: &'static str,
    value: &str,
    max_length: usize,
) -> Result<(), FieldValidationError> {
    if value.trim().is_empty() {
        return Err(FieldValidationError::Required { field });
    }

    validate_length(field, value, max_length)
}

/// Validate only the length of a text field
fn validate_length(
    field: &'static str,
    value: &str,
    max_length: usize,
) -> Result<(), FieldValidationError> {
    if value.chars().count() > max_length {
        return Err(FieldValidationError::TooLong { field, max_length });
    }

    Ok(())
}

/// Validate that an integer lies in `min..=max`
pub fn validate_range(
    field: &'static str,
    value: i64,
    min: i64,
    max: i64,
) -> Result<(), FieldValidationError> {
    if !(min..=max).contains(&value) {
        return Err(FieldValidationError::OutOfRange { field, min, max });
    }

    Ok(())
}
