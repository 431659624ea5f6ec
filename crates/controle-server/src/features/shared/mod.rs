//! Shared utilities and types for feature modules
//!
//! # Contents
//!
//! - **validation**: Field validation (required text, lengths, ranges)
//! - **error_helpers**: Error-to-response mapping reused by every feature
//! - **test_helpers**: Test fixtures and utilities (test-only)

pub mod error_helpers;
pub mod validation;

#[cfg(test)]
pub mod test_helpers;

pub use validation::{validate_range, validate_text, FieldValidationError};
