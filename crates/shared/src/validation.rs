//! Common validation utilities.

use validator::ValidationError;

/// Message returned when a required form field is missing or blank.
pub const REQUIRED_FIELDS_MESSAGE: &str = "All fields are required";

/// Returns true when the value is empty or only whitespace.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validates that a required text field carries a non-whitespace value.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if is_blank(value) {
        let mut err = ValidationError::new("required");
        err.message = Some(REQUIRED_FIELDS_MESSAGE.into());
        Err(err)
    } else {
        Ok(())
    }
}
