//! Input validation shared by the domain constructors.

use thiserror::Error;

/// Maximum accepted length of a client-generated cart identifier.
pub const MAX_CART_ID_LEN: usize = 64;

/// Maximum accepted length of a contact name.
pub const MAX_NAME_LEN: usize = 100;

/// Maximum accepted length of an email address.
pub const MAX_EMAIL_LEN: usize = 254;

/// Maximum accepted length of a contact message subject.
pub const MAX_SUBJECT_LEN: usize = 5000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("{field} must be a positive integer")]
    NotPositive { field: &'static str },

    #[error("{field} is out of range")]
    OutOfRange { field: &'static str },

    #[error("{field} is malformed")]
    Malformed { field: &'static str },
}

/// Trim `value` and check it is non-empty and within `max` characters.
pub(crate) fn required_text(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<String, ValidationError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Missing { field });
    }

    if trimmed.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }

    Ok(trimmed.to_string())
}
