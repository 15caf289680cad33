//! Contact Models

use jiff::Timestamp;

use crate::domain::validation::{
    self, MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_SUBJECT_LEN, ValidationError,
};

/// A validated contact form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub subject: String,
}

impl NewContact {
    /// Validate the raw form fields.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] for the first invalid field.
    pub fn parse(
        first_name: &str,
        last_name: &str,
        email: &str,
        subject: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            first_name: validation::required_text("firstName", first_name, MAX_NAME_LEN)?,
            last_name: validation::required_text("lastName", last_name, MAX_NAME_LEN)?,
            email: parse_email(email)?,
            subject: validation::required_text("subject", subject, MAX_SUBJECT_LEN)?,
        })
    }
}

fn parse_email(value: &str) -> Result<String, ValidationError> {
    let email = validation::required_text("email", value, MAX_EMAIL_LEN)?;

    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    };

    if !valid {
        return Err(ValidationError::Malformed { field: "email" });
    }

    Ok(email)
}

/// Stored contact submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub subject: String,
    pub created_at: Timestamp,
}
