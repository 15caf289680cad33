//! Contacts service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::mail::MailError;

#[derive(Debug, Error)]
pub enum ContactsServiceError {
    #[error("invalid data")]
    InvalidData,

    #[error("contact saved but notification failed")]
    Notification(#[source] MailError),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for ContactsServiceError {
    fn from(error: Error) -> Self {
        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::NotNullViolation | ErrorKind::CheckViolation) => Self::InvalidData,
            _ => Self::Sql(error),
        }
    }
}
