//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use salvo::prelude::StatusError;
use tracing::error;

pub(crate) trait ResultExt<T> {
    /// Map any error to a logged internal server error.
    fn or_500(self, context: &str) -> Result<T, StatusError>;

    /// Map a rejected input to a bad request describing the problem.
    fn or_400(self) -> Result<T, StatusError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, context: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            error!("{context}: {error}");

            StatusError::internal_server_error()
        })
    }

    fn or_400(self) -> Result<T, StatusError> {
        self.map_err(|error| StatusError::bad_request().brief(error.to_string()))
    }
}
