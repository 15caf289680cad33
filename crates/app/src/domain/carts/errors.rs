//! Carts service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

/// SQLSTATE raised when an incremented quantity overflows its column.
const NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("cart line not found")]
    NotFound,

    #[error("product not found")]
    InvalidReference,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CartsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        if error
            .as_database_error()
            .and_then(DatabaseError::code)
            .as_deref()
            == Some(NUMERIC_VALUE_OUT_OF_RANGE)
        {
            return Self::InvalidData;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::NotNullViolation | ErrorKind::CheckViolation) => Self::InvalidData,
            _ => Self::Sql(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        assert!(matches!(
            CartsServiceError::from(Error::RowNotFound),
            CartsServiceError::NotFound
        ));
    }

    #[test]
    fn connection_errors_map_to_sql() {
        assert!(matches!(
            CartsServiceError::from(Error::PoolClosed),
            CartsServiceError::Sql(_)
        ));
    }
}
