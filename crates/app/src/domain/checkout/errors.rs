//! Checkout service errors.

use thiserror::Error;

use crate::{
    domain::{products::models::ProductId, stock::StockError},
    payments::PaymentError,
};

#[derive(Debug, Error)]
pub enum CheckoutServiceError {
    #[error("product {0} not found")]
    MissingProduct(ProductId),

    #[error("payment provider error")]
    Payment(#[source] PaymentError),

    #[error("storage error")]
    Sql(#[source] sqlx::Error),
}

impl From<sqlx::Error> for CheckoutServiceError {
    fn from(error: sqlx::Error) -> Self {
        Self::Sql(error)
    }
}

impl From<StockError> for CheckoutServiceError {
    fn from(error: StockError) -> Self {
        match error {
            StockError::MissingProduct(id) => Self::MissingProduct(id),
        }
    }
}

impl From<PaymentError> for CheckoutServiceError {
    fn from(error: PaymentError) -> Self {
        Self::Payment(error)
    }
}
