//! Checkout Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::checkout::CheckoutServiceError;

use crate::observability::{Upstream, record_upstream_failure};

pub(crate) fn into_status_error(error: CheckoutServiceError) -> StatusError {
    match error {
        CheckoutServiceError::MissingProduct(id) => {
            StatusError::not_found().brief(format!("Product {id} not found"))
        }
        CheckoutServiceError::Payment(source) => {
            error!("payment provider request failed: {source}");

            record_upstream_failure(Upstream::PaymentProvider);

            StatusError::bad_gateway().brief("Payment provider unavailable")
        }
        CheckoutServiceError::Sql(source) => {
            error!("checkout storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
