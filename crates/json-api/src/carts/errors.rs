//! Cart Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::NotFound => StatusError::not_found().brief("Cart item not found"),
        CartsServiceError::InvalidReference => StatusError::not_found().brief("Product not found"),
        CartsServiceError::InvalidData => StatusError::bad_request().brief("Invalid cart payload"),
        CartsServiceError::Sql(source) => {
            error!("cart storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
