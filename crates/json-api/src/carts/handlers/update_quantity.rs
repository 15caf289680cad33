//! Update Cart Quantity Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use storefront_app::domain::carts::models::CartLineUpdate;

use crate::{
    carts::{errors::into_status_error, requests::CartLineRequest},
    extensions::*,
    messages::{MessageResponse, message},
    state::State,
};

/// Update Cart Quantity Handler
///
/// Overwrites the quantity of a product already in the cart.
#[endpoint(
    tags("cart"),
    summary = "Set Cart Line Quantity",
    responses(
        (status_code = StatusCode::OK, description = "Quantity updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart item not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CartLineRequest>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let update = CartLineUpdate::try_from(json.into_inner()).or_400()?;

    state
        .app
        .carts
        .update_quantity(update)
        .await
        .map_err(into_status_error)?;

    Ok(message("Cart item updated successfully"))
}
