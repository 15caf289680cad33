//! Remove From Cart Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    carts::{errors::into_status_error, requests::RemoveCartLineRequest},
    extensions::*,
    messages::{MessageResponse, message},
    state::State,
};

/// Remove From Cart Handler
///
/// Removes a product from a cart. Removing an absent product succeeds.
#[endpoint(
    tags("cart"),
    summary = "Remove Product from Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart line removed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<RemoveCartLineRequest>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let (cart, product) = json.into_inner().parse().or_400()?;

    state
        .app
        .carts
        .remove_item(cart, product)
        .await
        .map_err(into_status_error)?;

    Ok(message("Cart item removed successfully"))
}
