//! Get Cart Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront_app::domain::carts::models::{CartId, CartItem};

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// Cart Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartItemResponse {
    /// Product identifier
    pub id: i64,

    /// Units of the product in the cart
    pub quantity: u32,

    /// Current unit price in cents
    pub price: u64,

    /// Image path relative to `/product-images`
    pub image: String,

    /// Product name
    pub name: String,

    /// Units currently in stock
    pub quantity_in_stock: u32,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            id: item.product_id.into_i64(),
            quantity: item.quantity,
            price: item.price,
            image: item.image,
            name: item.name,
            quantity_in_stock: item.quantity_in_stock,
        }
    }
}

/// Get Cart Handler
///
/// Returns the cart's lines with current product details.
#[endpoint(
    tags("cart"),
    summary = "Get Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart lines, empty for unknown carts"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid cart id"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    cart_id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<Vec<CartItemResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let cart = CartId::parse(&cart_id.into_inner()).or_400()?;

    let items = state
        .app
        .carts
        .get_cart(cart)
        .await
        .map_err(into_status_error)?;

    Ok(Json(items.into_iter().map(Into::into).collect()))
}
