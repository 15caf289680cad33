//! Product Quantity Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront_app::domain::products::models::ProductId;

use crate::{extensions::*, products::errors::into_status_error, state::State};

/// Product Quantity Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductQuantityResponse {
    /// Units currently in stock
    pub quantity_in_stock: u32,
}

/// Product Quantity Handler
///
/// Returns the stock level of a single product.
#[endpoint(
    tags("products"),
    summary = "Get Product Stock",
    responses(
        (status_code = StatusCode::OK, description = "Stock level"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid product id"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<ProductQuantityResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = ProductId::parse(id.into_inner()).or_400()?;

    let stock = state
        .app
        .products
        .get_product_stock(id)
        .await
        .map_err(into_status_error)?;

    Ok(Json(ProductQuantityResponse {
        quantity_in_stock: stock.quantity_in_stock,
    }))
}
