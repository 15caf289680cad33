//! Latest Products Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    products::{errors::into_status_error, models::ProductResponse},
    state::State,
};

/// Number of products shown in the "new arrivals" strip.
pub(crate) const LATEST_PRODUCTS_LIMIT: u32 = 4;

/// Latest Products Handler
///
/// Returns the most recently added products, newest first.
#[endpoint(
    tags("products"),
    summary = "Latest Products",
    responses(
        (status_code = StatusCode::OK, description = "Newest products"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<ProductResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .products
        .latest_products(LATEST_PRODUCTS_LIMIT)
        .await
        .map_err(into_status_error)?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}
