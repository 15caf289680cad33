//! Products By Ids Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use storefront_app::domain::products::models::ProductId;

use crate::{
    extensions::*,
    products::{errors::into_status_error, models::ProductResponse},
    state::State,
};

/// Products By Ids Handler
///
/// Returns the products named in a comma separated id list, ordered by id.
/// Unknown ids are skipped.
#[endpoint(
    tags("products"),
    summary = "Get Products By Ids",
    responses(
        (status_code = StatusCode::OK, description = "Matching products"),
        (status_code = StatusCode::BAD_REQUEST, description = "Malformed id list"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    ids: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<Vec<ProductResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let ids = ProductId::parse_list(&ids.into_inner()).or_400()?;

    let products = state
        .app
        .products
        .get_products_by_ids(ids)
        .await
        .map_err(into_status_error)?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}
