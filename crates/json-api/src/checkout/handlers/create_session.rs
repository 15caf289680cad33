//! Create Checkout Session Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront_app::domain::checkout::models::NewCheckout;

use crate::{
    checkout::{errors::into_status_error, requests::CreateSessionRequest},
    extensions::*,
    state::State,
};

/// Checkout Session Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutSessionResponse {
    /// Hosted payment page to redirect the buyer to
    pub url: String,
}

/// Create Checkout Session Handler
///
/// Creates a hosted payment page for the requested items.
#[endpoint(
    tags("checkout"),
    summary = "Create Checkout Session",
    responses(
        (status_code = StatusCode::OK, description = "Session created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_GATEWAY, description = "Payment provider failure"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateSessionRequest>,
    depot: &mut Depot,
) -> Result<Json<CheckoutSessionResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let checkout = NewCheckout::try_from(json.into_inner()).or_400()?;

    let session = state
        .app
        .checkout
        .create_session(checkout)
        .await
        .map_err(into_status_error)?;

    Ok(Json(CheckoutSessionResponse { url: session.url }))
}
