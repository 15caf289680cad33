//! Checkout Requests

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use storefront_app::domain::{
    checkout::models::{NewCheckout, ReturnUrl},
    products::models::ProductId,
    quantity::Quantity,
    stock::RequestedQuantity,
    validation::ValidationError,
};

/// Requested Cart Item
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemRequest {
    /// Product identifier
    pub id: i64,

    /// Number of units
    pub quantity: i64,
}

impl TryFrom<&CartItemRequest> for RequestedQuantity {
    type Error = ValidationError;

    fn try_from(item: &CartItemRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            product_id: ProductId::parse(item.id)?,
            quantity: Quantity::parse("quantity", item.quantity)?,
        })
    }
}

fn requested(items: &[CartItemRequest]) -> Result<Vec<RequestedQuantity>, ValidationError> {
    items.iter().map(RequestedQuantity::try_from).collect()
}

/// Verify Quantities Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VerifyQuantitiesRequest {
    /// Items to check against current stock
    pub cart_items: Vec<CartItemRequest>,
}

impl VerifyQuantitiesRequest {
    pub(crate) fn parse(&self) -> Result<Vec<RequestedQuantity>, ValidationError> {
        requested(&self.cart_items)
    }
}

/// Create Checkout Session Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateSessionRequest {
    /// Items to pay for
    pub cart_items: Vec<CartItemRequest>,

    /// Page the buyer returns to when cancelling payment
    pub return_url: String,
}

impl TryFrom<CreateSessionRequest> for NewCheckout {
    type Error = ValidationError;

    fn try_from(request: CreateSessionRequest) -> Result<Self, Self::Error> {
        NewCheckout::new(
            requested(&request.cart_items)?,
            ReturnUrl::parse(&request.return_url)?,
        )
    }
}
