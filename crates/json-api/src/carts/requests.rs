//! Cart Requests

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use storefront_app::domain::{
    carts::models::{CartId, CartLineUpdate, NewCartLine},
    products::models::ProductId,
    quantity::Quantity,
    validation::ValidationError,
};

/// Cart Line Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartLineRequest {
    /// Client-generated cart identifier
    pub cart_id: String,

    /// Product identifier
    pub product_id: i64,

    /// Number of units
    pub quantity: i64,
}

impl CartLineRequest {
    fn parts(&self) -> Result<(CartId, ProductId, Quantity), ValidationError> {
        Ok((
            CartId::parse(&self.cart_id)?,
            ProductId::parse(self.product_id)?,
            Quantity::parse("quantity", self.quantity)?,
        ))
    }
}

impl TryFrom<CartLineRequest> for NewCartLine {
    type Error = ValidationError;

    fn try_from(request: CartLineRequest) -> Result<Self, Self::Error> {
        let (cart_id, product_id, quantity) = request.parts()?;

        Ok(Self {
            cart_id,
            product_id,
            quantity,
        })
    }
}

impl TryFrom<CartLineRequest> for CartLineUpdate {
    type Error = ValidationError;

    fn try_from(request: CartLineRequest) -> Result<Self, Self::Error> {
        let (cart_id, product_id, quantity) = request.parts()?;

        Ok(Self {
            cart_id,
            product_id,
            quantity,
        })
    }
}

/// Remove Cart Line Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RemoveCartLineRequest {
    /// Client-generated cart identifier
    pub cart_id: String,

    /// Product identifier
    pub product_id: i64,
}

impl RemoveCartLineRequest {
    pub(crate) fn parse(&self) -> Result<(CartId, ProductId), ValidationError> {
        Ok((
            CartId::parse(&self.cart_id)?,
            ProductId::parse(self.product_id)?,
        ))
    }
}
