//! Product Responses

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use storefront_app::domain::products::models::Product;

/// Product Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    /// Product identifier
    pub id: i64,

    /// Display name
    pub name: String,

    /// Unit price in cents
    pub price: u64,

    /// Image path relative to `/product-images`
    pub image: String,

    /// Units currently in stock
    pub quantity_in_stock: u32,

    /// When the product was added to the catalog
    pub added_at: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.into_i64(),
            name: product.name,
            price: product.price,
            image: product.image,
            quantity_in_stock: product.quantity_in_stock,
            added_at: product.added_at.to_string(),
        }
    }
}
