//! Cart Models

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::Timestamp;

use crate::domain::{
    products::models::ProductId,
    quantity::Quantity,
    validation::{self, MAX_CART_ID_LEN, ValidationError},
};

/// Client-generated cart identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CartId(String);

impl CartId {
    /// Validate a client-supplied cart identifier.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the identifier is blank or longer
    /// than [`MAX_CART_ID_LEN`] characters.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        validation::required_text("cartId", value, MAX_CART_ID_LEN).map(Self)
    }

    /// Wrap an identifier read back from storage.
    #[must_use]
    pub fn from_stored(value: String) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CartId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

/// New Cart Line Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCartLine {
    pub cart_id: CartId,
    pub product_id: ProductId,
    pub quantity: Quantity,
}

/// Cart Line Quantity Update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineUpdate {
    pub cart_id: CartId,
    pub product_id: ProductId,
    pub quantity: Quantity,
}

/// CartLine Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub cart_id: CartId,
    pub product_id: ProductId,
    pub quantity: u32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Outcome of adding a product to a cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartLineChange {
    /// The product was not in the cart yet.
    Created(CartLine),

    /// The product was already in the cart and its quantity was increased.
    Incremented(CartLine),
}

impl CartLineChange {
    #[must_use]
    pub fn line(&self) -> &CartLine {
        match self {
            Self::Created(line) | Self::Incremented(line) => line,
        }
    }
}

/// Cart line joined with the current product snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    pub product_id: ProductId,
    pub quantity: u32,
    /// Unit price in minor currency units.
    pub price: u64,
    pub image: String,
    pub name: String,
    pub quantity_in_stock: u32,
}
