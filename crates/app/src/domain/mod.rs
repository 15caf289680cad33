//! Storefront Domain Concerns

pub mod carts;
pub mod checkout;
pub mod contacts;
pub mod products;
pub mod quantity;
pub mod stock;
pub mod validation;
