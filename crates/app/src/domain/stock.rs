//! Stock reconciliation
//!
//! Compares requested quantities against a snapshot of catalog stock levels.
//! Nothing here touches storage; callers load the snapshot first.

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::domain::{
    products::models::{ProductId, ProductStock},
    quantity::Quantity,
};

/// A quantity of one product requested at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestedQuantity {
    pub product_id: ProductId,
    pub quantity: Quantity,
}

/// A product whose requested quantity exceeds the stock on hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockShortfall {
    pub product_id: ProductId,
    pub name: String,
    pub quantity_in_stock: u32,
}

/// Result of checking a set of requested quantities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockVerification {
    pub insufficient: Vec<StockShortfall>,
}

impl StockVerification {
    #[must_use]
    pub fn all_sufficient(&self) -> bool {
        self.insufficient.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StockError {
    #[error("product {0} not found")]
    MissingProduct(ProductId),
}

/// Check every requested quantity against `stock`.
///
/// Requests for the same product are summed before comparing. Shortfalls are
/// reported in the order products first appear in `requested`.
///
/// # Errors
///
/// Returns [`StockError::MissingProduct`] for the first requested product that
/// has no entry in `stock`.
pub fn reconcile(
    requested: &[RequestedQuantity],
    stock: &[ProductStock],
) -> Result<StockVerification, StockError> {
    let levels: FxHashMap<ProductId, &ProductStock> =
        stock.iter().map(|level| (level.id, level)).collect();

    let mut totals: Vec<(ProductId, u64)> = Vec::with_capacity(requested.len());
    let mut positions: FxHashMap<ProductId, usize> = FxHashMap::default();

    for line in requested {
        let quantity = u64::from(line.quantity.get());

        match positions.get(&line.product_id).copied() {
            Some(position) => {
                if let Some((_, total)) = totals.get_mut(position) {
                    *total += quantity;
                }
            }
            None => {
                positions.insert(line.product_id, totals.len());
                totals.push((line.product_id, quantity));
            }
        }
    }

    let mut verification = StockVerification::default();

    for (product_id, total) in totals {
        let level = levels
            .get(&product_id)
            .ok_or(StockError::MissingProduct(product_id))?;

        if total > u64::from(level.quantity_in_stock) {
            verification.insufficient.push(StockShortfall {
                product_id,
                name: level.name.clone(),
                quantity_in_stock: level.quantity_in_stock,
            });
        }
    }

    Ok(verification)
}
