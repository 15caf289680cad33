//! Carts service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        carts::{
            errors::CartsServiceError,
            models::{CartId, CartItem, CartLine, CartLineChange, CartLineUpdate, NewCartLine},
            repository::PgCartLinesRepository,
        },
        products::models::ProductId,
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    repository: PgCartLinesRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCartLinesRepository::new(),
        }
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn add_item(&self, line: NewCartLine) -> Result<CartLineChange, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let change = self.repository.add_cart_line(&mut tx, line).await?;

        tx.commit().await?;

        Ok(change)
    }

    async fn update_quantity(&self, update: CartLineUpdate) -> Result<CartLine, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let line = self
            .repository
            .update_cart_line_quantity(&mut tx, update)
            .await?;

        tx.commit().await?;

        Ok(line)
    }

    async fn remove_item(&self, cart: CartId, product: ProductId) -> Result<(), CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let rows_affected = self
            .repository
            .delete_cart_line(&mut tx, &cart, product)
            .await?;

        tx.commit().await?;

        tracing::debug!(cart_id = %cart, product_id = %product, rows_affected, "removed cart line");

        Ok(())
    }

    async fn get_cart(&self, cart: CartId) -> Result<Vec<CartItem>, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let items = self.repository.get_cart_items(&mut tx, &cart).await?;

        tx.commit().await?;

        Ok(items)
    }

    async fn delete_stale_carts(&self, cutoff: Timestamp) -> Result<u64, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let rows_affected = self.repository.delete_stale_carts(&mut tx, cutoff).await?;

        tx.commit().await?;

        Ok(rows_affected)
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Add `quantity` of a product to a cart, creating the line on first add.
    async fn add_item(&self, line: NewCartLine) -> Result<CartLineChange, CartsServiceError>;

    /// Overwrite the quantity of an existing cart line.
    async fn update_quantity(&self, update: CartLineUpdate) -> Result<CartLine, CartsServiceError>;

    /// Remove a product from a cart. Removing an absent line succeeds.
    async fn remove_item(&self, cart: CartId, product: ProductId) -> Result<(), CartsServiceError>;

    /// Retrieve the cart's lines joined with product details, in insertion order.
    async fn get_cart(&self, cart: CartId) -> Result<Vec<CartItem>, CartsServiceError>;

    /// Delete every cart whose most recently updated line is older than `cutoff`.
    ///
    /// Returns the number of deleted lines.
    async fn delete_stale_carts(&self, cutoff: Timestamp) -> Result<u64, CartsServiceError>;
}
