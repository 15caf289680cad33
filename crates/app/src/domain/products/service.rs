//! Products service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::products::{
        errors::ProductsServiceError,
        models::{Product, ProductId, ProductStock},
        repository::PgProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let products = self.repository.list_products(&mut tx).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn latest_products(&self, limit: u32) -> Result<Vec<Product>, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let products = self.repository.latest_products(&mut tx, limit).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn get_product_stock(&self, id: ProductId) -> Result<ProductStock, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let stock = self.repository.get_product_stock(&mut tx, id).await?;

        tx.commit().await?;

        Ok(stock)
    }

    async fn get_products_by_ids(
        &self,
        ids: Vec<ProductId>,
    ) -> Result<Vec<Product>, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let products = self.repository.get_products_by_ids(&mut tx, &ids).await?;

        tx.commit().await?;

        Ok(products)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products, oldest first.
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieves the `limit` most recently added products, newest first.
    async fn latest_products(&self, limit: u32) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieve the stock level of a single product.
    async fn get_product_stock(&self, id: ProductId) -> Result<ProductStock, ProductsServiceError>;

    /// Retrieve the products matching `ids`. Unknown ids are skipped.
    async fn get_products_by_ids(
        &self,
        ids: Vec<ProductId>,
    ) -> Result<Vec<Product>, ProductsServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::{SignedDuration, Timestamp};
    use testresult::TestResult;

    use crate::test::{TestContext, helpers::NewTestProduct};

    use super::*;

    #[tokio::test]
    async fn list_products_returns_oldest_first() -> TestResult {
        let ctx = TestContext::new().await;
        let now = Timestamp::now();

        let newer = ctx
            .insert_product(NewTestProduct::named("Newer").added_at(now))
            .await?;

        let older = ctx
            .insert_product(
                NewTestProduct::named("Older").added_at(now - SignedDuration::from_hours(2)),
            )
            .await?;

        let products = ctx.products.list_products().await?;
        let ids: Vec<ProductId> = products.iter().map(|p| p.id).collect();

        assert_eq!(ids, vec![older, newer]);

        Ok(())
    }

    #[tokio::test]
    async fn list_products_empty_when_none_exist() -> TestResult {
        let ctx = TestContext::new().await;

        let products = ctx.products.list_products().await?;

        assert!(products.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn latest_products_returns_newest_first_with_limit() -> TestResult {
        let ctx = TestContext::new().await;
        let now = Timestamp::now();
        let mut ids = Vec::new();

        for hours_ago in (0..6).rev() {
            let id = ctx
                .insert_product(
                    NewTestProduct::named(&format!("Product {hours_ago}"))
                        .added_at(now - SignedDuration::from_hours(hours_ago)),
                )
                .await?;

            ids.push(id);
        }

        let latest = ctx.products.latest_products(4).await?;
        let latest_ids: Vec<ProductId> = latest.iter().map(|p| p.id).collect();
        let expected: Vec<ProductId> = ids.iter().rev().take(4).copied().collect();

        assert_eq!(latest_ids, expected);

        Ok(())
    }

    #[tokio::test]
    async fn get_product_stock_returns_quantity() -> TestResult {
        let ctx = TestContext::new().await;

        let id = ctx
            .insert_product(NewTestProduct::named("Lamp").stock(12))
            .await?;

        let stock = ctx.products.get_product_stock(id).await?;

        assert_eq!(stock.id, id);
        assert_eq!(stock.name, "Lamp");
        assert_eq!(stock.quantity_in_stock, 12);

        Ok(())
    }

    #[tokio::test]
    async fn get_product_stock_unknown_id_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .products
            .get_product_stock(ProductId::from_i64(404))
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn get_products_by_ids_skips_unknown_ids() -> TestResult {
        let ctx = TestContext::new().await;

        let a = ctx.insert_product(NewTestProduct::named("A")).await?;
        let b = ctx.insert_product(NewTestProduct::named("B")).await?;

        ctx.insert_product(NewTestProduct::named("C")).await?;

        let products = ctx
            .products
            .get_products_by_ids(vec![b, ProductId::from_i64(9_999), a])
            .await?;

        let ids: Vec<ProductId> = products.iter().map(|p| p.id).collect();

        assert_eq!(ids, vec![a, b]);

        Ok(())
    }
}
