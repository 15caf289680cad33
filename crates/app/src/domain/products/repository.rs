//! Products Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::products::models::{Product, ProductId, ProductStock};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const LATEST_PRODUCTS_SQL: &str = include_str!("sql/latest_products.sql");
const GET_PRODUCTS_BY_IDS_SQL: &str = include_str!("sql/get_products_by_ids.sql");
const GET_PRODUCT_STOCK_SQL: &str = include_str!("sql/get_product_stock.sql");
const GET_PRODUCT_STOCKS_SQL: &str = include_str!("sql/get_product_stocks.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(LIST_PRODUCTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn latest_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        limit: u32,
    ) -> Result<Vec<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(LATEST_PRODUCTS_SQL)
            .bind(i64::from(limit))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_products_by_ids(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        ids: &[ProductId],
    ) -> Result<Vec<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(GET_PRODUCTS_BY_IDS_SQL)
            .bind(to_i64s(ids))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_product_stock(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: ProductId,
    ) -> Result<ProductStock, sqlx::Error> {
        query_as::<Postgres, ProductStock>(GET_PRODUCT_STOCK_SQL)
            .bind(id.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_product_stocks(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        ids: &[ProductId],
    ) -> Result<Vec<ProductStock>, sqlx::Error> {
        query_as::<Postgres, ProductStock>(GET_PRODUCT_STOCKS_SQL)
            .bind(to_i64s(ids))
            .fetch_all(&mut **tx)
            .await
    }
}

fn to_i64s(ids: &[ProductId]) -> Vec<i64> {
    ids.iter().copied().map(ProductId::into_i64).collect()
}

impl<'r> FromRow<'r, PgRow> for Product {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let price_i64: i64 = row.try_get("price")?;

        let price = u64::try_from(price_i64).map_err(|e| sqlx::Error::ColumnDecode {
            index: "price".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            id: ProductId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            price,
            image: row.try_get("main_image_path")?,
            quantity_in_stock: try_get_count(row, "quantity_in_stock")?,
            added_at: row.try_get::<SqlxTimestamp, _>("added_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for ProductStock {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ProductId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            quantity_in_stock: try_get_count(row, "quantity_in_stock")?,
        })
    }
}

/// Read a non-negative `INTEGER` column.
pub(crate) fn try_get_count(row: &PgRow, col: &str) -> Result<u32, sqlx::Error> {
    let count_i32: i32 = row.try_get(col)?;

    u32::try_from(count_i32).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}
