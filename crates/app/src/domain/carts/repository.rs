//! Cart Lines Repository

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::{
    carts::models::{CartId, CartItem, CartLine, CartLineChange, CartLineUpdate, NewCartLine},
    products::{models::ProductId, repository::try_get_count},
};

const ADD_CART_LINE_SQL: &str = include_str!("sql/add_cart_line.sql");
const UPDATE_CART_LINE_QUANTITY_SQL: &str = include_str!("sql/update_cart_line_quantity.sql");
const DELETE_CART_LINE_SQL: &str = include_str!("sql/delete_cart_line.sql");
const GET_CART_ITEMS_SQL: &str = include_str!("sql/get_cart_items.sql");
const DELETE_STALE_CARTS_SQL: &str = include_str!("sql/delete_stale_carts.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartLinesRepository;

impl PgCartLinesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Insert the line or add to its quantity in a single statement.
    pub(crate) async fn add_cart_line(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        line: NewCartLine,
    ) -> Result<CartLineChange, sqlx::Error> {
        let row = query(ADD_CART_LINE_SQL)
            .bind(line.cart_id.as_str())
            .bind(line.product_id.into_i64())
            .bind(line.quantity.to_i32())
            .fetch_one(&mut **tx)
            .await?;

        let inserted: bool = row.try_get("inserted")?;
        let line = CartLine::from_row(&row)?;

        Ok(if inserted {
            CartLineChange::Created(line)
        } else {
            CartLineChange::Incremented(line)
        })
    }

    pub(crate) async fn update_cart_line_quantity(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        update: CartLineUpdate,
    ) -> Result<CartLine, sqlx::Error> {
        query_as::<Postgres, CartLine>(UPDATE_CART_LINE_QUANTITY_SQL)
            .bind(update.cart_id.as_str())
            .bind(update.product_id.into_i64())
            .bind(update.quantity.to_i32())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_cart_line(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: &CartId,
        product: ProductId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_CART_LINE_SQL)
            .bind(cart.as_str())
            .bind(product.into_i64())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn get_cart_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: &CartId,
    ) -> Result<Vec<CartItem>, sqlx::Error> {
        query_as::<Postgres, CartItem>(GET_CART_ITEMS_SQL)
            .bind(cart.as_str())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn delete_stale_carts(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cutoff: Timestamp,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_STALE_CARTS_SQL)
            .bind(SqlxTimestamp::from(cutoff))
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for CartLine {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            cart_id: CartId::from_stored(row.try_get("cart_id")?),
            product_id: ProductId::from_i64(row.try_get("product_id")?),
            quantity: try_get_count(row, "quantity")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for CartItem {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let price_i64: i64 = row.try_get("price")?;

        let price = u64::try_from(price_i64).map_err(|e| sqlx::Error::ColumnDecode {
            index: "price".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            product_id: ProductId::from_i64(row.try_get("product_id")?),
            quantity: try_get_count(row, "quantity")?,
            price,
            image: row.try_get("main_image_path")?,
            name: row.try_get("name")?,
            quantity_in_stock: try_get_count(row, "quantity_in_stock")?,
        })
    }
}
