//! Add To Cart Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use storefront_app::domain::carts::models::{CartLineChange, NewCartLine};

use crate::{
    carts::{errors::into_status_error, requests::CartLineRequest},
    extensions::*,
    messages::{MessageResponse, message},
    state::State,
};

/// Add To Cart Handler
///
/// Adds a product to a cart, increasing the quantity when it is already there.
#[endpoint(
    tags("cart"),
    summary = "Add Product to Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart line created or incremented"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CartLineRequest>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let line = NewCartLine::try_from(json.into_inner()).or_400()?;

    let change = state
        .app
        .carts
        .add_item(line)
        .await
        .map_err(into_status_error)?;

    Ok(match change {
        CartLineChange::Created(_) => message("Product added to cart successfully"),
        CartLineChange::Incremented(_) => message("Product quantity updated in cart successfully"),
    })
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use storefront_app::domain::{
        carts::{
            CartsServiceError, MockCartsService,
            models::{CartId, CartLine},
        },
        products::models::ProductId,
    };

    use crate::test_helpers::carts_service;

    use super::*;

    fn make_service(repo: MockCartsService) -> Service {
        carts_service(repo, Router::with_path("cart/add").post(handler))
    }

    fn line(quantity: u32) -> CartLine {
        CartLine {
            cart_id: CartId::from_stored("abc".to_string()),
            product_id: ProductId::from_i64(7),
            quantity,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[tokio::test]
    async fn add_new_line_reports_added() -> TestResult {
        let mut repo = MockCartsService::new();

        repo.expect_add_item()
            .once()
            .withf(|line| {
                line.cart_id.as_str() == "abc"
                    && line.product_id == ProductId::from_i64(7)
                    && line.quantity.get() == 2
            })
            .return_once(|_| Ok(CartLineChange::Created(line(2))));

        let response: MessageResponse = TestClient::post("http://example.com/cart/add")
            .json(&json!({ "cartId": "abc", "productId": 7, "quantity": 2 }))
            .send(&make_service(repo))
            .await
            .take_json()
            .await?;

        assert_eq!(response.message, "Product added to cart successfully");

        Ok(())
    }

    #[tokio::test]
    async fn add_existing_line_reports_increment() -> TestResult {
        let mut repo = MockCartsService::new();

        repo.expect_add_item()
            .once()
            .return_once(|_| Ok(CartLineChange::Incremented(line(5))));

        let response: MessageResponse = TestClient::post("http://example.com/cart/add")
            .json(&json!({ "cartId": "abc", "productId": 7, "quantity": 3 }))
            .send(&make_service(repo))
            .await
            .take_json()
            .await?;

        assert_eq!(
            response.message,
            "Product quantity updated in cart successfully"
        );

        Ok(())
    }

    #[tokio::test]
    async fn add_unknown_product_returns_404() {
        let mut repo = MockCartsService::new();

        repo.expect_add_item()
            .once()
            .return_once(|_| Err(CartsServiceError::InvalidReference));

        let res = TestClient::post("http://example.com/cart/add")
            .json(&json!({ "cartId": "abc", "productId": 404, "quantity": 1 }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn add_rejects_invalid_input_before_storage() {
        for body in [
            json!({ "cartId": "abc", "productId": 7, "quantity": 0 }),
            json!({ "cartId": "abc", "productId": -1, "quantity": 1 }),
            json!({ "cartId": "", "productId": 7, "quantity": 1 }),
            json!({ "cartId": "abc", "productId": 7 }),
        ] {
            let res = TestClient::post("http://example.com/cart/add")
                .json(&body)
                .send(&make_service(MockCartsService::new()))
                .await;

            assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST), "{body}");
        }
    }

    #[tokio::test]
    async fn add_quantity_overflow_returns_400() {
        let mut repo = MockCartsService::new();

        repo.expect_add_item()
            .once()
            .return_once(|_| Err(CartsServiceError::InvalidData));

        let res = TestClient::post("http://example.com/cart/add")
            .json(&json!({ "cartId": "abc", "productId": 7, "quantity": 2_147_483_647 }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn add_storage_failure_returns_500() {
        let mut repo = MockCartsService::new();

        repo.expect_add_item()
            .once()
            .return_once(|_| Err(CartsServiceError::Sql(sqlx::Error::PoolTimedOut)));

        let res = TestClient::post("http://example.com/cart/add")
            .json(&json!({ "cartId": "abc", "productId": 7, "quantity": 1 }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
    }
}
