//! Verify Quantities Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront_app::domain::stock::{StockShortfall, StockVerification};

use crate::{
    checkout::{errors::into_status_error, requests::VerifyQuantitiesRequest},
    extensions::*,
    state::State,
};

/// Insufficient Stock Entry
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InsufficientStockResponse {
    /// Product identifier
    pub id: i64,

    /// Product name
    pub name: String,

    /// Units currently in stock
    pub quantity_in_stock: u32,
}

impl From<StockShortfall> for InsufficientStockResponse {
    fn from(shortfall: StockShortfall) -> Self {
        Self {
            id: shortfall.product_id.into_i64(),
            name: shortfall.name,
            quantity_in_stock: shortfall.quantity_in_stock,
        }
    }
}

/// Verify Quantities Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VerifyQuantitiesResponse {
    /// Whether every requested quantity is in stock
    pub quantities_valid: bool,

    /// Products that are short, present only when some are
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insufficient_stock_products: Option<Vec<InsufficientStockResponse>>,
}

impl From<StockVerification> for VerifyQuantitiesResponse {
    fn from(verification: StockVerification) -> Self {
        if verification.all_sufficient() {
            return Self {
                quantities_valid: true,
                insufficient_stock_products: None,
            };
        }

        Self {
            quantities_valid: false,
            insufficient_stock_products: Some(
                verification
                    .insufficient
                    .into_iter()
                    .map(Into::into)
                    .collect(),
            ),
        }
    }
}

/// Verify Quantities Handler
///
/// Checks requested quantities against current stock levels.
#[endpoint(
    tags("checkout"),
    summary = "Verify Cart Quantities",
    responses(
        (status_code = StatusCode::OK, description = "Verification result"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<VerifyQuantitiesRequest>,
    depot: &mut Depot,
) -> Result<Json<VerifyQuantitiesResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let items = json.into_inner().parse().or_400()?;

    let verification = state
        .app
        .checkout
        .verify_quantities(items)
        .await
        .map_err(into_status_error)?;

    Ok(Json(verification.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use storefront_app::domain::{
        checkout::{CheckoutServiceError, MockCheckoutService},
        products::models::ProductId,
    };

    use crate::test_helpers::checkout_service;

    use super::*;

    fn make_service(repo: MockCheckoutService) -> Service {
        checkout_service(
            repo,
            Router::with_path("checkout/verify-quantities").post(handler),
        )
    }

    #[tokio::test]
    async fn verify_all_in_stock_omits_shortfalls() -> TestResult {
        let mut repo = MockCheckoutService::new();

        repo.expect_verify_quantities()
            .once()
            .withf(|items| items.len() == 2)
            .return_once(|_| Ok(StockVerification::default()));

        let body: serde_json::Value =
            TestClient::post("http://example.com/checkout/verify-quantities")
                .json(&json!({ "cartItems": [{ "id": 1, "quantity": 2 }, { "id": 2, "quantity": 1 }] }))
                .send(&make_service(repo))
                .await
                .take_json()
                .await?;

        assert_eq!(body, json!({ "quantitiesValid": true }));

        Ok(())
    }

    #[tokio::test]
    async fn verify_reports_short_products() -> TestResult {
        let mut repo = MockCheckoutService::new();

        repo.expect_verify_quantities().once().return_once(|_| {
            Ok(StockVerification {
                insufficient: vec![StockShortfall {
                    product_id: ProductId::from_i64(2),
                    name: "Desk".to_string(),
                    quantity_in_stock: 1,
                }],
            })
        });

        let body: serde_json::Value =
            TestClient::post("http://example.com/checkout/verify-quantities")
                .json(&json!({ "cartItems": [{ "id": 1, "quantity": 5 }, { "id": 2, "quantity": 2 }] }))
                .send(&make_service(repo))
                .await
                .take_json()
                .await?;

        assert_eq!(
            body,
            json!({
                "quantitiesValid": false,
                "insufficientStockProducts": [{ "id": 2, "name": "Desk", "quantityInStock": 1 }]
            })
        );

        Ok(())
    }

    #[tokio::test]
    async fn verify_unknown_product_returns_404() {
        let mut repo = MockCheckoutService::new();

        repo.expect_verify_quantities()
            .once()
            .return_once(|_| Err(CheckoutServiceError::MissingProduct(ProductId::from_i64(9))));

        let res = TestClient::post("http://example.com/checkout/verify-quantities")
            .json(&json!({ "cartItems": [{ "id": 9, "quantity": 1 }] }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn verify_zero_quantity_returns_400() {
        let res = TestClient::post("http://example.com/checkout/verify-quantities")
            .json(&json!({ "cartItems": [{ "id": 1, "quantity": 0 }] }))
            .send(&make_service(MockCheckoutService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
