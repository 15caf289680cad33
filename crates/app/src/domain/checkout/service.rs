//! Checkout service.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashMap;

use crate::{
    database::Db,
    domain::{
        checkout::{
            errors::CheckoutServiceError,
            models::{CheckoutSettings, NewCheckout},
        },
        products::{
            models::{Product, ProductId},
            repository::PgProductsRepository,
        },
        stock::{self, RequestedQuantity, StockVerification},
    },
    payments::{CheckoutLineItem, CheckoutSession, NewCheckoutSession, PaymentGateway},
};

#[derive(Clone)]
pub struct PgCheckoutService {
    db: Db,
    repository: PgProductsRepository,
    payments: Arc<dyn PaymentGateway>,
    settings: CheckoutSettings,
}

impl fmt::Debug for PgCheckoutService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PgCheckoutService")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl PgCheckoutService {
    #[must_use]
    pub fn new(db: Db, payments: Arc<dyn PaymentGateway>, settings: CheckoutSettings) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
            payments,
            settings,
        }
    }

    fn session_for(
        &self,
        checkout: &NewCheckout,
        products: &[Product],
    ) -> Result<NewCheckoutSession, CheckoutServiceError> {
        let catalog: FxHashMap<ProductId, &Product> =
            products.iter().map(|product| (product.id, product)).collect();

        let line_items = checkout
            .items
            .iter()
            .map(|item| {
                let product = catalog
                    .get(&item.product_id)
                    .ok_or(CheckoutServiceError::MissingProduct(item.product_id))?;

                Ok(CheckoutLineItem {
                    name: product.name.clone(),
                    image_url: self.settings.image_url(&product.image),
                    currency: self.settings.currency.clone(),
                    unit_amount: product.price,
                    quantity: item.quantity.get(),
                })
            })
            .collect::<Result<Vec<_>, CheckoutServiceError>>()?;

        Ok(NewCheckoutSession {
            line_items,
            success_url: self.settings.success_url.clone(),
            cancel_url: checkout.return_url.as_str().to_string(),
            allowed_countries: self.settings.allowed_countries.clone(),
        })
    }
}

#[async_trait]
impl CheckoutService for PgCheckoutService {
    async fn verify_quantities(
        &self,
        items: Vec<RequestedQuantity>,
    ) -> Result<StockVerification, CheckoutServiceError> {
        let ids = distinct_ids(&items);

        let mut tx = self.db.begin_transaction().await?;

        let levels = self.repository.get_product_stocks(&mut tx, &ids).await?;

        tx.commit().await?;

        Ok(stock::reconcile(&items, &levels)?)
    }

    async fn create_session(
        &self,
        checkout: NewCheckout,
    ) -> Result<CheckoutSession, CheckoutServiceError> {
        let ids = distinct_ids(&checkout.items);

        let mut tx = self.db.begin_transaction().await?;

        let products = self.repository.get_products_by_ids(&mut tx, &ids).await?;

        tx.commit().await?;

        let session = self.session_for(&checkout, &products)?;

        let created = self.payments.create_checkout_session(session).await?;

        tracing::info!(session_id = %created.id, lines = checkout.items.len(), "created checkout session");

        Ok(created)
    }
}

fn distinct_ids(items: &[RequestedQuantity]) -> Vec<ProductId> {
    let mut ids: Vec<ProductId> = items.iter().map(|item| item.product_id).collect();

    ids.sort_unstable();
    ids.dedup();

    ids
}

#[automock]
#[async_trait]
pub trait CheckoutService: Send + Sync {
    /// Compare requested quantities with current stock levels.
    async fn verify_quantities(
        &self,
        items: Vec<RequestedQuantity>,
    ) -> Result<StockVerification, CheckoutServiceError>;

    /// Create a hosted payment session for the requested items.
    async fn create_session(
        &self,
        checkout: NewCheckout,
    ) -> Result<CheckoutSession, CheckoutServiceError>;
}
