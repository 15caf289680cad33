//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::{
        carts::{CartsService, PgCartsService},
        checkout::{CheckoutService, PgCheckoutService, models::CheckoutSettings},
        contacts::{ContactSettings, ContactsService, PgContactsService},
        products::{PgProductsService, ProductsService},
    },
    mail::{MailRelayClient, MailRelayConfig},
    payments::{StripeClient, StripeConfig},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrations(#[source] sqlx::migrate::MigrateError),
}

/// Everything needed to wire the application services.
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub database_url: String,
    pub max_connections: u32,
    pub stripe: StripeConfig,
    pub checkout: CheckoutSettings,
    pub mail: MailRelayConfig,
    pub contact: ContactSettings,
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub carts: Arc<dyn CartsService>,
    pub checkout: Arc<dyn CheckoutService>,
    pub contacts: Arc<dyn ContactsService>,
}

impl AppContext {
    /// Connect to the database, apply migrations, and build every service.
    ///
    /// # Errors
    ///
    /// Returns an error when connecting to the database or migrating it fails.
    pub async fn from_settings(settings: AppSettings) -> Result<Self, AppInitError> {
        let pool = database::connect(&settings.database_url, settings.max_connections)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migrations)?;

        let db = Db::new(pool);

        Ok(Self {
            products: Arc::new(PgProductsService::new(db.clone())),
            carts: Arc::new(PgCartsService::new(db.clone())),
            checkout: Arc::new(PgCheckoutService::new(
                db.clone(),
                Arc::new(StripeClient::new(settings.stripe)),
                settings.checkout,
            )),
            contacts: Arc::new(PgContactsService::new(
                db,
                Arc::new(MailRelayClient::new(settings.mail)),
                settings.contact,
            )),
        })
    }
}
