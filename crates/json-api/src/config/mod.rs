//! Server configuration module

use clap::Parser;

use storefront_app::context::AppSettings;

use crate::config::{
    checkout::CheckoutConfig,
    db::DatabaseConfig,
    janitor::JanitorSchedule,
    mail::MailConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    server::ServerRuntimeConfig,
    web::WebConfig,
};

pub(crate) mod checkout;
pub(crate) mod db;
pub(crate) mod janitor;
pub(crate) mod mail;
pub(crate) mod observability;
pub(crate) mod server;
pub(crate) mod web;

/// Storefront JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "storefront-json", about = "Storefront JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Observability (traces/metrics) settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// CORS and static file settings.
    #[command(flatten)]
    pub web: WebConfig,

    /// Payment provider and checkout session settings.
    #[command(flatten)]
    pub checkout: CheckoutConfig,

    /// Contact notification mail settings.
    #[command(flatten)]
    pub mail: MailConfig,

    /// Stale cart cleanup schedule.
    #[command(flatten)]
    pub janitor: JanitorSchedule,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }

    /// Settings the application services are built from.
    #[must_use]
    pub fn app_settings(&self) -> AppSettings {
        AppSettings {
            database_url: self.database.database_url.clone(),
            max_connections: self.database.database_max_connections,
            stripe: self.checkout.stripe_config(),
            checkout: self.checkout.checkout_settings(&self.web.public_base_url),
            mail: self.mail.relay_config(),
            contact: self.mail.contact_settings(),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    const REQUIRED: [&str; 13] = [
        "storefront-json",
        "--database-url",
        "postgres://localhost/storefront",
        "--stripe-secret-key",
        "sk_test_123",
        "--mail-relay-url",
        "http://localhost:8025/send",
        "--mail-relay-token",
        "relay-token",
        "--mail-sender",
        "shop@example.com",
        "--mail-receiver",
        "owner@example.com",
    ];

    #[test]
    fn defaults_are_applied() -> TestResult {
        let config = ServerConfig::try_parse_from(REQUIRED)?;

        assert_eq!(config.socket_addr(), "0.0.0.0:4000");
        assert_eq!(config.web.cors_allowed_origin, "*");
        assert_eq!(config.janitor.cart_sweep_interval_seconds, 43_200);

        let settings = config.app_settings();

        assert_eq!(settings.max_connections, 10);
        assert_eq!(settings.checkout.currency, "eur");
        assert_eq!(settings.checkout.allowed_countries, ["US", "CA", "AT"]);
        assert_eq!(settings.stripe.secret_key.expose(), "sk_test_123");

        Ok(())
    }

    #[test]
    fn debug_output_hides_secrets() -> TestResult {
        let config = ServerConfig::try_parse_from(REQUIRED)?;

        let debug = format!("{config:?}");

        assert!(!debug.contains("sk_test_123"), "stripe key leaked: {debug}");
        assert!(!debug.contains("relay-token"), "relay token leaked: {debug}");

        Ok(())
    }
}
