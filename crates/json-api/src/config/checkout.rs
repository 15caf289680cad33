//! Checkout Config

use clap::Args;

use storefront_app::{
    domain::checkout::models::CheckoutSettings, payments::StripeConfig, secrets::Secret,
};

/// Payment provider and checkout session settings.
#[derive(Debug, Args)]
pub struct CheckoutConfig {
    /// Stripe secret API key
    #[arg(long, env = "STRIPE_SECRET_KEY", hide_env_values = true)]
    pub stripe_secret_key: Secret,

    /// Stripe API base address
    #[arg(long, env = "STRIPE_API_BASE", default_value = "https://api.stripe.com")]
    pub stripe_api_base: String,

    /// Page buyers are sent to after a successful payment
    #[arg(
        long,
        env = "CHECKOUT_SUCCESS_URL",
        default_value = "http://localhost:3000/stripe-payment-successful-page/"
    )]
    pub checkout_success_url: String,

    /// Currency charged for every line item
    #[arg(long, env = "CHECKOUT_CURRENCY", default_value = "eur")]
    pub checkout_currency: String,

    /// Countries shipping addresses may be collected for
    #[arg(
        long,
        env = "CHECKOUT_SHIPPING_COUNTRIES",
        value_delimiter = ',',
        default_value = "US,CA,AT"
    )]
    pub checkout_shipping_countries: Vec<String>,
}

impl CheckoutConfig {
    #[must_use]
    pub fn stripe_config(&self) -> StripeConfig {
        StripeConfig {
            api_base: self.stripe_api_base.clone(),
            secret_key: self.stripe_secret_key.clone(),
        }
    }

    #[must_use]
    pub fn checkout_settings(&self, public_base_url: &str) -> CheckoutSettings {
        CheckoutSettings {
            currency: self.checkout_currency.to_lowercase(),
            success_url: self.checkout_success_url.clone(),
            public_base_url: public_base_url.to_string(),
            allowed_countries: self
                .checkout_shipping_countries
                .iter()
                .map(|country| country.trim().to_uppercase())
                .filter(|country| !country.is_empty())
                .collect(),
        }
    }
}
