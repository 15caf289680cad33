//! Stripe Checkout client.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    payments::{CheckoutSession, NewCheckoutSession, PaymentError, PaymentGateway},
    secrets::Secret,
};

/// Configuration for the Stripe API.
#[derive(Debug, Clone)]
pub struct StripeConfig {
    /// API base address, e.g. `"https://api.stripe.com"`.
    pub api_base: String,

    /// Secret API key.
    pub secret_key: Secret,
}

/// HTTP client for creating Stripe Checkout sessions.
#[derive(Debug, Clone)]
pub struct StripeClient {
    config: StripeConfig,
    http: Client,
}

impl StripeClient {
    #[must_use]
    pub fn new(config: StripeConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl PaymentGateway for StripeClient {
    async fn create_checkout_session(
        &self,
        session: NewCheckoutSession,
    ) -> Result<CheckoutSession, PaymentError> {
        let url = format!(
            "{}/v1/checkout/sessions",
            self.config.api_base.trim_end_matches('/')
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(self.config.secret_key.expose())
            .form(&session_form(&session))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(PaymentError::UnexpectedResponse(format!(
                "checkout session request failed with status {status}: {text}"
            )));
        }

        response.json::<SessionResponse>().await?.into_session()
    }
}

/// Flatten a session into Stripe's bracketed form encoding.
fn session_form(session: &NewCheckoutSession) -> Vec<(String, String)> {
    let mut form = vec![
        ("mode".to_string(), "payment".to_string()),
        ("payment_method_types[0]".to_string(), "card".to_string()),
        ("success_url".to_string(), session.success_url.clone()),
        ("cancel_url".to_string(), session.cancel_url.clone()),
    ];

    for (index, country) in session.allowed_countries.iter().enumerate() {
        form.push((
            format!("shipping_address_collection[allowed_countries][{index}]"),
            country.clone(),
        ));
    }

    for (index, item) in session.line_items.iter().enumerate() {
        let prefix = format!("line_items[{index}]");

        form.push((
            format!("{prefix}[price_data][currency]"),
            item.currency.clone(),
        ));
        form.push((
            format!("{prefix}[price_data][product_data][name]"),
            item.name.clone(),
        ));
        form.push((
            format!("{prefix}[price_data][product_data][images][0]"),
            item.image_url.clone(),
        ));
        form.push((
            format!("{prefix}[price_data][unit_amount]"),
            item.unit_amount.to_string(),
        ));
        form.push((format!("{prefix}[quantity]"), item.quantity.to_string()));
    }

    form
}

#[derive(Debug, Deserialize)]
struct SessionResponse {
    id: String,
    url: Option<String>,
}

impl SessionResponse {
    fn into_session(self) -> Result<CheckoutSession, PaymentError> {
        let url = self.url.ok_or_else(|| {
            PaymentError::UnexpectedResponse(format!("session {} has no redirect url", self.id))
        })?;

        Ok(CheckoutSession { id: self.id, url })
    }
}
