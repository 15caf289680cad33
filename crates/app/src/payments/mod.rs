//! Hosted payment sessions

mod stripe;

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;

pub use stripe::{StripeClient, StripeConfig};

/// A single priced line on a checkout page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutLineItem {
    pub name: String,
    pub image_url: String,
    pub currency: String,
    /// Unit price in minor currency units.
    pub unit_amount: u64,
    pub quantity: u32,
}

/// Parameters for a new hosted checkout session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCheckoutSession {
    pub line_items: Vec<CheckoutLineItem>,
    pub success_url: String,
    pub cancel_url: String,
    pub allowed_countries: Vec<String>,
}

/// A created hosted checkout session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSession {
    pub id: String,
    pub url: String,
}

/// Errors that can occur when talking to the payment provider.
#[derive(Debug, Error)]
pub enum PaymentError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider returned a non-2xx response or an unexpected body.
    #[error("unexpected response from payment provider: {0}")]
    UnexpectedResponse(String),
}

#[automock]
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a hosted checkout session and return its redirect URL.
    async fn create_checkout_session(
        &self,
        session: NewCheckoutSession,
    ) -> Result<CheckoutSession, PaymentError>;
}
