//! Checkout Models

use reqwest::Url;

use crate::domain::{stock::RequestedQuantity, validation::ValidationError};

/// Maximum accepted length of a return URL.
pub const MAX_RETURN_URL_LEN: usize = 2048;

/// Absolute `http`/`https` URL the payment page sends cancelled buyers back to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnUrl(String);

impl ReturnUrl {
    /// Validate a client-supplied return URL.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the value is blank, too long, or not
    /// an absolute `http`/`https` URL with a host.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let value = value.trim();

        if value.is_empty() {
            return Err(ValidationError::Missing { field: "returnUrl" });
        }

        if value.len() > MAX_RETURN_URL_LEN {
            return Err(ValidationError::TooLong {
                field: "returnUrl",
                max: MAX_RETURN_URL_LEN,
            });
        }

        if value.chars().any(char::is_whitespace) {
            return Err(ValidationError::Malformed { field: "returnUrl" });
        }

        let url = Url::parse(value).map_err(|_ignored| ValidationError::Malformed {
            field: "returnUrl",
        })?;

        let web_scheme = matches!(url.scheme(), "http" | "https");
        let has_host = url.host_str().is_some_and(|host| !host.is_empty());

        if !web_scheme || !has_host {
            return Err(ValidationError::Malformed { field: "returnUrl" });
        }

        Ok(Self(url.into()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A validated checkout request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCheckout {
    pub items: Vec<RequestedQuantity>,
    pub return_url: ReturnUrl,
}

impl NewCheckout {
    /// # Errors
    ///
    /// Returns [`ValidationError::Missing`] when `items` is empty.
    pub fn new(items: Vec<RequestedQuantity>, return_url: ReturnUrl) -> Result<Self, ValidationError> {
        if items.is_empty() {
            return Err(ValidationError::Missing { field: "cartItems" });
        }

        Ok(Self { items, return_url })
    }
}

/// Static parameters applied to every checkout session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSettings {
    /// Lowercase ISO currency code, e.g. `"eur"`.
    pub currency: String,

    /// Where the payment page redirects after a successful payment.
    pub success_url: String,

    /// Public origin product image URLs are built from.
    pub public_base_url: String,

    /// Countries shipping addresses may be collected for.
    pub allowed_countries: Vec<String>,
}

impl CheckoutSettings {
    /// Absolute URL of a product image served under `/product-images`.
    #[must_use]
    pub fn image_url(&self, image: &str) -> String {
        format!(
            "{}/product-images/{}",
            self.public_base_url.trim_end_matches('/'),
            image.trim_start_matches('/')
        )
    }
}
