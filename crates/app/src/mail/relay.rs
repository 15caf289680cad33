//! HTTP mail relay client.

use async_trait::async_trait;
use reqwest::Client;

use crate::{
    mail::{MailError, MailMessage, Mailer},
    secrets::Secret,
};

/// Configuration for the HTTP mail relay.
#[derive(Debug, Clone)]
pub struct MailRelayConfig {
    /// Endpoint that accepts JSON `{from, to, subject, text}` messages.
    pub endpoint: String,

    /// Bearer token for the relay.
    pub token: Secret,
}

/// Client posting messages to a transactional mail relay.
#[derive(Debug, Clone)]
pub struct MailRelayClient {
    config: MailRelayConfig,
    http: Client,
}

impl MailRelayClient {
    #[must_use]
    pub fn new(config: MailRelayConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl Mailer for MailRelayClient {
    async fn send(&self, message: MailMessage) -> Result<(), MailError> {
        let response = self
            .http
            .post(&self.config.endpoint)
            .bearer_auth(self.config.token.expose())
            .json(&message)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(MailError::Rejected(format!("status {status}: {text}")));
        }

        tracing::debug!(to = %message.to, subject = %message.subject, "mail relayed");

        Ok(())
    }
}
