//! Transactional mail delivery

mod relay;

use async_trait::async_trait;
use mockall::automock;
use serde::Serialize;
use thiserror::Error;

pub use relay::{MailRelayClient, MailRelayConfig};

/// A plain-text email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text: String,
}

/// Errors that can occur when handing a message to the relay.
#[derive(Debug, Error)]
pub enum MailError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The relay rejected the message.
    #[error("mail relay rejected message: {0}")]
    Rejected(String),
}

#[automock]
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver a single message.
    async fn send(&self, message: MailMessage) -> Result<(), MailError>;
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn message_serializes_to_relay_payload() -> TestResult {
        let message = MailMessage {
            from: "shop@example.com".to_string(),
            to: "owner@example.com".to_string(),
            subject: "Hello".to_string(),
            text: "Body".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&message)?,
            json!({
                "from": "shop@example.com",
                "to": "owner@example.com",
                "subject": "Hello",
                "text": "Body"
            })
        );

        Ok(())
    }
}
