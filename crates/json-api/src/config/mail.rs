//! Mail Config

use clap::Args;

use storefront_app::{
    domain::contacts::ContactSettings, mail::MailRelayConfig, secrets::Secret,
};

/// Contact notification mail settings.
#[derive(Debug, Args)]
pub struct MailConfig {
    /// Mail relay endpoint accepting JSON messages
    #[arg(long, env = "MAIL_RELAY_URL")]
    pub mail_relay_url: String,

    /// Mail relay bearer token
    #[arg(long, env = "MAIL_RELAY_TOKEN", hide_env_values = true)]
    pub mail_relay_token: Secret,

    /// Sender address of contact notifications
    #[arg(long, env = "MAIL_SENDER")]
    pub mail_sender: String,

    /// Recipient of contact notifications
    #[arg(long, env = "MAIL_RECEIVER")]
    pub mail_receiver: String,
}

impl MailConfig {
    #[must_use]
    pub fn relay_config(&self) -> MailRelayConfig {
        MailRelayConfig {
            endpoint: self.mail_relay_url.clone(),
            token: self.mail_relay_token.clone(),
        }
    }

    #[must_use]
    pub fn contact_settings(&self) -> ContactSettings {
        ContactSettings {
            sender: self.mail_sender.clone(),
            receiver: self.mail_receiver.clone(),
        }
    }
}
