//! Contacts service.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::contacts::{
        errors::ContactsServiceError,
        models::{Contact, NewContact},
        repository::PgContactsRepository,
    },
    mail::{MailMessage, Mailer},
};

/// Subject line of the notification sent for every submission.
pub const NOTIFICATION_SUBJECT: &str = "New Contact Form Submission";

/// Addresses contact notifications are sent between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSettings {
    pub sender: String,
    pub receiver: String,
}

#[derive(Clone)]
pub struct PgContactsService {
    db: Db,
    repository: PgContactsRepository,
    mailer: Arc<dyn Mailer>,
    settings: ContactSettings,
}

impl fmt::Debug for PgContactsService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PgContactsService")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl PgContactsService {
    #[must_use]
    pub fn new(db: Db, mailer: Arc<dyn Mailer>, settings: ContactSettings) -> Self {
        Self {
            db,
            repository: PgContactsRepository::new(),
            mailer,
            settings,
        }
    }

    fn notification(&self, contact: &Contact) -> MailMessage {
        MailMessage {
            from: self.settings.sender.clone(),
            to: self.settings.receiver.clone(),
            subject: NOTIFICATION_SUBJECT.to_string(),
            text: format!(
                "First Name: {}\nLast Name: {}\nEmail: {}\nSubject: {}\n",
                contact.first_name, contact.last_name, contact.email, contact.subject
            ),
        }
    }
}

#[async_trait]
impl ContactsService for PgContactsService {
    async fn submit(&self, contact: NewContact) -> Result<Contact, ContactsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let contact = self.repository.insert_contact(&mut tx, &contact).await?;

        tx.commit().await?;

        self.mailer
            .send(self.notification(&contact))
            .await
            .map_err(ContactsServiceError::Notification)?;

        Ok(contact)
    }
}

#[automock]
#[async_trait]
pub trait ContactsService: Send + Sync {
    /// Store a submission and notify the shop owner by email.
    ///
    /// The submission stays stored when the notification fails.
    async fn submit(&self, contact: NewContact) -> Result<Contact, ContactsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{mail::{MailError, MockMailer}, test::TestContext};

    use super::*;

    fn settings() -> ContactSettings {
        ContactSettings {
            sender: "shop@example.com".to_string(),
            receiver: "owner@example.com".to_string(),
        }
    }

    fn ada() -> NewContact {
        NewContact::parse("Ada", "Lovelace", "ada@example.com", "Engines")
            .expect("valid contact")
    }

    #[tokio::test]
    async fn submit_stores_contact_and_sends_notification() -> TestResult {
        let ctx = TestContext::new().await;

        let mut mailer = MockMailer::new();

        mailer
            .expect_send()
            .once()
            .withf(|message| {
                message.from == "shop@example.com"
                    && message.to == "owner@example.com"
                    && message.subject == NOTIFICATION_SUBJECT
                    && message.text.contains("First Name: Ada")
                    && message.text.contains("Email: ada@example.com")
                    && message.text.contains("Subject: Engines")
            })
            .returning(|_| Ok(()));

        let service = PgContactsService::new(ctx.service_db(), Arc::new(mailer), settings());

        let contact = service.submit(ada()).await?;

        assert_eq!(contact.last_name, "Lovelace");
        assert_eq!(ctx.count_contacts().await?, 1);

        Ok(())
    }

    #[tokio::test]
    async fn submit_keeps_contact_when_notification_fails() -> TestResult {
        let ctx = TestContext::new().await;

        let mut mailer = MockMailer::new();

        mailer
            .expect_send()
            .once()
            .returning(|_| Err(MailError::Rejected("status 503".to_string())));

        let service = PgContactsService::new(ctx.service_db(), Arc::new(mailer), settings());

        let result = service.submit(ada()).await;

        assert!(
            matches!(result, Err(ContactsServiceError::Notification(_))),
            "expected Notification, got {result:?}"
        );
        assert_eq!(ctx.count_contacts().await?, 1);

        Ok(())
    }
}
