//! Submit Contact Form Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront_app::domain::{contacts::models::NewContact, validation::ValidationError};

use crate::{
    contact::errors::into_status_error,
    extensions::*,
    messages::{MessageResponse, message},
    state::State,
};

/// Contact Form Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ContactRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub subject: String,
}

impl TryFrom<ContactRequest> for NewContact {
    type Error = ValidationError;

    fn try_from(request: ContactRequest) -> Result<Self, Self::Error> {
        NewContact::parse(
            &request.first_name,
            &request.last_name,
            &request.email,
            &request.subject,
        )
    }
}

/// Submit Contact Form Handler
///
/// Stores a contact submission and notifies the shop owner.
#[endpoint(
    tags("contact"),
    summary = "Submit Contact Form",
    responses(
        (status_code = StatusCode::CREATED, description = "Contact stored and notification sent"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::BAD_GATEWAY, description = "Notification failed"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<ContactRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<MessageResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let contact = NewContact::try_from(json.into_inner()).or_400()?;

    state
        .app
        .contacts
        .submit(contact)
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(message(
        "Contact form data saved and email sent successfully.",
    ))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use storefront_app::{
        domain::contacts::{ContactsServiceError, MockContactsService, models::Contact},
        mail::MailError,
    };

    use crate::test_helpers::contacts_service;

    use super::*;

    fn make_service(repo: MockContactsService) -> Service {
        contacts_service(repo, Router::with_path("contact/submit").post(handler))
    }

    fn form() -> serde_json::Value {
        json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "subject": "Order question"
        })
    }

    #[tokio::test]
    async fn submit_returns_201() -> TestResult {
        let mut repo = MockContactsService::new();

        repo.expect_submit()
            .once()
            .withf(|contact| contact.email == "ada@example.com" && contact.first_name == "Ada")
            .return_once(|contact| {
                Ok(Contact {
                    id: 1,
                    first_name: contact.first_name,
                    last_name: contact.last_name,
                    email: contact.email,
                    subject: contact.subject,
                    created_at: Timestamp::now(),
                })
            });

        let mut res = TestClient::post("http://example.com/contact/submit")
            .json(&form())
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(
            body.message,
            "Contact form data saved and email sent successfully."
        );

        Ok(())
    }

    #[tokio::test]
    async fn submit_mail_failure_returns_502() {
        let mut repo = MockContactsService::new();

        repo.expect_submit().once().return_once(|_| {
            Err(ContactsServiceError::Notification(MailError::Rejected(
                "status 503".to_string(),
            )))
        });

        let res = TestClient::post("http://example.com/contact/submit")
            .json(&form())
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_GATEWAY));
    }

    #[tokio::test]
    async fn submit_malformed_email_returns_400() {
        let res = TestClient::post("http://example.com/contact/submit")
            .json(&json!({
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "not-an-email",
                "subject": "Order question"
            }))
            .send(&make_service(MockContactsService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn submit_blank_subject_returns_400() {
        let mut form = form();

        if let Some(subject) = form.get_mut("subject") {
            *subject = json!("   ");
        }

        let res = TestClient::post("http://example.com/contact/submit")
            .json(&form)
            .send(&make_service(MockContactsService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
