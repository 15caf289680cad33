//! Contact Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::contacts::ContactsServiceError;

use crate::observability::{Upstream, record_upstream_failure};

pub(crate) fn into_status_error(error: ContactsServiceError) -> StatusError {
    match error {
        ContactsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid contact form data")
        }
        ContactsServiceError::Notification(source) => {
            error!("contact notification failed: {source}");

            record_upstream_failure(Upstream::MailRelay);

            StatusError::bad_gateway().brief("Contact form saved but notification failed")
        }
        ContactsServiceError::Sql(source) => {
            error!("contact storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
