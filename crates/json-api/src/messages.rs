//! Plain confirmation responses

use salvo::{oapi::ToSchema, prelude::Json};
use serde::{Deserialize, Serialize};

/// Confirmation message
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MessageResponse {
    /// Human readable outcome
    pub message: String,
}

pub(crate) fn message(text: &str) -> Json<MessageResponse> {
    Json(MessageResponse {
        message: text.to_string(),
    })
}
