//! JSON error envelopes for the HTTP API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use crate::error::DashError;

/// `{success: false, error, message?}` with a status code.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub error: String,
    pub message: Option<String>,
}

impl ApiError {
    /// 400 for a malformed path segment or query parameter.
    pub fn bad_request(error: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: error.into(),
            message: None,
        }
    }

    /// 500 for a failed service call; `resource` names what was being fetched.
    pub fn fetch(resource: &str, err: DashError) -> Self {
        error!(resource, error = %err, "request failed");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: format!("Failed to fetch {resource} data"),
            message: Some(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.message {
            Some(message) => json!({ "success": false, "error": self.error, "message": message }),
            None => json!({ "success": false, "error": self.error }),
        };
        (self.status, Json(body)).into_response()
    }
}
