use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON error envelope: `{"error": ..., "details": ...}`.
///
/// `details` is omitted when there is no upstream diagnostic to pass along.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Pair the body with a status code.
    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// Fallback for unknown routes.
pub async fn not_found() -> Response {
    ErrorBody::new("The requested resource was not found").into_response_with(StatusCode::NOT_FOUND)
}

/// Fallback for known routes hit with an unsupported method.
pub async fn method_not_allowed() -> Response {
    ErrorBody::new("Method not allowed").into_response_with(StatusCode::METHOD_NOT_ALLOWED)
}
