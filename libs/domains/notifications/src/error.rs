//! Error types for the notifications domain.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_helpers::ErrorBody;
use serde_json::{Value, json};
use thiserror::Error;

/// Result type for notification operations.
pub type NotificationResult<T> = Result<T, NotificationError>;

/// Everything that can stop a notification from going out.
#[derive(Debug, Error)]
pub enum NotificationError {
    /// A required field is missing or a value is out of range. No external call was made.
    #[error("{0}")]
    Validation(String),

    /// The user directory could not be queried.
    #[error("Failed to fetch admin users: {message}")]
    Lookup { message: String, details: Value },

    /// The directory answered with no administrators and the variant treats that as an error.
    #[error("No admin users found")]
    NoRecipients,

    /// The email provider rejected the message or could not be reached.
    #[error("Failed to send email: {message}")]
    Delivery { message: String, details: Value },

    /// The request body is not valid JSON for the variant.
    #[error("Malformed request body: {0}")]
    Malformed(String),

    /// Template registration or rendering error.
    #[error("Template rendering error: {0}")]
    Template(String),
}

impl NotificationError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn lookup(message: impl Into<String>, details: Value) -> Self {
        Self::Lookup {
            message: message.into(),
            details,
        }
    }

    pub fn delivery(message: impl Into<String>, details: Value) -> Self {
        Self::Delivery {
            message: message.into(),
            details,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NoRecipients => StatusCode::NOT_FOUND,
            Self::Lookup { .. } | Self::Delivery { .. } | Self::Malformed(_) | Self::Template(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The JSON body returned to the caller.
    pub fn body(&self) -> ErrorBody {
        match self {
            Self::Validation(message) => ErrorBody::new(message.clone()),
            Self::NoRecipients => ErrorBody::new("No admin users found"),
            Self::Lookup { message, details } => ErrorBody::new("Failed to fetch admin users")
                .with_details(details_or_message(details, message)),
            Self::Delivery { message, details } => ErrorBody::new("Failed to send email")
                .with_details(details_or_message(details, message)),
            Self::Malformed(message) | Self::Template(message) => {
                ErrorBody::new("Internal server error").with_details(json!(message))
            }
        }
    }
}

/// Upstream payload when there is one, otherwise the local description.
fn details_or_message(details: &Value, message: &str) -> Value {
    if details.is_null() {
        json!({ "message": message })
    } else {
        details.clone()
    }
}

impl From<handlebars::RenderError> for NotificationError {
    fn from(err: handlebars::RenderError) -> Self {
        NotificationError::Template(err.to_string())
    }
}

impl From<handlebars::TemplateError> for NotificationError {
    fn from(err: handlebars::TemplateError) -> Self {
        NotificationError::Template(err.to_string())
    }
}

impl IntoResponse for NotificationError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "Notification failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "Notification rejected");
        }
        self.body().into_response_with(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            NotificationError::validation("Email and name are required").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(NotificationError::NoRecipients.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            NotificationError::delivery("rejected", Value::Null).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            NotificationError::lookup("timeout", Value::Null).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_delivery_body_passes_provider_payload_through() {
        let payload = json!({"statusCode": 422, "message": "Invalid `to` field"});
        let body = serde_json::to_value(NotificationError::delivery("Resend error", payload.clone()).body()).unwrap();

        assert_eq!(body["error"], "Failed to send email");
        assert_eq!(body["details"], payload);
    }

    #[test]
    fn test_lookup_body_falls_back_to_message() {
        let body = serde_json::to_value(
            NotificationError::lookup("user directory is not configured", Value::Null).body(),
        )
        .unwrap();

        assert_eq!(body["error"], "Failed to fetch admin users");
        assert_eq!(body["details"]["message"], "user directory is not configured");
    }

    #[test]
    fn test_validation_body_has_no_details() {
        let body = serde_json::to_value(NotificationError::validation("No products provided").body()).unwrap();
        assert_eq!(body, json!({"error": "No products provided"}));
    }
}
