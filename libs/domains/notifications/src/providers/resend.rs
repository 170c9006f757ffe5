//! Resend email provider implementation.

use super::{EmailProvider, OutgoingEmail, SentEmail};
use crate::config::DEFAULT_RESEND_API_URL;
use crate::error::{NotificationError, NotificationResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::{Value, json};
use tracing::{debug, error, info};

/// Resend API configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResendConfig {
    /// Resend API key (`re_...`).
    pub api_key: String,
    /// Sender, e.g. `Retail App <noreply@example.com>`.
    pub from: String,
    /// API base URL without the `/emails` suffix.
    pub api_url: String,
}

impl ResendConfig {
    pub fn new(api_key: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            from: from.into(),
            api_url: DEFAULT_RESEND_API_URL.to_string(),
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    fn emails_url(&self) -> String {
        format!("{}/emails", self.api_url.trim_end_matches('/'))
    }
}

/// Resend email provider.
pub struct ResendProvider {
    config: ResendConfig,
    client: Client,
}

impl ResendProvider {
    pub fn new(config: ResendConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ResendRequest<'a> {
    from: &'a str,
    to: &'a [String],
    subject: &'a str,
    html: &'a str,
}

/// Parse a response body as JSON, keeping non-JSON text as `{"message": text}`.
fn parse_body(body: &str) -> Value {
    if body.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(body).unwrap_or_else(|_| json!({ "message": body }))
}

#[async_trait]
impl EmailProvider for ResendProvider {
    async fn send(&self, email: &OutgoingEmail) -> NotificationResult<SentEmail> {
        let request = ResendRequest {
            from: &self.config.from,
            to: &email.to,
            subject: &email.subject,
            html: &email.html,
        };

        debug!(
            to = ?email.to,
            subject = %email.subject,
            "Sending email via Resend"
        );

        let response = self
            .client
            .post(self.config.emails_url())
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Resend request failed");
                NotificationError::delivery(e.to_string(), json!({ "message": e.to_string() }))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!(status = %status, error = %e, "Failed to read Resend response");
            NotificationError::delivery(e.to_string(), json!({ "message": e.to_string() }))
        })?;
        let payload = parse_body(&body);

        if status.is_success() {
            let message_id = payload
                .get("id")
                .and_then(Value::as_str)
                .map(str::to_string);
            info!(
                recipients = email.to.len(),
                message_id = ?message_id,
                "Email sent successfully via Resend"
            );
            Ok(SentEmail {
                message_id,
                response: payload,
            })
        } else {
            error!(
                status = %status,
                error = %body,
                "Failed to send email via Resend"
            );
            let message = payload
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| format!("Resend returned {status}"));
            Err(NotificationError::delivery(message, payload))
        }
    }

    fn name(&self) -> &'static str {
        "Resend"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, http::HeaderMap, http::StatusCode, routing::post};
    use std::sync::Arc;
    use tokio::sync::Mutex;

    /// Serve `router` on an ephemeral port and return its base URL.
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn email() -> OutgoingEmail {
        OutgoingEmail {
            to: vec!["a@b.com".to_string(), "c@d.com".to_string()],
            subject: "123456 - Kode Verifikasi Retail App".to_string(),
            html: "<p>123456</p>".to_string(),
        }
    }

    #[test]
    fn test_resend_config_new() {
        let config = ResendConfig::new("re_test", "Shop <noreply@shop.id>");
        assert_eq!(config.api_url, "https://api.resend.com");
        assert_eq!(config.emails_url(), "https://api.resend.com/emails");
        assert_eq!(
            config.with_api_url("http://localhost:9000/").emails_url(),
            "http://localhost:9000/emails"
        );
    }

    #[test]
    fn test_parse_body() {
        assert_eq!(parse_body(""), Value::Null);
        assert_eq!(parse_body(r#"{"id":"x"}"#)["id"], "x");
        assert_eq!(parse_body("Bad Gateway")["message"], "Bad Gateway");
    }

    #[tokio::test]
    async fn test_send_posts_payload_and_returns_id() {
        let captured: Arc<Mutex<Option<(HeaderMap, Value)>>> = Arc::default();
        let sink = captured.clone();
        let router = Router::new().route(
            "/emails",
            post(move |headers: HeaderMap, Json(body): Json<Value>| {
                let sink = sink.clone();
                async move {
                    *sink.lock().await = Some((headers, body));
                    Json(json!({"id": "msg_123"}))
                }
            }),
        );
        let base = serve(router).await;
        let provider = ResendProvider::new(
            ResendConfig::new("re_test", "Retail App <noreply@shop.id>").with_api_url(base),
        );

        let sent = provider.send(&email()).await.unwrap();

        assert_eq!(sent.message_id.as_deref(), Some("msg_123"));
        let (headers, body) = captured.lock().await.clone().unwrap();
        assert_eq!(headers["authorization"], "Bearer re_test");
        assert_eq!(body["from"], "Retail App <noreply@shop.id>");
        assert_eq!(body["to"], json!(["a@b.com", "c@d.com"]));
        assert_eq!(body["subject"], "123456 - Kode Verifikasi Retail App");
        assert_eq!(body["html"], "<p>123456</p>");
    }

    #[tokio::test]
    async fn test_send_maps_rejection_to_delivery_error() {
        let router = Router::new().route(
            "/emails",
            post(|| async {
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({"statusCode": 422, "name": "validation_error", "message": "Invalid `to` field."})),
                )
            }),
        );
        let base = serve(router).await;
        let provider = ResendProvider::new(ResendConfig::new("re_test", "x@y.z").with_api_url(base));

        let err = provider.send(&email()).await.unwrap_err();

        match err {
            NotificationError::Delivery { message, details } => {
                assert_eq!(message, "Invalid `to` field.");
                assert_eq!(details["statusCode"], 422);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    /// Accept one connection and answer with a body shorter than its `Content-Length`.
    async fn serve_truncated(head: &'static str) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            socket.write_all(head.as_bytes()).await.unwrap();
            socket.write_all(br#"{"id":"#).await.unwrap();
            let _ = socket.shutdown().await;
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_send_maps_unreadable_body_to_delivery_error() {
        let base = serve_truncated(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 64\r\nconnection: close\r\n\r\n",
        )
        .await;
        let provider = ResendProvider::new(ResendConfig::new("re_test", "x@y.z").with_api_url(base));

        let err = provider.send(&email()).await.unwrap_err();
        assert!(matches!(err, NotificationError::Delivery { .. }));
    }

    #[tokio::test]
    async fn test_send_maps_transport_failure_to_delivery_error() {
        let provider = ResendProvider::new(
            ResendConfig::new("re_test", "x@y.z").with_api_url("http://127.0.0.1:1"),
        );

        let err = provider.send(&email()).await.unwrap_err();
        assert!(matches!(err, NotificationError::Delivery { .. }));
    }
}
