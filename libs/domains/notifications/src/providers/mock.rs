//! In-process email provider for tests and local runs.

use super::{EmailProvider, OutgoingEmail, SentEmail};
use crate::error::{NotificationError, NotificationResult};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Mutex;
use uuid::Uuid;

/// Records every email it is asked to send.
///
/// Clones share state, so a test can keep one handle and move another into a service.
#[derive(Clone, Default)]
pub struct MockEmailProvider {
    sent_emails: Arc<Mutex<Vec<OutgoingEmail>>>,
    calls: Arc<AtomicUsize>,
    failure: Option<Value>,
}

impl MockEmailProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// A provider that rejects every email with `details` as the diagnostic payload.
    pub fn failing(details: Value) -> Self {
        Self {
            failure: Some(details),
            ..Self::default()
        }
    }

    /// Emails accepted so far.
    pub async fn sent_emails(&self) -> Vec<OutgoingEmail> {
        self.sent_emails.lock().await.clone()
    }

    /// Number of `send` calls, including rejected ones.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn was_sent_to(&self, address: &str) -> bool {
        self.sent_emails
            .lock()
            .await
            .iter()
            .any(|e| e.to.iter().any(|to| to == address))
    }
}

#[async_trait]
impl EmailProvider for MockEmailProvider {
    async fn send(&self, email: &OutgoingEmail) -> NotificationResult<SentEmail> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(details) = &self.failure {
            return Err(NotificationError::delivery(
                "mock provider rejected the email",
                details.clone(),
            ));
        }

        self.sent_emails.lock().await.push(email.clone());

        let id = Uuid::new_v4().to_string();
        Ok(SentEmail {
            message_id: Some(id.clone()),
            response: json!({ "id": id }),
        })
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
