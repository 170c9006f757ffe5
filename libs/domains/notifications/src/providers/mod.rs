//! Email provider implementations.
//!
//! This module contains the `EmailProvider` trait, the Resend HTTP client
//! and an in-process double for tests.

pub mod mock;
pub mod resend;

pub use mock::MockEmailProvider;
pub use resend::{ResendConfig, ResendProvider};

use crate::error::NotificationResult;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

/// One provider call: a single message addressed to every listed recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingEmail {
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
}

/// Provider acknowledgement.
#[derive(Debug, Clone, PartialEq)]
pub struct SentEmail {
    /// Provider-specific message ID, when the provider returns one.
    pub message_id: Option<String>,
    /// Raw success payload.
    pub response: Value,
}

/// Trait for email sending providers.
///
/// The sender identity is part of the provider's configuration, not the message.
#[async_trait]
pub trait EmailProvider: Send + Sync {
    /// Send an email. Exactly one upstream call, never retried.
    async fn send(&self, email: &OutgoingEmail) -> NotificationResult<SentEmail>;

    /// Provider name for logging.
    fn name(&self) -> &'static str;
}
