//! The per-variant descriptor consumed by [`NotificationService`](crate::service::NotificationService).

use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::fmt;

use crate::error::NotificationResult;
use crate::templates::TemplateEngine;

/// The six event kinds this service turns into emails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    NewOrderAdmin,
    LowStock,
    OrderConfirmation,
    OrderStatusUpdate,
    VerificationCode,
    Welcome,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 6] = [
        NotificationKind::NewOrderAdmin,
        NotificationKind::LowStock,
        NotificationKind::OrderConfirmation,
        NotificationKind::OrderStatusUpdate,
        NotificationKind::VerificationCode,
        NotificationKind::Welcome,
    ];

    /// Stable identifier, also used as the template name.
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::NewOrderAdmin => "new_order_admin",
            NotificationKind::LowStock => "low_stock",
            NotificationKind::OrderConfirmation => "order_confirmation",
            NotificationKind::OrderStatusUpdate => "order_status_update",
            NotificationKind::VerificationCode => "verification_code",
            NotificationKind::Welcome => "welcome",
        }
    }

    /// HTTP route the variant is served on.
    pub fn route(self) -> &'static str {
        match self {
            NotificationKind::NewOrderAdmin => "/notify-admin-new-order",
            NotificationKind::LowStock => "/notify-low-stock",
            NotificationKind::OrderConfirmation => "/send-order-confirmation",
            NotificationKind::OrderStatusUpdate => "/send-order-status-update",
            NotificationKind::VerificationCode => "/send-verification-code",
            NotificationKind::Welcome => "/send-welcome-email",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What to do when the administrator lookup comes back empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyDirectoryPolicy {
    /// Answer 200 with `success: false` and skip delivery.
    Acknowledge,
    /// Fail with [`NotificationError::NoRecipients`](crate::NotificationError::NoRecipients) (404).
    Reject,
}

/// Where the recipient list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipientStrategy {
    /// Addresses taken from the request.
    Explicit(Vec<String>),
    /// Every administrator in the user directory.
    Administrators(EmptyDirectoryPolicy),
}

/// Subject and HTML body ready for the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    pub subject: String,
    pub html: String,
}

/// What the provider reported for one delivery.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryResult {
    pub message_id: Option<String>,
    /// Addresses the single delivery call targeted.
    pub recipients: Vec<String>,
    /// Raw provider response body.
    pub provider_response: Value,
}

/// A validated notification of one variant.
///
/// `Request` is the permissive wire shape; [`Notification::from_request`] turns
/// it into `Self` or rejects it before any external call happens.
pub trait Notification: Sized + Send + Sync + 'static {
    type Request: DeserializeOwned + Send;

    const KIND: NotificationKind;

    fn from_request(request: Self::Request) -> NotificationResult<Self>;

    fn recipients(&self) -> RecipientStrategy;

    fn render(&self, templates: &TemplateEngine) -> NotificationResult<RenderedEmail>;

    /// Success body after the provider accepted the email.
    fn acknowledge(&self, delivery: &DeliveryResult) -> Value;

    /// Success body when delivery was skipped because nobody should receive it.
    fn skipped(&self) -> Value {
        json!({ "success": false, "message": "No admin users found" })
    }
}
