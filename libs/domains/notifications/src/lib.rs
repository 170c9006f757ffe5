//! Notifications Domain
//!
//! Turns retail events into transactional emails.
//!
//! # Variants
//!
//! | Route | Recipients |
//! |---|---|
//! | `/notify-admin-new-order` | every administrator |
//! | `/notify-low-stock` | every administrator |
//! | `/send-order-confirmation` | the customer |
//! | `/send-order-status-update` | the customer |
//! | `/send-verification-code` | the customer |
//! | `/send-welcome-email` | the customer |
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │    Handlers     │  ← POST /<variant>, CORS preflight
//! └────────┬────────┘
//!          │
//! ┌────────▼────────┐
//! │ NotificationSvc │  ← validate → (lookup) → render → send
//! └───┬─────────┬───┘
//!     │         │
//! ┌───▼───┐ ┌───▼────────────┐
//! │ Users │ │ Email Provider │  ← PostgREST directory, Resend
//! └───────┘ └────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_notifications::{
//!     handlers, NotificationService, PostgrestDirectory, ResendProvider, TemplateEngine,
//! };
//!
//! let service = NotificationService::new(
//!     ResendProvider::new(config.resend()),
//!     PostgrestDirectory::new(config.directory.clone()),
//!     TemplateEngine::new()?,
//! );
//! let router = handlers::router(service);
//! ```

pub mod config;
pub mod directory;
pub mod error;
pub mod format;
pub mod handlers;
pub mod models;
pub mod notification;
pub mod providers;
pub mod service;
pub mod status;
pub mod templates;
pub mod variants;

// Re-export commonly used types
pub use config::{DirectoryConfig, NotifierConfig};
pub use directory::{DirectoryUser, InMemoryDirectory, PostgrestDirectory, UserDirectory};
pub use error::{NotificationError, NotificationResult};
pub use models::{OrderItem, Recipient};
pub use notification::{
    DeliveryResult, EmptyDirectoryPolicy, Notification, NotificationKind, RecipientStrategy,
    RenderedEmail,
};
pub use providers::{EmailProvider, MockEmailProvider, OutgoingEmail, ResendProvider, SentEmail};
pub use service::{Dispatch, NotificationService};
pub use status::{OrderStatus, StatusPresentation};
pub use templates::TemplateEngine;
pub use variants::{
    LowStockAlert, NewOrderAdminAlert, OrderConfirmation, OrderStatusUpdate, VerificationCode,
    WelcomeEmail,
};
