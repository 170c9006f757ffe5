//! The six notification variants.
//!
//! Each module pairs a permissive `*Request` wire shape with a validated
//! notification type implementing [`Notification`](crate::Notification).

pub mod low_stock;
pub mod new_order;
pub mod order_confirmation;
pub mod order_status;
pub mod verification;
pub mod welcome;

pub use low_stock::{LowStockAlert, LowStockProduct, LowStockRequest};
pub use new_order::{NewOrderAdminAlert, NewOrderRequest};
pub use order_confirmation::{OrderConfirmation, OrderConfirmationRequest};
pub use order_status::{OrderStatusUpdate, OrderStatusUpdateRequest};
pub use verification::{VerificationCode, VerificationCodeRequest};
pub use welcome::{WelcomeEmail, WelcomeEmailRequest};

/// Greeting used when the customer's name is unknown.
pub(crate) const DEFAULT_GREETING_NAME: &str = "Pelanggan";
