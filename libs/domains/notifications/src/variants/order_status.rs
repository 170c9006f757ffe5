use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::DEFAULT_GREETING_NAME;
use crate::error::{NotificationError, NotificationResult};
use crate::format::{format_rupiah, short_order_id};
use crate::models::{OrderItem, checked_items, filled, non_negative};
use crate::notification::{
    DeliveryResult, Notification, NotificationKind, RecipientStrategy, RenderedEmail,
};
use crate::status::StatusPresentation;
use crate::templates::{ItemRow, TemplateEngine};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusUpdateRequest {
    pub email: Option<String>,
    pub name: Option<String>,
    pub order_id: Option<String>,
    pub status: Option<String>,
    pub items: Option<Vec<OrderItem>>,
    pub total_amount: Option<Decimal>,
    pub shipping_address: Option<String>,
}

/// Tells the customer their order moved to a new status.
#[derive(Debug, Clone)]
pub struct OrderStatusUpdate {
    pub email: String,
    pub name: Option<String>,
    pub order_id: String,
    /// Raw status code; unknown codes are rendered with the fallback presentation.
    pub status: String,
    pub items: Vec<OrderItem>,
    pub total_amount: Decimal,
    pub shipping_address: Option<String>,
}

#[derive(Serialize)]
struct OrderStatusView<'a> {
    name: &'a str,
    short_id: String,
    status: &'a StatusPresentation,
    items: Vec<ItemRow>,
    total_text: String,
    shipping_address: Option<&'a str>,
}

impl OrderStatusUpdate {
    pub fn presentation(&self) -> StatusPresentation {
        StatusPresentation::for_code(&self.status)
    }
}

impl Notification for OrderStatusUpdate {
    type Request = OrderStatusUpdateRequest;

    const KIND: NotificationKind = NotificationKind::OrderStatusUpdate;

    fn from_request(request: OrderStatusUpdateRequest) -> NotificationResult<Self> {
        let (Some(email), Some(order_id), Some(status)) = (
            filled(request.email),
            filled(request.order_id),
            filled(request.status),
        ) else {
            return Err(NotificationError::validation(
                "Email, orderId, and status are required",
            ));
        };

        Ok(Self {
            email,
            name: filled(request.name),
            order_id,
            status,
            items: checked_items(request.items.unwrap_or_default())?,
            total_amount: non_negative(request.total_amount.unwrap_or_default(), "totalAmount")?,
            shipping_address: filled(request.shipping_address),
        })
    }

    fn recipients(&self) -> RecipientStrategy {
        RecipientStrategy::Explicit(vec![self.email.clone()])
    }

    fn render(&self, templates: &TemplateEngine) -> NotificationResult<RenderedEmail> {
        let presentation = self.presentation();
        let short_id = short_order_id(&self.order_id);
        let subject = format!(
            "{} Status Pesanan: {} - Order #{}",
            presentation.icon, presentation.label, short_id
        );

        let view = OrderStatusView {
            name: self.name.as_deref().unwrap_or(DEFAULT_GREETING_NAME),
            short_id,
            status: &presentation,
            items: ItemRow::from_items(&self.items)?,
            total_text: format_rupiah(self.total_amount),
            shipping_address: self.shipping_address.as_deref(),
        };

        Ok(RenderedEmail {
            subject,
            html: templates.render(Self::KIND, &view)?,
        })
    }

    fn acknowledge(&self, delivery: &DeliveryResult) -> Value {
        json!({ "success": true, "messageId": delivery.message_id })
    }
}
