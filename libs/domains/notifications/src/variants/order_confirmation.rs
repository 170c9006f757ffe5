use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::{NotificationError, NotificationResult};
use crate::format::{format_long_date, format_rupiah, now_wib, short_order_id};
use crate::models::{OrderItem, checked_items, filled, non_negative};
use crate::notification::{
    DeliveryResult, Notification, NotificationKind, RecipientStrategy, RenderedEmail,
};
use crate::templates::{ItemRow, TemplateEngine};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmationRequest {
    pub email: Option<String>,
    pub name: Option<String>,
    pub order_id: Option<String>,
    pub items: Option<Vec<OrderItem>>,
    pub total_amount: Option<Decimal>,
    pub shipping_address: Option<String>,
}

/// Receipt sent to the customer right after checkout.
#[derive(Debug, Clone)]
pub struct OrderConfirmation {
    pub email: String,
    pub name: String,
    pub order_id: String,
    pub items: Vec<OrderItem>,
    pub total_amount: Decimal,
    pub shipping_address: String,
    pub ordered_at: NaiveDateTime,
}

#[derive(Serialize)]
struct OrderConfirmationView<'a> {
    name: &'a str,
    short_id: String,
    ordered_on: String,
    items: Vec<ItemRow>,
    total_text: String,
    shipping_address: &'a str,
}

impl Notification for OrderConfirmation {
    type Request = OrderConfirmationRequest;

    const KIND: NotificationKind = NotificationKind::OrderConfirmation;

    fn from_request(request: OrderConfirmationRequest) -> NotificationResult<Self> {
        let (
            Some(email),
            Some(name),
            Some(order_id),
            Some(items),
            Some(total_amount),
            Some(shipping_address),
        ) = (
            filled(request.email),
            filled(request.name),
            filled(request.order_id),
            request.items,
            request.total_amount,
            filled(request.shipping_address),
        )
        else {
            return Err(NotificationError::validation("Missing required fields"));
        };

        Ok(Self {
            email,
            name,
            order_id,
            items: checked_items(items)?,
            total_amount: non_negative(total_amount, "totalAmount")?,
            shipping_address,
            ordered_at: now_wib(),
        })
    }

    fn recipients(&self) -> RecipientStrategy {
        RecipientStrategy::Explicit(vec![self.email.clone()])
    }

    fn render(&self, templates: &TemplateEngine) -> NotificationResult<RenderedEmail> {
        let short_id = short_order_id(&self.order_id);
        let subject = format!("Konfirmasi Pesanan #{short_id} ✅");

        let view = OrderConfirmationView {
            name: &self.name,
            short_id,
            ordered_on: format_long_date(self.ordered_at),
            items: ItemRow::from_items(&self.items)?,
            total_text: format_rupiah(self.total_amount),
            shipping_address: &self.shipping_address,
        };

        Ok(RenderedEmail {
            subject,
            html: templates.render(Self::KIND, &view)?,
        })
    }

    fn acknowledge(&self, delivery: &DeliveryResult) -> Value {
        json!({
            "success": true,
            "message": "Order confirmation email sent!",
            "data": delivery.provider_response,
        })
    }
}
