use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::{NotificationError, NotificationResult};
use crate::format::{format_long_datetime, format_rupiah, now_wib, short_order_id};
use crate::models::{OrderItem, checked_items, filled, non_negative};
use crate::notification::{
    DeliveryResult, EmptyDirectoryPolicy, Notification, NotificationKind, RecipientStrategy,
    RenderedEmail,
};
use crate::templates::{ItemRow, TemplateEngine};

const MISSING: &str = "-";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderRequest {
    pub order_id: Option<String>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub items: Option<Vec<OrderItem>>,
    pub total_amount: Option<Decimal>,
    pub shipping_address: Option<String>,
}

/// Tells every administrator that an order was placed.
#[derive(Debug, Clone)]
pub struct NewOrderAdminAlert {
    pub order_id: String,
    pub customer_name: String,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub items: Vec<OrderItem>,
    pub total_amount: Decimal,
    pub shipping_address: Option<String>,
    pub ordered_at: NaiveDateTime,
}

#[derive(Serialize)]
struct NewOrderView<'a> {
    short_id: String,
    customer_name: &'a str,
    customer_email: &'a str,
    customer_phone: &'a str,
    items: Vec<ItemRow>,
    total_items: u64,
    total_text: String,
    shipping_address: &'a str,
    ordered_at: String,
}

impl NewOrderAdminAlert {
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }
}

impl Notification for NewOrderAdminAlert {
    type Request = NewOrderRequest;

    const KIND: NotificationKind = NotificationKind::NewOrderAdmin;

    fn from_request(request: NewOrderRequest) -> NotificationResult<Self> {
        let (Some(order_id), Some(customer_name)) =
            (filled(request.order_id), filled(request.customer_name))
        else {
            return Err(NotificationError::validation(
                "OrderId and customerName are required",
            ));
        };

        Ok(Self {
            order_id,
            customer_name,
            customer_email: filled(request.customer_email),
            customer_phone: filled(request.customer_phone),
            items: checked_items(request.items.unwrap_or_default())?,
            total_amount: non_negative(request.total_amount.unwrap_or_default(), "totalAmount")?,
            shipping_address: filled(request.shipping_address),
            ordered_at: now_wib(),
        })
    }

    fn recipients(&self) -> RecipientStrategy {
        RecipientStrategy::Administrators(EmptyDirectoryPolicy::Acknowledge)
    }

    fn render(&self, templates: &TemplateEngine) -> NotificationResult<RenderedEmail> {
        let short_id = short_order_id(&self.order_id);
        let total_text = format_rupiah(self.total_amount);
        let subject = format!(
            "🔔 Pesanan Baru! #{} - {} (Rp {})",
            short_id, self.customer_name, total_text
        );

        let view = NewOrderView {
            short_id,
            customer_name: &self.customer_name,
            customer_email: self.customer_email.as_deref().unwrap_or(MISSING),
            customer_phone: self.customer_phone.as_deref().unwrap_or(MISSING),
            items: ItemRow::from_items(&self.items)?,
            total_items: self.total_items(),
            total_text,
            shipping_address: self.shipping_address.as_deref().unwrap_or(MISSING),
            ordered_at: format_long_datetime(self.ordered_at),
        };

        Ok(RenderedEmail {
            subject,
            html: templates.render(Self::KIND, &view)?,
        })
    }

    fn acknowledge(&self, delivery: &DeliveryResult) -> Value {
        json!({
            "success": true,
            "messageId": delivery.message_id,
            "sentTo": delivery.recipients,
            "adminCount": delivery.recipients.len(),
        })
    }
}
