//! Data shapes shared across notification variants.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{NotificationError, NotificationResult};

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_name: String,
    /// Unit price in whole rupiah.
    pub price: Decimal,
    pub quantity: u32,
}

impl OrderItem {
    /// Price times quantity. Fails when the product does not fit a `Decimal`.
    pub fn subtotal(&self) -> NotificationResult<Decimal> {
        self.price
            .checked_mul(Decimal::from(self.quantity))
            .ok_or_else(|| {
                NotificationError::Template(format!(
                    "subtotal of {} overflows",
                    self.product_name
                ))
            })
    }
}

/// Someone an email is addressed to. The address is not validated locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl Recipient {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Treat absent and blank text the same way: missing.
pub(crate) fn filled(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Reject negative money.
pub(crate) fn non_negative(amount: Decimal, field: &str) -> NotificationResult<Decimal> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(NotificationError::validation(format!(
            "{field} must not be negative"
        )));
    }
    Ok(amount)
}

/// Reject items with a negative unit price.
pub(crate) fn checked_items(items: Vec<OrderItem>) -> NotificationResult<Vec<OrderItem>> {
    for item in &items {
        non_negative(item.price, "price")?;
    }
    Ok(items)
}

/// Accept a code sent either as a JSON string or a JSON number.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Code {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<Code>::deserialize(deserializer)?.map(|code| match code {
        Code::Text(text) => text,
        Code::Number(number) => number.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_order_item_accepts_numeric_price() {
        let item: OrderItem =
            serde_json::from_value(json!({"productName": "Kaos Polos", "price": 15000, "quantity": 2}))
                .unwrap();

        assert_eq!(item.price, dec!(15000));
        assert_eq!(item.subtotal().unwrap(), dec!(30000));
    }

    #[test]
    fn test_subtotal_overflow_is_an_error() {
        let item = OrderItem {
            product_name: "Emas Batangan".to_string(),
            price: Decimal::MAX,
            quantity: 10,
        };

        let err = item.subtotal().unwrap_err();
        assert!(matches!(err, NotificationError::Template(msg) if msg.contains("Emas Batangan")));
    }

    #[test]
    fn test_filled_treats_blank_as_missing() {
        assert_eq!(filled(None), None);
        assert_eq!(filled(Some("  ".to_string())), None);
        assert_eq!(filled(Some("a@b.com".to_string())).as_deref(), Some("a@b.com"));
    }

    #[test]
    fn test_non_negative() {
        assert!(non_negative(dec!(0), "totalAmount").is_ok());
        let err = non_negative(dec!(-1), "totalAmount").unwrap_err();
        assert!(matches!(err, NotificationError::Validation(msg) if msg.contains("totalAmount")));
    }

    #[test]
    fn test_recipient_name_is_optional() {
        let recipient: Recipient = serde_json::from_value(json!({"email": "admin@shop.id"})).unwrap();
        assert_eq!(recipient, Recipient::new("admin@shop.id"));
    }
}
