use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::{NotificationError, NotificationResult};
use crate::format::{format_short_datetime, now_wib};
use crate::models::filled;
use crate::notification::{
    DeliveryResult, EmptyDirectoryPolicy, Notification, NotificationKind, RecipientStrategy,
    RenderedEmail,
};
use crate::templates::TemplateEngine;

/// Stock at or below this level is shown with an amber badge.
const LOW_STOCK_THRESHOLD: i64 = 3;

#[derive(Debug, Default, Deserialize)]
pub struct LowStockRequest {
    pub products: Option<Vec<LowStockProductRequest>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LowStockProductRequest {
    pub product_name: Option<String>,
    pub current_stock: Option<i64>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LowStockProduct {
    pub product_name: String,
    pub current_stock: i64,
    pub category: String,
}

impl LowStockProduct {
    pub fn is_out_of_stock(&self) -> bool {
        self.current_stock <= 0
    }

    fn row(&self) -> StockRow<'_> {
        let (badge_color, badge_text_color) = if self.current_stock <= 0 {
            ("#dc3545", "#000")
        } else if self.current_stock <= LOW_STOCK_THRESHOLD {
            ("#ffc107", "#000")
        } else {
            ("#28a745", "#fff")
        };
        let (status_label, status_color) = if self.is_out_of_stock() {
            ("HABIS", "#dc3545")
        } else {
            ("RENDAH", "#ffc107")
        };

        StockRow {
            product_name: &self.product_name,
            category: &self.category,
            current_stock: self.current_stock,
            badge_color,
            badge_text_color,
            status_label,
            status_color,
        }
    }
}

/// Warns every administrator about products running out.
#[derive(Debug, Clone)]
pub struct LowStockAlert {
    pub products: Vec<LowStockProduct>,
    pub checked_at: NaiveDateTime,
}

#[derive(Serialize)]
struct StockRow<'a> {
    product_name: &'a str,
    category: &'a str,
    current_stock: i64,
    badge_color: &'static str,
    badge_text_color: &'static str,
    status_label: &'static str,
    status_color: &'static str,
}

#[derive(Serialize)]
struct LowStockView<'a> {
    product_count: usize,
    products: Vec<StockRow<'a>>,
    checked_at: String,
}

impl Notification for LowStockAlert {
    type Request = LowStockRequest;

    const KIND: NotificationKind = NotificationKind::LowStock;

    fn from_request(request: LowStockRequest) -> NotificationResult<Self> {
        let products = request.products.unwrap_or_default();
        if products.is_empty() {
            return Err(NotificationError::validation("No products provided"));
        }

        let products = products
            .into_iter()
            .map(|product| {
                match (
                    filled(product.product_name),
                    product.current_stock,
                    filled(product.category),
                ) {
                    (Some(product_name), Some(current_stock), Some(category)) => {
                        Ok(LowStockProduct {
                            product_name,
                            current_stock,
                            category,
                        })
                    }
                    _ => Err(NotificationError::validation(
                        "Each product requires productName, currentStock and category",
                    )),
                }
            })
            .collect::<NotificationResult<Vec<_>>>()?;

        Ok(Self {
            products,
            checked_at: now_wib(),
        })
    }

    fn recipients(&self) -> RecipientStrategy {
        RecipientStrategy::Administrators(EmptyDirectoryPolicy::Reject)
    }

    fn render(&self, templates: &TemplateEngine) -> NotificationResult<RenderedEmail> {
        let view = LowStockView {
            product_count: self.products.len(),
            products: self.products.iter().map(LowStockProduct::row).collect(),
            checked_at: format_short_datetime(self.checked_at),
        };

        Ok(RenderedEmail {
            subject: format!("⚠️ Peringatan: {} Produk Stok Rendah", self.products.len()),
            html: templates.render(Self::KIND, &view)?,
        })
    }

    fn acknowledge(&self, delivery: &DeliveryResult) -> Value {
        json!({
            "success": true,
            "message": "Low stock notification sent",
            "sentTo": delivery.recipients,
            "productsCount": self.products.len(),
            "emailId": delivery.message_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert(stocks: &[i64]) -> LowStockAlert {
        let products = stocks
            .iter()
            .map(|stock| json!({"productName": "Shirt", "currentStock": stock, "category": "Tops"}))
            .collect::<Vec<_>>();
        LowStockAlert::from_request(serde_json::from_value(json!({ "products": products })).unwrap())
            .unwrap()
    }

    #[test]
    fn test_requires_products() {
        for body in [json!({}), json!({"products": []})] {
            let request: LowStockRequest = serde_json::from_value(body).unwrap();
            let err = LowStockAlert::from_request(request).unwrap_err();
            assert_eq!(err.to_string(), "No products provided");
        }
    }

    #[test]
    fn test_requires_product_fields() {
        let request: LowStockRequest =
            serde_json::from_value(json!({"products": [{"productName": "Shirt", "category": "Tops"}]}))
                .unwrap();
        assert!(matches!(
            LowStockAlert::from_request(request),
            Err(NotificationError::Validation(_))
        ));
    }

    #[test]
    fn test_zero_stock_is_habis() {
        let email = alert(&[0]).render(&TemplateEngine::new().unwrap()).unwrap();

        assert!(email.html.contains("HABIS"));
        assert!(!email.html.contains("RENDAH"));
        assert!(email.html.contains("#dc3545"));
        assert_eq!(email.subject, "⚠️ Peringatan: 1 Produk Stok Rendah");
    }

    #[test]
    fn test_low_stock_is_rendah() {
        let email = alert(&[2]).render(&TemplateEngine::new().unwrap()).unwrap();

        assert!(email.html.contains("RENDAH"));
        assert!(!email.html.contains("HABIS"));
    }

    #[test]
    fn test_badge_colors() {
        let rows: Vec<_> = alert(&[-1, 0, 3, 4])
            .products
            .iter()
            .map(|p| {
                let row = p.row();
                (row.badge_color, row.badge_text_color)
            })
            .collect();

        assert_eq!(
            rows,
            vec![
                ("#dc3545", "#000"),
                ("#dc3545", "#000"),
                ("#ffc107", "#000"),
                ("#28a745", "#fff"),
            ]
        );
    }

    #[test]
    fn test_acknowledge() {
        let alert = alert(&[0, 1]);
        let delivery = DeliveryResult {
            message_id: Some("msg_9".to_string()),
            recipients: vec!["owner@shop.id".to_string()],
            provider_response: json!({"id": "msg_9"}),
        };

        assert_eq!(
            alert.acknowledge(&delivery),
            json!({
                "success": true,
                "message": "Low stock notification sent",
                "sentTo": ["owner@shop.id"],
                "productsCount": 2,
                "emailId": "msg_9"
            })
        );
        assert_eq!(
            alert.recipients(),
            RecipientStrategy::Administrators(EmptyDirectoryPolicy::Reject)
        );
    }
}
