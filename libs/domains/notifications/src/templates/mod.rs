//! Email template rendering engine.
//!
//! One Handlebars HTML template per [`NotificationKind`], registered under
//! [`NotificationKind::as_str`]. Values are HTML-escaped on interpolation.

mod html;

use handlebars::Handlebars;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use crate::error::NotificationResult;
use crate::format::format_rupiah;
use crate::models::OrderItem;
use crate::notification::NotificationKind;

/// One rendered order line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRow {
    /// 1-based position in the order.
    pub position: usize,
    pub product_name: String,
    pub quantity: u32,
    pub price_text: String,
    pub subtotal_text: String,
}

impl ItemRow {
    pub fn from_items(items: &[OrderItem]) -> NotificationResult<Vec<ItemRow>> {
        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                Ok(ItemRow {
                    position: index + 1,
                    product_name: item.product_name.clone(),
                    quantity: item.quantity,
                    price_text: format_rupiah(item.price),
                    subtotal_text: format_rupiah(item.subtotal()?),
                })
            })
            .collect()
    }
}

/// Template engine for rendering email bodies.
#[derive(Clone)]
pub struct TemplateEngine {
    handlebars: Arc<Handlebars<'static>>,
}

impl TemplateEngine {
    /// Create a new template engine with every variant's template registered.
    pub fn new() -> NotificationResult<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);

        for kind in NotificationKind::ALL {
            handlebars.register_template_string(kind.as_str(), html::template_for(kind))?;
        }

        Ok(Self {
            handlebars: Arc::new(handlebars),
        })
    }

    /// Render the HTML body for `kind`.
    pub fn render<T: Serialize>(&self, kind: NotificationKind, data: &T) -> NotificationResult<String> {
        debug!(template = %kind, "Rendering email template");
        Ok(self.handlebars.render(kind.as_str(), data)?)
    }
}
