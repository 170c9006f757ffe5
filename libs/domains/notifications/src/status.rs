//! Order status presentation table.
//!
//! The set of known codes is closed. Anything else renders through
//! [`StatusPresentation::fallback`] instead of failing the request.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// Exact, case-sensitive match on the wire code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.code() == code)
    }

    pub fn code(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn presentation(self) -> StatusPresentation {
        let (label, color, icon, message) = match self {
            OrderStatus::Pending => (
                "Menunggu Konfirmasi",
                "#FF9800",
                "⏳",
                "Pesanan Anda sedang menunggu konfirmasi dari admin.",
            ),
            OrderStatus::Processing => (
                "Sedang Diproses",
                "#2196F3",
                "🔄",
                "Pesanan Anda sedang diproses dan akan segera dikirim.",
            ),
            OrderStatus::Shipped => (
                "Dalam Pengiriman",
                "#9C27B0",
                "🚚",
                "Pesanan Anda sedang dalam perjalanan menuju alamat tujuan.",
            ),
            OrderStatus::Delivered => (
                "Terkirim",
                "#4CAF50",
                "✅",
                "Pesanan Anda telah sampai di tujuan. Terima kasih telah berbelanja!",
            ),
            OrderStatus::Cancelled => (
                "Dibatalkan",
                "#F44336",
                "❌",
                "Pesanan Anda telah dibatalkan. Silakan hubungi admin untuk informasi lebih lanjut.",
            ),
        };

        StatusPresentation {
            label: label.to_string(),
            color,
            icon,
            message,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// How a status is shown in the email: label, accent color, icon, body text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusPresentation {
    pub label: String,
    pub color: &'static str,
    pub icon: &'static str,
    pub message: &'static str,
}

impl StatusPresentation {
    /// Generic entry for codes outside the table. The raw code becomes the label.
    pub fn fallback(code: &str) -> Self {
        Self {
            label: code.to_string(),
            color: "#757575",
            icon: "📦",
            message: "Status pesanan Anda telah diperbarui.",
        }
    }

    /// Look up a wire code, falling back for unknown ones.
    pub fn for_code(code: &str) -> Self {
        OrderStatus::from_code(code)
            .map(OrderStatus::presentation)
            .unwrap_or_else(|| Self::fallback(code))
    }
}
