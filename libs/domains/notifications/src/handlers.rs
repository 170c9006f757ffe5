//! HTTP endpoints, one `POST` route per variant.

use axum::{Json, Router, body::Bytes, extract::State, routing::post};
use axum_helpers::{method_not_allowed, preflight_cors_layer};
use serde_json::Value;
use std::sync::Arc;

use crate::directory::UserDirectory;
use crate::error::NotificationResult;
use crate::notification::Notification;
use crate::providers::EmailProvider;
use crate::service::NotificationService;
use crate::variants::{
    LowStockAlert, NewOrderAdminAlert, OrderConfirmation, OrderStatusUpdate, VerificationCode,
    WelcomeEmail,
};

type SharedService<P, D> = Arc<NotificationService<P, D>>;

/// Create the notifications router with every variant endpoint.
///
/// `OPTIONS` on any route is answered by the CORS layer before the handler runs.
pub fn router<P, D>(service: NotificationService<P, D>) -> Router
where
    P: EmailProvider + 'static,
    D: UserDirectory + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route(
            NewOrderAdminAlert::KIND.route(),
            post(notify::<NewOrderAdminAlert, P, D>),
        )
        .route(LowStockAlert::KIND.route(), post(notify::<LowStockAlert, P, D>))
        .route(
            OrderConfirmation::KIND.route(),
            post(notify::<OrderConfirmation, P, D>),
        )
        .route(
            OrderStatusUpdate::KIND.route(),
            post(notify::<OrderStatusUpdate, P, D>),
        )
        .route(
            VerificationCode::KIND.route(),
            post(notify::<VerificationCode, P, D>),
        )
        .route(WelcomeEmail::KIND.route(), post(notify::<WelcomeEmail, P, D>))
        .method_not_allowed_fallback(method_not_allowed)
        .layer(preflight_cors_layer())
        .with_state(shared_service)
}

/// The body is read as raw bytes so malformed JSON maps to the notification error taxonomy.
async fn notify<N, P, D>(
    State(service): State<SharedService<P, D>>,
    body: Bytes,
) -> NotificationResult<Json<Value>>
where
    N: Notification,
    P: EmailProvider + 'static,
    D: UserDirectory + 'static,
{
    service.handle::<N>(&body).await.map(Json)
}
