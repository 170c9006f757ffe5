//! Retail notification API - transactional email over HTTP

use axum_helpers::{create_app, health_router, not_found};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_notifications::{
    NotificationService, PostgrestDirectory, ResendProvider, TemplateEngine, handlers,
};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

mod config;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    if config.notifier.directory.is_none() {
        warn!("SUPABASE_URL/SUPABASE_SERVICE_ROLE_KEY not set; admin notifications will fail");
    }

    let service = NotificationService::new(
        ResendProvider::new(config.notifier.resend()),
        PostgrestDirectory::new(config.notifier.directory.clone()),
        TemplateEngine::new()?,
    );

    let app = handlers::router(service)
        .merge(health_router(config.app))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http());

    info!(
        name = config.app.name,
        version = config.app.version,
        sender = %config.notifier.email_from,
        "Starting notification API"
    );

    create_app(app, &config.server).await?;

    info!("Notification API shutdown complete");
    Ok(())
}
