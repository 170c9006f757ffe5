//! # Axum Helpers
//!
//! Shared plumbing for the HTTP host:
//!
//! - **[`server`]**: serving with graceful shutdown, `/health`
//! - **[`http`]**: the CORS preflight layer every endpoint sits behind
//! - **[`errors`]**: JSON fallback responses
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum_helpers::{create_app, health_router, preflight_cors_layer};
//! use core_config::{app_info, server::ServerConfig};
//!
//! let app = api_routes
//!     .merge(health_router(app_info!()))
//!     .layer(preflight_cors_layer());
//! create_app(app, &ServerConfig::default()).await?;
//! ```

pub mod errors;
pub mod http;
pub mod server;

pub use errors::{ErrorBody, method_not_allowed, not_found};
pub use http::{PREFLIGHT_ALLOWED_HEADERS, preflight_cors_layer};
pub use server::{HealthResponse, create_app, health_router, shutdown_signal};
