//! Server infrastructure: serving, health, shutdown.

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::create_app;
pub use health::{HealthResponse, health_router};
pub use shutdown::shutdown_signal;
