//! HTTP middleware.

pub mod cors;

pub use cors::{PREFLIGHT_ALLOWED_HEADERS, preflight_cors_layer};
