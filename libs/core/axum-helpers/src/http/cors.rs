use axum::http::{HeaderName, Method};
use tower_http::cors::{Any, CorsLayer};

/// Request headers browsers may send to the notification endpoints.
pub const PREFLIGHT_ALLOWED_HEADERS: [&str; 4] =
    ["authorization", "x-client-info", "apikey", "content-type"];

/// Permissive CORS layer shared by every notification endpoint.
///
/// `OPTIONS` requests are answered by the layer itself with an empty 200,
/// before any handler or body parsing runs. Every other response gets
/// `Access-Control-Allow-Origin: *`.
pub fn preflight_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers(PREFLIGHT_ALLOWED_HEADERS.map(HeaderName::from_static))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::post};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route("/echo", post(|| async { "posted" }))
            .layer(preflight_cors_layer())
    }

    #[tokio::test]
    async fn test_preflight_returns_empty_ok() {
        let request = Request::builder()
            .method("OPTIONS")
            .uri("/echo")
            .header("origin", "https://shop.example")
            .header("access-control-request-method", "POST")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(headers["access-control-allow-origin"], "*");
        let allowed = headers["access-control-allow-headers"].to_str().unwrap();
        assert!(allowed.contains("apikey"));
        assert!(allowed.contains("content-type"));

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_regular_response_carries_allow_origin() {
        let request = Request::builder()
            .method("POST")
            .uri("/echo")
            .header("origin", "https://shop.example")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
    }
}
