use crate::AppState;
use axum::{Router, routing::get};

/// Public Router Module
///
/// Defines the unauthenticated probe endpoints. No data access happens here;
/// every entity route lives under /admin behind the auth gate.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        // GET /
        // Greeting route kept for quick manual verification that the server is up.
        .route("/", get(|| async { "Hello from Scholarship server" }))
        // GET /health
        // Unauthenticated endpoint used for monitoring and load balancer checks.
        .route("/health", get(|| async { "ok" }))
}
