//! HTTP adapters - REST API implementations.
//!
//! The guide module has its own HTTP adapter; this module assembles it with
//! the health check and the cross-cutting tower layers.

pub mod guide;

use axum::http::HeaderValue;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

// Re-export key types for convenience
pub use guide::guide_router;
pub use guide::GuideAppState;

/// GET /health - Liveness check
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Builds the full application router.
///
/// Unset or empty `cors_origins` allows any origin.
pub fn build_router(state: GuideAppState, server: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(guide_router())
        .with_state(state)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .allowed_origins()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
