//! Axum router configuration with middleware.
//!
//! Two routes: `POST /chat` (the relay) and `GET /health`. Middleware:
//! permissive CORS (the widget may be served from any origin) and request
//! tracing.
//!
//! If a widget directory exists on disk (configurable via
//! `RELAYCHAT_WEB_DIR`, default `web/`), it is served as a static fallback
//! so the relay can host its own client. If the directory does not exist,
//! only the API is served.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .route("/chat", post(handlers::chat::chat))
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let web_dir = std::env::var("RELAYCHAT_WEB_DIR").unwrap_or_else(|_| "web".to_string());
    if std::path::Path::new(&web_dir).exists() {
        router = router.fallback_service(ServeDir::new(&web_dir));
        tracing::info!(path = %web_dir, "widget static file serving enabled");
    }

    router
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
