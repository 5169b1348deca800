pub mod proxy_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

/// Ruta del proxy, la misma que usa el cliente en modo `Proxied`
pub const PROXY_PATH: &str = "/api/proxy";

/// Router completo del servidor
pub fn create_app(state: AppState) -> Router {
    let cors = cors_middleware(&state.config.cors_origins);

    Router::new()
        .route("/health", get(health_check))
        .nest(PROXY_PATH, proxy_routes::create_proxy_router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "car-booking-proxy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
