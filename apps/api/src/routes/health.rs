use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Service banner for anyone poking the root path.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "service": "persona-api",
        "message": "Personality classification API",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /health
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy"
    }))
}
