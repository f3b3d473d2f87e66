use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde_json::{json, Value};

/// ANY /healthCheck (also GET /health)
/// Liveness only: no validation, no upstream calls.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        "message": "Portfolio API is running"
    }))
}
