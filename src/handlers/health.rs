//! Health check handlers

use axum::Json;
use serde::Serialize;
use serde_json::json;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    timestamp: i64,
}

/// Liveness banner (home route)
pub async fn home() -> Json<serde_json::Value> {
    Json(json!({ "message": "Eco Packaging AI Backend is running 🚀" }))
}

pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().timestamp(),
    })
}
