//! Health check handler

use axum::Json;
use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PingResponse {
    message: &'static str,
    status: &'static str,
    version: &'static str,
    timestamp: String,
}

pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        message: "pong",
        status: "TokenVault Server is Healthy",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Utc::now().to_rfc3339(),
    })
}
