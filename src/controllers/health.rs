use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::infrastructure::config::Config;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Readiness: the service can always serve local providers, so this only
/// reports whether the remote credential is present.
pub async fn health_ready(State(config): State<Arc<Config>>) -> impl IntoResponse {
    let gemini = if config.has_gemini_api_key() {
        "configured"
    } else {
        "missing_credential"
    };

    (
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "gemini": gemini
        })),
    )
}
