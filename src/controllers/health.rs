use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::infrastructure::google::check_credentials;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Readiness reflects the credential gate only; no Google API is called.
pub async fn health_ready() -> impl IntoResponse {
    match check_credentials() {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "credentials": "present"
            })),
        ),
        Err(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "credentials": "missing"
            })),
        ),
    }
}
