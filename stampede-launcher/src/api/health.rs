//! Health Check API Handler

use axum::{http::StatusCode, response::IntoResponse};

/// GET /health
/// Liveness endpoint for monitoring and load balancers
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
