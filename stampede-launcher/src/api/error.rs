//! API Error Handling
//!
//! Unified error types and conversion for API responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use stampede_core::domain::launch::LaunchFailure;

/// API error type
#[derive(Debug)]
pub enum ApiError {
    /// Malformed request: validation fault or orchestrator-side shape
    /// rejection. Never retried by this service.
    BadRequest(String),
    /// The orchestrator started zero tasks
    LaunchFailed(Vec<LaunchFailure>),
    /// Infrastructure fault contacting the orchestrator
    Upstream(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": msg })),
            )
                .into_response(),
            ApiError::LaunchFailed(failures) => {
                tracing::error!("Failed to launch {} task(s): {:?}", failures.len(), failures);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({
                        "error": "no tasks were started",
                        "failures": failures,
                    })),
                )
                    .into_response()
            }
            ApiError::Upstream(msg) => {
                tracing::error!("Orchestrator error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "error": msg })),
                )
                    .into_response()
            }
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_maps_to_400() {
        let response = ApiError::BadRequest("targetUrl is required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_launch_failed_maps_to_500() {
        let response = ApiError::LaunchFailed(vec![LaunchFailure {
            reason: "RESOURCE:FARGATE".to_string(),
            detail: "capacity unavailable".to_string(),
        }])
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_upstream_maps_to_500() {
        let response = ApiError::Upstream("throttled".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
