//! Launch API Handler
//!
//! HTTP endpoint for dispatching load-test worker tasks.

use std::sync::Arc;

use axum::{Json, extract::State};

use stampede_core::dto::launch::{LaunchRequest, LaunchResponse};

use crate::api::AppState;
use crate::api::error::{ApiError, ApiResult};
use crate::orchestrator::OrchestratorError;
use crate::service::launch::{self, LaunchError};

/// POST /launch
/// Validate a launch request and start worker tasks
///
/// The body is decoded from a raw JSON value so shape errors (unknown
/// fields, negative numbers) come back as a 400 with a structured error,
/// the same as validation faults.
pub async fn launch_tasks(
    State(state): State<Arc<AppState>>,
    Json(body): Json<serde_json::Value>,
) -> ApiResult<Json<LaunchResponse>> {
    tracing::info!("Received launch request: {}", body);

    let request: LaunchRequest = serde_json::from_value(body)
        .map_err(|e| ApiError::BadRequest(format!("invalid request: {}", e)))?;

    let outcome = launch::launch_tasks(&state.config, state.orchestrator.as_ref(), request)
        .await
        .map_err(|e| match e {
            LaunchError::Validation(msg) => ApiError::BadRequest(msg),
            LaunchError::Orchestrator(OrchestratorError::InvalidRequest(msg)) => {
                ApiError::BadRequest(msg)
            }
            LaunchError::Orchestrator(OrchestratorError::Unavailable(msg)) => {
                ApiError::Upstream(msg)
            }
        })?;

    // Partial success stays a 200; only a total launch failure is an error.
    if outcome.launched_count == 0 {
        return Err(ApiError::LaunchFailed(outcome.failures));
    }

    Ok(Json(LaunchResponse::from(outcome)))
}
