//! API Module
//!
//! HTTP API layer for the launcher.

pub mod error;
pub mod health;
pub mod launch;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::orchestrator::TaskOrchestrator;

/// Shared state for API handlers
///
/// The orchestrator is a trait object so tests can substitute a fake.
pub struct AppState {
    pub config: Config,
    pub orchestrator: Arc<dyn TaskOrchestrator>,
}

/// Create the main API router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/launch", post(launch::launch_tasks))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
