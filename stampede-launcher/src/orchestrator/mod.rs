//! Task orchestrator seam
//!
//! The launcher talks to its container orchestrator through the
//! [`TaskOrchestrator`] trait so the launch logic can be exercised with
//! substitutable fakes. The production implementation is [`ecs`].

pub mod ecs;

use async_trait::async_trait;
use thiserror::Error;

use stampede_core::domain::launch::LaunchFailure;

pub use ecs::EcsOrchestrator;

/// One task-run request against the orchestrator
#[derive(Debug, Clone)]
pub struct RunTasksRequest {
    pub cluster: String,
    pub task_definition: String,
    pub count: u32,
    pub subnets: Vec<String>,
    pub security_group: String,
    pub container_name: String,
    /// Positional command override for the worker container
    pub command: Vec<String>,
}

/// What the orchestrator did with a run request
///
/// A single call can partially succeed: some tasks start, others are
/// rejected at launch with a reason.
#[derive(Debug, Clone, Default)]
pub struct RunTasksOutcome {
    pub task_arns: Vec<String>,
    pub failures: Vec<LaunchFailure>,
}

/// Errors from the orchestrator call itself
///
/// Rejected-at-launch entries are not errors; they come back inside
/// [`RunTasksOutcome::failures`].
#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// The orchestrator rejected the request shape (client fault)
    #[error("orchestrator rejected the request: {0}")]
    InvalidRequest(String),

    /// The call failed for infrastructure reasons: network, permissions,
    /// throttling (server fault)
    #[error("orchestrator unavailable: {0}")]
    Unavailable(String),
}

/// Starts managed, ephemeral compute units to run a workload
#[async_trait]
pub trait TaskOrchestrator: Send + Sync {
    /// Issues exactly one task-run request
    async fn run_tasks(&self, req: &RunTasksRequest)
    -> Result<RunTasksOutcome, OrchestratorError>;
}
