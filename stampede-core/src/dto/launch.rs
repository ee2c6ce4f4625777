//! Launcher API wire types

use serde::{Deserialize, Serialize};

use crate::domain::launch::{LaunchFailure, LaunchOutcome};

/// Request to launch one or more load-test worker tasks
///
/// All fields are optional on the wire; defaults are applied during
/// normalization into a `LaunchSpec`. Unknown fields are rejected so a
/// misspelled parameter fails loudly instead of silently falling back to
/// a default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LaunchRequest {
    #[serde(default)]
    pub task_count: Option<u32>,
    #[serde(default)]
    pub target_url: Option<String>,
    /// Number of virtual users
    #[serde(default)]
    pub vus: Option<u32>,
    /// Request rate per second
    #[serde(default)]
    pub rate: Option<u32>,
    /// Test duration in seconds
    #[serde(default)]
    pub duration: Option<u32>,
}

/// Successful launch response body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchResponse {
    pub message: String,
    pub tasks_launched: usize,
    pub task_arns: Vec<String>,
    pub failures: Vec<LaunchFailure>,
    pub cluster_name: String,
    pub task_definition: String,
}

impl From<LaunchOutcome> for LaunchResponse {
    fn from(outcome: LaunchOutcome) -> Self {
        Self {
            message: format!("Successfully launched {} task(s)", outcome.launched_count),
            tasks_launched: outcome.launched_count,
            task_arns: outcome.task_arns,
            failures: outcome.failures,
            cluster_name: outcome.cluster_name,
            task_definition: outcome.task_definition,
        }
    }
}
