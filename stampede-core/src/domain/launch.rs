//! Launch domain types
//!
//! A [`LaunchSpec`] is a fully validated and normalized launch request;
//! a [`LaunchOutcome`] is what the orchestrator actually did with it.

use serde::{Deserialize, Serialize};

use crate::dto::launch::LaunchRequest;

/// Default task count when the request omits it
pub const DEFAULT_TASK_COUNT: u32 = 1;
/// Default number of virtual users
pub const DEFAULT_VUS: u32 = 100;
/// Default request rate per second
pub const DEFAULT_RATE: u32 = 10;
/// Default test duration in seconds
pub const DEFAULT_DURATION_SECONDS: u32 = 300;

/// Validated, normalized launch parameters
///
/// Built from a [`LaunchRequest`] via [`LaunchSpec::from_request`], which
/// applies defaults for absent fields and rejects invalid values before
/// anything is sent to the orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchSpec {
    pub task_count: u32,
    pub target_url: String,
    pub vus: u32,
    pub rate: u32,
    pub duration_seconds: u32,
}

impl LaunchSpec {
    /// Validates a launch request and fills in defaults
    ///
    /// Rejections:
    /// - `taskCount` of zero (nothing to launch)
    /// - missing or empty `targetUrl`
    /// - `targetUrl` that is not an http(s) URL
    ///
    /// No upper bound is enforced on `task_count`; the orchestrator's own
    /// quotas are the limiting contract.
    pub fn from_request(req: LaunchRequest) -> Result<Self, String> {
        let task_count = req.task_count.unwrap_or(DEFAULT_TASK_COUNT);
        if task_count == 0 {
            return Err("taskCount must be at least 1".to_string());
        }

        let target_url = req.target_url.unwrap_or_default();
        if target_url.is_empty() {
            return Err("targetUrl is required".to_string());
        }
        if !target_url.starts_with("http://") && !target_url.starts_with("https://") {
            return Err("targetUrl must start with http:// or https://".to_string());
        }

        Ok(Self {
            task_count,
            target_url,
            vus: req.vus.unwrap_or(DEFAULT_VUS),
            rate: req.rate.unwrap_or(DEFAULT_RATE),
            duration_seconds: req.duration.unwrap_or(DEFAULT_DURATION_SECONDS),
        })
    }

    /// Builds the container command override for the worker image
    ///
    /// The worker expects exactly four positional values in this order:
    /// target URL, virtual users, request rate, duration. This is a wire
    /// contract with the worker image and must not be reordered.
    pub fn container_command(&self) -> Vec<String> {
        vec![
            self.target_url.clone(),
            self.vus.to_string(),
            self.rate.to_string(),
            self.duration_seconds.to_string(),
        ]
    }
}

/// A task the orchestrator refused to start
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchFailure {
    /// Machine-readable reason (e.g. a capacity or IAM error code)
    pub reason: String,
    /// Human-readable detail
    pub detail: String,
}

/// Result of a single launch attempt
///
/// Created and returned within one request; never persisted. Partial
/// success (some tasks started, some rejected) is carried in-band.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchOutcome {
    pub launched_count: usize,
    pub task_arns: Vec<String>,
    pub failures: Vec<LaunchFailure>,
    pub cluster_name: String,
    pub task_definition: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(target_url: Option<&str>) -> LaunchRequest {
        LaunchRequest {
            task_count: None,
            target_url: target_url.map(str::to_string),
            vus: None,
            rate: None,
            duration: None,
        }
    }

    #[test]
    fn test_defaults_applied() {
        let spec = LaunchSpec::from_request(request(Some("https://api.example.com"))).unwrap();
        assert_eq!(spec.task_count, 1);
        assert_eq!(spec.vus, 100);
        assert_eq!(spec.rate, 10);
        assert_eq!(spec.duration_seconds, 300);
        assert_eq!(spec.target_url, "https://api.example.com");
    }

    #[test]
    fn test_zero_task_count_rejected() {
        let mut req = request(Some("https://api.example.com"));
        req.task_count = Some(0);
        assert!(LaunchSpec::from_request(req).is_err());
    }

    #[test]
    fn test_missing_target_url_rejected() {
        assert!(LaunchSpec::from_request(request(None)).is_err());
        assert!(LaunchSpec::from_request(request(Some(""))).is_err());
    }

    #[test]
    fn test_non_http_target_url_rejected() {
        assert!(LaunchSpec::from_request(request(Some("ftp://example.com"))).is_err());
        assert!(LaunchSpec::from_request(request(Some("example.com"))).is_err());
    }

    #[test]
    fn test_container_command_order() {
        let req = LaunchRequest {
            task_count: Some(2),
            target_url: Some("https://x".to_string()),
            vus: Some(50),
            rate: Some(5),
            duration: Some(120),
        };
        let spec = LaunchSpec::from_request(req).unwrap();
        assert_eq!(spec.container_command(), vec!["https://x", "50", "5", "120"]);
    }
}
