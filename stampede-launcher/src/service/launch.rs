//! Launch service
//!
//! Validates a launch request, issues one task-run call to the
//! orchestrator, and partitions the response into started tasks and
//! rejected-at-launch failures.

use tracing::info;

use stampede_core::domain::launch::{LaunchOutcome, LaunchSpec};
use stampede_core::dto::launch::LaunchRequest;

use crate::config::Config;
use crate::orchestrator::{OrchestratorError, RunTasksRequest, TaskOrchestrator};

/// Service error type
#[derive(Debug)]
pub enum LaunchError {
    /// The request failed validation; nothing was sent to the orchestrator
    Validation(String),
    /// The orchestrator call itself failed
    Orchestrator(OrchestratorError),
}

impl From<OrchestratorError> for LaunchError {
    fn from(err: OrchestratorError) -> Self {
        LaunchError::Orchestrator(err)
    }
}

/// Launches worker tasks for a load-test request
///
/// Validation is total: every rejection happens before the outbound call.
/// A partially satisfied launch (some tasks started, some rejected) is a
/// success with a non-empty failure list; the caller decides how to treat
/// it.
pub async fn launch_tasks(
    config: &Config,
    orchestrator: &dyn TaskOrchestrator,
    request: LaunchRequest,
) -> Result<LaunchOutcome, LaunchError> {
    let spec = LaunchSpec::from_request(request).map_err(LaunchError::Validation)?;

    info!(
        "Launching {} task(s) in cluster: {} (task definition: {})",
        spec.task_count, config.cluster_name, config.task_definition_family
    );

    let outcome = orchestrator
        .run_tasks(&RunTasksRequest {
            cluster: config.cluster_name.clone(),
            task_definition: config.task_definition_family.clone(),
            count: spec.task_count,
            subnets: config.subnets.clone(),
            security_group: config.security_group.clone(),
            container_name: config.container_name.clone(),
            command: spec.container_command(),
        })
        .await?;

    info!(
        "Launched {} of {} task(s), {} rejected",
        outcome.task_arns.len(),
        spec.task_count,
        outcome.failures.len()
    );

    Ok(LaunchOutcome {
        launched_count: outcome.task_arns.len(),
        task_arns: outcome.task_arns,
        failures: outcome.failures,
        cluster_name: config.cluster_name.clone(),
        task_definition: config.task_definition_family.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    use stampede_core::domain::launch::LaunchFailure;

    use crate::orchestrator::RunTasksOutcome;

    /// Records the request it receives and replies with a canned outcome
    struct FakeOrchestrator {
        outcome: Mutex<Option<Result<RunTasksOutcome, OrchestratorError>>>,
        seen: Mutex<Vec<RunTasksRequest>>,
    }

    impl FakeOrchestrator {
        fn returning(outcome: Result<RunTasksOutcome, OrchestratorError>) -> Self {
            Self {
                outcome: Mutex::new(Some(outcome)),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<RunTasksRequest> {
            self.seen.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TaskOrchestrator for FakeOrchestrator {
        async fn run_tasks(
            &self,
            req: &RunTasksRequest,
        ) -> Result<RunTasksOutcome, OrchestratorError> {
            self.seen.lock().unwrap().push(req.clone());
            self.outcome.lock().unwrap().take().unwrap()
        }
    }

    fn config() -> Config {
        Config {
            cluster_name: "load-test".to_string(),
            task_definition_family: "load-test-worker".to_string(),
            container_name: "worker".to_string(),
            subnets: vec!["subnet-a".to_string()],
            security_group: "sg-1".to_string(),
            bind_addr: "0.0.0.0:8080".to_string(),
        }
    }

    fn request() -> LaunchRequest {
        LaunchRequest {
            task_count: Some(2),
            target_url: Some("https://x".to_string()),
            vus: Some(50),
            rate: Some(5),
            duration: Some(120),
        }
    }

    #[tokio::test]
    async fn test_full_success() {
        let orchestrator = FakeOrchestrator::returning(Ok(RunTasksOutcome {
            task_arns: vec!["arn:a".to_string(), "arn:b".to_string()],
            failures: vec![],
        }));

        let outcome = launch_tasks(&config(), &orchestrator, request())
            .await
            .unwrap();

        assert_eq!(outcome.launched_count, 2);
        assert_eq!(outcome.task_arns.len(), 2);
        assert!(outcome.failures.is_empty());
        assert_eq!(outcome.cluster_name, "load-test");
        assert_eq!(outcome.task_definition, "load-test-worker");

        let sent = orchestrator.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].count, 2);
        assert_eq!(sent[0].container_name, "worker");
        assert_eq!(sent[0].command, vec!["https://x", "50", "5", "120"]);
    }

    #[tokio::test]
    async fn test_partial_success_reports_failures_in_band() {
        let orchestrator = FakeOrchestrator::returning(Ok(RunTasksOutcome {
            task_arns: vec!["arn:a".to_string()],
            failures: vec![LaunchFailure {
                reason: "RESOURCE:FARGATE".to_string(),
                detail: "capacity unavailable".to_string(),
            }],
        }));

        let outcome = launch_tasks(&config(), &orchestrator, request())
            .await
            .unwrap();

        assert_eq!(outcome.launched_count, 1);
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].reason, "RESOURCE:FARGATE");
    }

    #[tokio::test]
    async fn test_validation_short_circuits_before_orchestrator() {
        let orchestrator = FakeOrchestrator::returning(Ok(RunTasksOutcome::default()));

        let mut req = request();
        req.target_url = None;

        let err = launch_tasks(&config(), &orchestrator, req).await.unwrap_err();
        assert!(matches!(err, LaunchError::Validation(_)));
        assert!(orchestrator.requests().is_empty());
    }

    #[tokio::test]
    async fn test_orchestrator_error_propagates() {
        let orchestrator = FakeOrchestrator::returning(Err(OrchestratorError::Unavailable(
            "throttled".to_string(),
        )));

        let err = launch_tasks(&config(), &orchestrator, request())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            LaunchError::Orchestrator(OrchestratorError::Unavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_defaults_flow_into_command() {
        let orchestrator = FakeOrchestrator::returning(Ok(RunTasksOutcome {
            task_arns: vec!["arn:a".to_string()],
            failures: vec![],
        }));

        let req = LaunchRequest {
            task_count: None,
            target_url: Some("https://api.example.com".to_string()),
            vus: None,
            rate: None,
            duration: None,
        };

        launch_tasks(&config(), &orchestrator, req).await.unwrap();

        let sent = orchestrator.requests();
        assert_eq!(sent[0].count, 1);
        assert_eq!(
            sent[0].command,
            vec!["https://api.example.com", "100", "10", "300"]
        );
    }
}
