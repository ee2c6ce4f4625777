//! AWS ECS implementation of [`TaskOrchestrator`]
//!
//! Runs worker tasks on Fargate: fully managed capacity, no persistent
//! host pool. Launch rejections (capacity, IAM, network) come back in the
//! response's failure list and are treated as steady-state noise, not
//! call errors.

use async_trait::async_trait;
use aws_sdk_ecs::Client;
use aws_sdk_ecs::error::SdkError;
use aws_sdk_ecs::operation::run_task::RunTaskError;
use aws_sdk_ecs::types::{
    AssignPublicIp, AwsVpcConfiguration, ContainerOverride, LaunchType, NetworkConfiguration,
    TaskOverride,
};
use tracing::{debug, info, warn};

use stampede_core::domain::launch::LaunchFailure;

use super::{OrchestratorError, RunTasksOutcome, RunTasksRequest, TaskOrchestrator};

/// ECS-backed task orchestrator
#[derive(Debug, Clone)]
pub struct EcsOrchestrator {
    client: Client,
}

impl EcsOrchestrator {
    /// Creates an orchestrator from a shared AWS configuration
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

#[async_trait]
impl TaskOrchestrator for EcsOrchestrator {
    async fn run_tasks(
        &self,
        req: &RunTasksRequest,
    ) -> Result<RunTasksOutcome, OrchestratorError> {
        let vpc_config = AwsVpcConfiguration::builder()
            .set_subnets(Some(req.subnets.clone()))
            .security_groups(&req.security_group)
            .assign_public_ip(AssignPublicIp::Enabled)
            .build()
            .map_err(|e| OrchestratorError::InvalidRequest(e.to_string()))?;

        let container_override = ContainerOverride::builder()
            .name(&req.container_name)
            .set_command(Some(req.command.clone()))
            .build();

        debug!(
            "Running {} task(s): cluster={}, task_definition={}, subnets={:?}, security_group={}",
            req.count, req.cluster, req.task_definition, req.subnets, req.security_group
        );

        let response = self
            .client
            .run_task()
            .cluster(&req.cluster)
            .task_definition(&req.task_definition)
            .count(req.count as i32)
            .launch_type(LaunchType::Fargate)
            .network_configuration(
                NetworkConfiguration::builder()
                    .awsvpc_configuration(vpc_config)
                    .build(),
            )
            .overrides(
                TaskOverride::builder()
                    .container_overrides(container_override)
                    .build(),
            )
            .send()
            .await
            .map_err(classify_sdk_error)?;

        let task_arns: Vec<String> = response
            .tasks()
            .iter()
            .filter_map(|task| task.task_arn().map(str::to_owned))
            .collect();

        let failures: Vec<LaunchFailure> = response
            .failures()
            .iter()
            .map(|failure| LaunchFailure {
                reason: failure.reason().unwrap_or_default().to_string(),
                detail: failure.detail().unwrap_or_default().to_string(),
            })
            .collect();

        for arn in &task_arns {
            info!("Launched task: {}", arn);
        }
        if !failures.is_empty() {
            warn!("{} task(s) rejected at launch: {:?}", failures.len(), failures);
        }

        Ok(RunTasksOutcome { task_arns, failures })
    }
}

/// Maps SDK errors onto the launcher's fault taxonomy
///
/// Request-shape rejections are client faults; everything else (network,
/// permissions, throttling, server-side errors) is an infrastructure
/// fault left to the caller's retry policy.
fn classify_sdk_error(err: SdkError<RunTaskError>) -> OrchestratorError {
    match &err {
        SdkError::ServiceError(context) => {
            let service_err = context.err();
            if service_err.is_invalid_parameter_exception()
                || service_err.is_cluster_not_found_exception()
            {
                OrchestratorError::InvalidRequest(service_err.to_string())
            } else {
                OrchestratorError::Unavailable(service_err.to_string())
            }
        }
        _ => OrchestratorError::Unavailable(err.to_string()),
    }
}
