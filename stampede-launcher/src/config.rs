//! Launcher configuration
//!
//! Static deployment context for the launcher: which cluster and task
//! definition to run workers under, and how to wire their network. Read
//! once at startup and immutable thereafter.

/// Launcher configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// ECS cluster to run worker tasks in
    pub cluster_name: String,

    /// Task definition family for the worker image
    pub task_definition_family: String,

    /// Container name inside the task definition that receives the
    /// command override
    pub container_name: String,

    /// Subnets the worker tasks are placed into
    pub subnets: Vec<String>,

    /// Security group attached to worker tasks
    pub security_group: String,

    /// Address the HTTP API binds to
    pub bind_addr: String,
}

impl Config {
    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - CLUSTER_NAME (required)
    /// - TASK_DEFINITION_FAMILY (required)
    /// - CONTAINER_NAME (required)
    /// - SUBNETS (required, comma-separated)
    /// - SECURITY_GROUP (required)
    /// - BIND_ADDR (optional, default: 0.0.0.0:8080)
    pub fn from_env() -> anyhow::Result<Self> {
        let cluster_name = require_env("CLUSTER_NAME")?;
        let task_definition_family = require_env("TASK_DEFINITION_FAMILY")?;
        let container_name = require_env("CONTAINER_NAME")?;
        let security_group = require_env("SECURITY_GROUP")?;

        let subnets = require_env("SUBNETS")?
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        Ok(Self {
            cluster_name,
            task_definition_family,
            container_name,
            subnets,
            security_group,
            bind_addr,
        })
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.cluster_name.is_empty() {
            anyhow::bail!("cluster_name cannot be empty");
        }

        if self.task_definition_family.is_empty() {
            anyhow::bail!("task_definition_family cannot be empty");
        }

        if self.container_name.is_empty() {
            anyhow::bail!("container_name cannot be empty");
        }

        if self.subnets.is_empty() {
            anyhow::bail!("at least one subnet is required");
        }

        if self.security_group.is_empty() {
            anyhow::bail!("security_group cannot be empty");
        }

        Ok(())
    }
}

fn require_env(name: &str) -> anyhow::Result<String> {
    std::env::var(name).map_err(|_| anyhow::anyhow!("{} environment variable not set", name))
}
