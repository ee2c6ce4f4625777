//! Stampede Launcher
//!
//! HTTP front-end that turns logical load-test requests into running
//! worker tasks on ECS Fargate.
//!
//! Architecture:
//! - Configuration: Deployment context from environment variables
//! - API: axum handlers translating HTTP to/from the launch service
//! - Service: Validation, command-override building, outcome mapping
//! - Orchestrator: Trait seam over "start a task" with an ECS adapter

mod api;
mod config;
mod orchestrator;
mod service;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api::AppState;
use crate::config::Config;
use crate::orchestrator::EcsOrchestrator;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stampede_launcher=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Stampede Launcher");

    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate()?;

    info!(
        "Loaded configuration: cluster={}, task_definition={}, container={}, subnets={:?}, security_group={}",
        config.cluster_name,
        config.task_definition_family,
        config.container_name,
        config.subnets,
        config.security_group
    );

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let orchestrator = Arc::new(EcsOrchestrator::new(&aws_config));

    info!("Orchestrator client initialized");

    let bind_addr = config.bind_addr.clone();
    let state = Arc::new(AppState {
        config,
        orchestrator,
    });

    let app = api::create_router(state);

    info!("Listening on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .await
        .context("Failed to start server")?;

    Ok(())
}
