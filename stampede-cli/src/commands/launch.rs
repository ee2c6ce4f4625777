//! Launch command handler

use anyhow::Result;
use clap::Args;
use colored::*;

use stampede_client::LauncherClient;
use stampede_core::dto::launch::LaunchRequest;

/// Arguments for the launch command
#[derive(Args)]
pub struct LaunchArgs {
    /// Target URL for the load test
    #[arg(long)]
    pub target_url: String,

    /// Number of worker tasks to launch
    #[arg(long)]
    pub tasks: Option<u32>,

    /// Number of virtual users per task
    #[arg(long)]
    pub vus: Option<u32>,

    /// Request rate per second
    #[arg(long)]
    pub rate: Option<u32>,

    /// Test duration in seconds
    #[arg(long)]
    pub duration: Option<u32>,
}

/// Launch worker tasks and print the outcome
pub async fn handle_launch(client: &LauncherClient, args: LaunchArgs) -> Result<()> {
    let response = client
        .launch(LaunchRequest {
            task_count: args.tasks,
            target_url: Some(args.target_url),
            vus: args.vus,
            rate: args.rate,
            duration: args.duration,
        })
        .await?;

    println!("{}", response.message.bold());
    println!(
        "Cluster: {}  Task definition: {}",
        response.cluster_name, response.task_definition
    );
    println!();

    for arn in &response.task_arns {
        println!("  {} {}", "started".green(), arn);
    }

    if !response.failures.is_empty() {
        println!();
        println!(
            "{}",
            format!("{} task(s) rejected:", response.failures.len()).yellow()
        );
        for failure in &response.failures {
            println!("  {} {} ({})", "rejected".red(), failure.reason, failure.detail);
        }
    }

    Ok(())
}
