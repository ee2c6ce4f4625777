//! CLI command handlers

mod launch;

use anyhow::Result;
use clap::Subcommand;
use colored::*;

use stampede_client::LauncherClient;

/// Top-level commands
#[derive(Subcommand)]
pub enum Commands {
    /// Launch load-test worker tasks
    Launch(launch::LaunchArgs),
    /// Check launcher availability
    Health,
}

/// Routes commands to their respective handlers
pub async fn handle_command(command: Commands, launcher_url: &str) -> Result<()> {
    let client = LauncherClient::new(launcher_url);

    match command {
        Commands::Launch(args) => launch::handle_launch(&client, args).await,
        Commands::Health => health(&client).await,
    }
}

async fn health(client: &LauncherClient) -> Result<()> {
    client.health().await?;
    println!("{}", "Launcher is healthy.".green());
    Ok(())
}
