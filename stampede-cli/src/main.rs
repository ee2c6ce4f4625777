//! Stampede CLI
//!
//! Command-line interface for triggering load-test launches against the
//! Stampede launcher.

mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};

#[derive(Parser)]
#[command(name = "stampede")]
#[command(about = "Stampede load-test dispatch CLI", long_about = None)]
struct Cli {
    /// Launcher URL
    #[arg(
        long,
        env = "STAMPEDE_LAUNCHER_URL",
        default_value = "http://localhost:8080"
    )]
    launcher_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    handle_command(cli.command, &cli.launcher_url).await
}
