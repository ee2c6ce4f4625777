//! Stampede Ingestor
//!
//! Drains load-test completion messages from a queue and persists them as
//! durable result records with automatic retention-based expiry.
//!
//! Architecture:
//! - Configuration: Queue and table identities from environment variables
//! - Queue: Trait seam over receive/acknowledge with an SQS adapter
//! - Store: Trait seam over "upsert a record" with a DynamoDB adapter
//! - Service: Per-message normalization and disposition
//! - Consumer: Batch polling loop that settles each disposition

mod config;
mod consumer;
mod queue;
mod service;
mod store;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::consumer::QueuePoller;
use crate::queue::SqsMessageSource;
use crate::store::DynamoResultStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stampede_ingestor=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Stampede Ingestor");

    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate()?;

    info!(
        "Loaded configuration: queue={}, table={}, dead_letter_queue={:?}",
        config.queue_url, config.results_table, config.dead_letter_queue_url
    );

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;

    let queue = Arc::new(SqsMessageSource::new(
        &aws_config,
        config.queue_url.clone(),
        config.dead_letter_queue_url.clone(),
    ));
    let store = Arc::new(DynamoResultStore::new(
        &aws_config,
        config.results_table.clone(),
    ));

    info!("Queue and store clients initialized");

    let poller = QueuePoller::new(config, queue, store);

    info!("Starting polling loop");
    poller.run().await
}
