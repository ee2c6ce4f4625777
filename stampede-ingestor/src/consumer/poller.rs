//! Queue poller
//!
//! Long-polls the completion queue in batches and applies each message's
//! disposition: acknowledge stored messages, leave retryable ones for the
//! visibility timeout to redeliver, and route poison payloads to the
//! dead-letter path.

use std::sync::Arc;

use anyhow::Result;
use tokio::time;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::queue::{MessageSource, QueueMessage};
use crate::service::ingest::{self, Disposition};
use crate::store::ResultStore;

/// Poller that continuously drains the completion queue
pub struct QueuePoller {
    config: Config,
    queue: Arc<dyn MessageSource>,
    store: Arc<dyn ResultStore>,
}

impl QueuePoller {
    /// Creates a new queue poller
    pub fn new(config: Config, queue: Arc<dyn MessageSource>, store: Arc<dyn ResultStore>) -> Self {
        Self {
            config,
            queue,
            store,
        }
    }

    /// Starts the polling loop
    ///
    /// Receive errors are logged and the loop continues after a pause; a
    /// stuck queue must not take the ingestor down.
    pub async fn run(&self) -> Result<()> {
        info!(
            "Starting queue poller (batch: {}, wait: {:?})",
            self.config.max_batch_size, self.config.poll_wait
        );

        loop {
            match self.poll_once().await {
                Ok(stored) => {
                    if stored > 0 {
                        info!("Stored {} result(s) this cycle", stored);
                    }
                }
                Err(e) => {
                    error!("Error during poll cycle: {:#}", e);
                    time::sleep(self.config.idle_interval).await;
                }
            }
        }
    }

    /// Performs a single receive-process-acknowledge cycle
    ///
    /// Returns the number of records stored.
    async fn poll_once(&self) -> Result<usize> {
        let messages = self
            .queue
            .receive(self.config.max_batch_size, self.config.poll_wait)
            .await?;

        if messages.is_empty() {
            debug!("No messages available");
            return Ok(0);
        }

        info!("Received {} message(s)", messages.len());

        let dispositions = ingest::ingest_batch(self.store.as_ref(), &messages).await;

        let mut stored = 0;
        for (message, disposition) in messages.iter().zip(dispositions) {
            self.settle(message, disposition, &mut stored).await;
        }

        Ok(stored)
    }

    /// Applies one message's disposition against the queue
    ///
    /// Settlement failures are logged, never propagated: a failed ack
    /// merely means the message comes back, and the store write is an
    /// idempotent upsert, so redelivery is harmless.
    async fn settle(&self, message: &QueueMessage, disposition: Disposition, stored: &mut usize) {
        match disposition {
            Disposition::Stored { test_id } => {
                match self.queue.acknowledge(message).await {
                    Ok(()) => *stored += 1,
                    Err(e) => warn!(
                        "Failed to acknowledge message {} (test {}): {}",
                        message.message_id, test_id, e
                    ),
                }
            }
            Disposition::Retry { reason } => {
                warn!(
                    "Leaving message {} for redelivery: {}",
                    message.message_id, reason
                );
            }
            Disposition::DeadLetter { reason } => {
                error!(
                    "Poison message {}: {} (body: {})",
                    message.message_id, reason, message.body
                );
                match self.queue.forward_dead_letter(message).await {
                    Ok(true) => info!("Forwarded message {} to dead-letter queue", message.message_id),
                    Ok(false) => warn!(
                        "No dead-letter queue configured; leaving message {} to the redrive policy",
                        message.message_id
                    ),
                    Err(e) => warn!(
                        "Failed to dead-letter message {}: {}",
                        message.message_id, e
                    ),
                }
            }
        }
    }
}
