//! Ingestor configuration
//!
//! Queue and store identities plus polling knobs, read once at startup.

use std::time::Duration;

/// SQS caps a single receive at 10 messages
pub const MAX_RECEIVE_BATCH: usize = 10;
/// SQS caps long-poll waits at 20 seconds
pub const MAX_POLL_WAIT_SECONDS: u64 = 20;

/// Ingestor configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the completion-message queue
    pub queue_url: String,

    /// Name of the result table
    pub results_table: String,

    /// Optional queue for payloads that can never be processed; when
    /// unset, poison messages are left to the queue's own redrive policy
    pub dead_letter_queue_url: Option<String>,

    /// Messages requested per receive (1..=10)
    pub max_batch_size: usize,

    /// Long-poll wait per receive (0..=20 seconds)
    pub poll_wait: Duration,

    /// Pause after a failed poll cycle before trying again
    pub idle_interval: Duration,
}

impl Config {
    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - QUEUE_URL (required)
    /// - RESULTS_TABLE (required)
    /// - DEAD_LETTER_QUEUE_URL (optional)
    /// - MAX_BATCH_SIZE (optional, default: 10)
    /// - POLL_WAIT_SECONDS (optional, default: 20)
    /// - IDLE_INTERVAL (optional, seconds, default: 1)
    pub fn from_env() -> anyhow::Result<Self> {
        let queue_url = std::env::var("QUEUE_URL")
            .map_err(|_| anyhow::anyhow!("QUEUE_URL environment variable not set"))?;

        let results_table = std::env::var("RESULTS_TABLE")
            .map_err(|_| anyhow::anyhow!("RESULTS_TABLE environment variable not set"))?;

        let dead_letter_queue_url = std::env::var("DEAD_LETTER_QUEUE_URL")
            .ok()
            .filter(|s| !s.is_empty());

        let max_batch_size = std::env::var("MAX_BATCH_SIZE")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(MAX_RECEIVE_BATCH);

        let poll_wait = std::env::var("POLL_WAIT_SECONDS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(MAX_POLL_WAIT_SECONDS));

        let idle_interval = std::env::var("IDLE_INTERVAL")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(1));

        Ok(Self {
            queue_url,
            results_table,
            dead_letter_queue_url,
            max_batch_size,
            poll_wait,
            idle_interval,
        })
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.queue_url.is_empty() {
            anyhow::bail!("queue_url cannot be empty");
        }

        if self.results_table.is_empty() {
            anyhow::bail!("results_table cannot be empty");
        }

        if self.max_batch_size == 0 || self.max_batch_size > MAX_RECEIVE_BATCH {
            anyhow::bail!("max_batch_size must be between 1 and {}", MAX_RECEIVE_BATCH);
        }

        if self.poll_wait.as_secs() > MAX_POLL_WAIT_SECONDS {
            anyhow::bail!("poll_wait must be at most {} seconds", MAX_POLL_WAIT_SECONDS);
        }

        Ok(())
    }
}
