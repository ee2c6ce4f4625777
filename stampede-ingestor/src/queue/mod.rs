//! Message queue seam
//!
//! The ingestor drains its completion queue through the [`MessageSource`]
//! trait. Redelivery, backoff, and dead-letter policy belong to the queue
//! infrastructure itself; this seam only exposes receive, acknowledge,
//! and an optional dead-letter forward.

pub mod sqs;

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

pub use sqs::SqsMessageSource;

/// One queue entry: an opaque payload plus its delivery handle
#[derive(Debug, Clone)]
pub struct QueueMessage {
    pub message_id: String,
    pub receipt_handle: String,
    pub body: String,
}

/// Errors from the queue transport
#[derive(Debug, Error)]
pub enum QueueError {
    #[error("failed to receive messages: {0}")]
    ReceiveFailed(String),

    #[error("failed to acknowledge message: {0}")]
    AcknowledgeFailed(String),

    #[error("failed to forward message to dead-letter queue: {0}")]
    DeadLetterFailed(String),
}

/// A source of completion messages with per-message acknowledgment
#[async_trait]
pub trait MessageSource: Send + Sync {
    /// Receives up to `max` messages, long-polling up to `wait`
    async fn receive(&self, max: usize, wait: Duration) -> Result<Vec<QueueMessage>, QueueError>;

    /// Removes a processed message from the queue
    async fn acknowledge(&self, msg: &QueueMessage) -> Result<(), QueueError>;

    /// Forwards a poison message to the dead-letter path and removes the
    /// original. Returns `false` when no dead-letter path is configured,
    /// in which case the message stays put for the queue's own redrive
    /// policy.
    async fn forward_dead_letter(&self, msg: &QueueMessage) -> Result<bool, QueueError>;
}
