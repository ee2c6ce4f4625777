//! Ingestion service
//!
//! Normalizes each completion message into a [`ResultRecord`] and upserts
//! it into the result store. Each message is handled independently and
//! yields an explicit [`Disposition`]; the queue binding decides what an
//! acknowledgment looks like. No retry or backoff happens here — that
//! policy belongs to the queue infrastructure.

use chrono::Utc;
use tracing::{info, warn};

use stampede_core::domain::result::ResultRecord;
use stampede_core::dto::message::CompletionMessage;

use crate::queue::QueueMessage;
use crate::store::ResultStore;

/// Per-message processing verdict, consumed by the queue poller
#[derive(Debug, Clone, PartialEq)]
pub enum Disposition {
    /// The record was written; acknowledge the message
    Stored { test_id: String },
    /// Transient failure (store write); leave the message for redelivery
    Retry { reason: String },
    /// The payload can never be processed; route it to the dead-letter path
    DeadLetter { reason: String },
}

/// Processes a single completion message
pub async fn ingest_message(store: &dyn ResultStore, body: &str) -> Disposition {
    let message: CompletionMessage = match serde_json::from_str(body) {
        Ok(msg) => msg,
        Err(e) => {
            // Redelivery cannot fix a malformed payload.
            return Disposition::DeadLetter {
                reason: format!("undecodable payload: {}", e),
            };
        }
    };

    let record = ResultRecord::from_message(message, Utc::now());
    let test_id = record.test_id.clone();

    match store.put(&record).await {
        Ok(()) => {
            info!("Successfully stored result for test: {}", test_id);
            Disposition::Stored { test_id }
        }
        Err(e) => {
            warn!("Store write failed for test {}: {}", test_id, e);
            Disposition::Retry {
                reason: e.to_string(),
            }
        }
    }
}

/// Processes a batch, one disposition per message in input order
///
/// A failing message never blocks the rest of the batch.
pub async fn ingest_batch(
    store: &dyn ResultStore,
    messages: &[QueueMessage],
) -> Vec<Disposition> {
    let mut dispositions = Vec::with_capacity(messages.len());
    for message in messages {
        dispositions.push(ingest_message(store, &message.body).await);
    }
    dispositions
}
