//! Result store seam
//!
//! Durable storage for result records behind the [`ResultStore`] trait so
//! ingestion logic can be exercised with an in-memory fake. The
//! production implementation is [`dynamo`].

pub mod dynamo;

use async_trait::async_trait;
use thiserror::Error;

use stampede_core::domain::result::ResultRecord;

pub use dynamo::DynamoResultStore;

/// Errors from the result store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store write failed: {0}")]
    WriteFailed(String),
}

/// Durable, keyed storage for completed-test records
///
/// `put` is an idempotent upsert: writing the same `test_id` twice
/// overwrites in place, last write wins.
#[async_trait]
pub trait ResultStore: Send + Sync {
    async fn put(&self, record: &ResultRecord) -> Result<(), StoreError>;
}
