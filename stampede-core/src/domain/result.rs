//! Result domain types
//!
//! A [`ResultRecord`] is the durable, canonical form of one finished
//! load test, keyed by `test_id`. Writing the same key twice overwrites
//! in place, which keeps at-least-once queue delivery safe.

use chrono::{DateTime, SecondsFormat, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dto::message::CompletionMessage;

/// Retention period for stored results: 90 days, in seconds
pub const RETENTION_SECONDS: i64 = 90 * 24 * 60 * 60;

/// Every record this pipeline writes is a finished test; no partial or
/// running states are modeled.
pub const STATUS_COMPLETED: &str = "completed";

/// Durable record of one completed load test
///
/// Metric fields that carry fractional values use [`Decimal`] so stored
/// numbers never pass through binary floating point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Primary key in the result store
    pub test_id: String,
    /// Ingestion time, epoch seconds
    pub captured_at_epoch: i64,
    pub total_duration: Decimal,
    pub successful_requests: u64,
    pub failed_requests: u64,
    pub transactions_per_second: Decimal,
    /// Ingestion time as an ISO-8601 / RFC 3339 UTC timestamp
    pub test_date_iso: String,
    /// `captured_at_epoch + RETENTION_SECONDS`; the store purges the
    /// record once this deadline passes
    pub expires_at_epoch: i64,
    pub target_url: String,
    pub status: String,
}

impl ResultRecord {
    /// Normalizes a completion message into a durable record
    ///
    /// Absent metric fields default to zero; an absent `testId` gets a
    /// collision-resistant synthesized key (`test-<uuid>`), so duplicate
    /// keys can only come from the worker itself.
    pub fn from_message(msg: CompletionMessage, now: DateTime<Utc>) -> Self {
        let captured_at_epoch = now.timestamp();

        Self {
            test_id: msg
                .test_id
                .unwrap_or_else(|| format!("test-{}", Uuid::new_v4())),
            captured_at_epoch,
            total_duration: msg.duration.unwrap_or(Decimal::ZERO),
            successful_requests: msg.successful_requests.unwrap_or(0),
            failed_requests: msg.failed_requests.unwrap_or(0),
            transactions_per_second: msg.tps.unwrap_or(Decimal::ZERO),
            test_date_iso: now.to_rfc3339_opts(SecondsFormat::Micros, true),
            expires_at_epoch: captured_at_epoch + RETENTION_SECONDS,
            target_url: msg.target_url.unwrap_or_default(),
            status: STATUS_COMPLETED.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_message() -> CompletionMessage {
        CompletionMessage {
            test_id: None,
            target_url: None,
            duration: None,
            successful_requests: None,
            failed_requests: None,
            tps: None,
        }
    }

    #[test]
    fn test_expiry_is_exactly_ninety_days() {
        let now = Utc::now();
        let record = ResultRecord::from_message(empty_message(), now);
        assert_eq!(record.expires_at_epoch - record.captured_at_epoch, 7_776_000);
    }

    #[test]
    fn test_defaults_for_absent_fields() {
        let record = ResultRecord::from_message(empty_message(), Utc::now());
        assert_eq!(record.total_duration, Decimal::ZERO);
        assert_eq!(record.transactions_per_second, Decimal::ZERO);
        assert_eq!(record.successful_requests, 0);
        assert_eq!(record.failed_requests, 0);
        assert_eq!(record.target_url, "");
        assert_eq!(record.status, STATUS_COMPLETED);
    }

    #[test]
    fn test_synthesized_ids_are_unique() {
        let now = Utc::now();
        let a = ResultRecord::from_message(empty_message(), now);
        let b = ResultRecord::from_message(empty_message(), now);
        assert!(a.test_id.starts_with("test-"));
        assert!(b.test_id.starts_with("test-"));
        assert_ne!(a.test_id, b.test_id);
    }

    #[test]
    fn test_provided_id_is_kept() {
        let mut msg = empty_message();
        msg.test_id = Some("t1".to_string());
        let record = ResultRecord::from_message(msg, Utc::now());
        assert_eq!(record.test_id, "t1");
    }

    #[test]
    fn test_metrics_carried_exactly() {
        let mut msg = empty_message();
        msg.duration = Some("33.333".parse().unwrap());
        msg.tps = Some("16.7".parse().unwrap());
        msg.successful_requests = Some(1000);
        msg.failed_requests = Some(5);

        let record = ResultRecord::from_message(msg, Utc::now());
        assert_eq!(record.total_duration.to_string(), "33.333");
        assert_eq!(record.transactions_per_second.to_string(), "16.7");
        assert_eq!(record.successful_requests, 1000);
        assert_eq!(record.failed_requests, 5);
    }
}
