//! AWS DynamoDB implementation of [`ResultStore`]
//!
//! One item per completed test, keyed by `testId`. `PutItem` gives the
//! idempotent-upsert semantics the pipeline relies on, and the table's
//! TTL attribute (`ttl`) purges records once the retention deadline
//! passes. Numeric attributes are written as canonical decimal strings,
//! never through binary floats.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;
use tracing::debug;

use stampede_core::domain::result::ResultRecord;

use super::{ResultStore, StoreError};

/// DynamoDB-backed result store
#[derive(Debug, Clone)]
pub struct DynamoResultStore {
    client: Client,
    table_name: String,
}

impl DynamoResultStore {
    /// Creates a store from a shared AWS configuration
    pub fn new(config: &aws_config::SdkConfig, table_name: impl Into<String>) -> Self {
        Self {
            client: Client::new(config),
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl ResultStore for DynamoResultStore {
    async fn put(&self, record: &ResultRecord) -> Result<(), StoreError> {
        let response = self
            .client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item_for(record)))
            .send()
            .await
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;

        debug!(
            "Stored result for test {} (consumed capacity: {:?})",
            record.test_id,
            response.consumed_capacity().map(|c| c.capacity_units())
        );

        Ok(())
    }
}

/// Maps a record onto the stored item schema
fn item_for(record: &ResultRecord) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (
            "testId".to_string(),
            AttributeValue::S(record.test_id.clone()),
        ),
        (
            "timestamp".to_string(),
            AttributeValue::N(record.captured_at_epoch.to_string()),
        ),
        (
            "totalDuration".to_string(),
            AttributeValue::N(record.total_duration.to_string()),
        ),
        (
            "successfulRequests".to_string(),
            AttributeValue::N(record.successful_requests.to_string()),
        ),
        (
            "failedRequests".to_string(),
            AttributeValue::N(record.failed_requests.to_string()),
        ),
        (
            "transactionsPerSecond".to_string(),
            AttributeValue::N(record.transactions_per_second.to_string()),
        ),
        (
            "testDate".to_string(),
            AttributeValue::S(record.test_date_iso.clone()),
        ),
        (
            "ttl".to_string(),
            AttributeValue::N(record.expires_at_epoch.to_string()),
        ),
        (
            "targetUrl".to_string(),
            AttributeValue::S(record.target_url.clone()),
        ),
        (
            "status".to_string(),
            AttributeValue::S(record.status.clone()),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use stampede_core::dto::message::CompletionMessage;

    fn record() -> ResultRecord {
        let msg: CompletionMessage = serde_json::from_str(
            r#"{"testId":"t1","duration":60,"successfulRequests":1000,
                "failedRequests":5,"tps":16.7,"targetUrl":"https://x"}"#,
        )
        .unwrap();
        ResultRecord::from_message(msg, Utc::now())
    }

    #[test]
    fn test_item_schema() {
        let record = record();
        let item = item_for(&record);

        assert_eq!(item["testId"], AttributeValue::S("t1".to_string()));
        assert_eq!(item["totalDuration"], AttributeValue::N("60".to_string()));
        assert_eq!(
            item["successfulRequests"],
            AttributeValue::N("1000".to_string())
        );
        assert_eq!(item["failedRequests"], AttributeValue::N("5".to_string()));
        assert_eq!(
            item["transactionsPerSecond"],
            AttributeValue::N("16.7".to_string())
        );
        assert_eq!(item["targetUrl"], AttributeValue::S("https://x".to_string()));
        assert_eq!(item["status"], AttributeValue::S("completed".to_string()));
        assert_eq!(
            item["ttl"],
            AttributeValue::N(record.expires_at_epoch.to_string())
        );
        assert_eq!(item.len(), 10);
    }

    #[test]
    fn test_numeric_attributes_keep_decimal_precision() {
        let msg: CompletionMessage =
            serde_json::from_str(r#"{"testId":"t2","duration":0.1,"tps":123456.789}"#).unwrap();
        let item = item_for(&ResultRecord::from_message(msg, Utc::now()));

        assert_eq!(item["totalDuration"], AttributeValue::N("0.1".to_string()));
        assert_eq!(
            item["transactionsPerSecond"],
            AttributeValue::N("123456.789".to_string())
        );
    }
}
