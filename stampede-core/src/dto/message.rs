//! Completion message wire type

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Completion event emitted by a worker task after its test finishes
///
/// Every field is optional; workers from older images may omit metrics.
/// Unknown fields are tolerated since the worker image evolves
/// independently of this pipeline.
///
/// `duration` and `tps` deserialize into [`Decimal`] so fractional metrics
/// keep their exact decimal value end to end.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionMessage {
    #[serde(default)]
    pub test_id: Option<String>,
    #[serde(default)]
    pub target_url: Option<String>,
    /// Total test duration in seconds
    #[serde(default)]
    pub duration: Option<Decimal>,
    #[serde(default)]
    pub successful_requests: Option<u64>,
    #[serde(default)]
    pub failed_requests: Option<u64>,
    /// Transactions per second
    #[serde(default)]
    pub tps: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_message_decodes() {
        let msg: CompletionMessage = serde_json::from_str(
            r#"{"testId":"t1","duration":60,"successfulRequests":1000,
                "failedRequests":5,"tps":16.7,"targetUrl":"https://x"}"#,
        )
        .unwrap();
        assert_eq!(msg.test_id.as_deref(), Some("t1"));
        assert_eq!(msg.duration.unwrap().to_string(), "60");
        assert_eq!(msg.successful_requests, Some(1000));
        assert_eq!(msg.failed_requests, Some(5));
        assert_eq!(msg.tps.unwrap().to_string(), "16.7");
        assert_eq!(msg.target_url.as_deref(), Some("https://x"));
    }

    #[test]
    fn test_empty_message_decodes() {
        let msg: CompletionMessage = serde_json::from_str("{}").unwrap();
        assert!(msg.test_id.is_none());
        assert!(msg.duration.is_none());
        assert!(msg.tps.is_none());
    }

    #[test]
    fn test_unknown_fields_tolerated() {
        let msg: CompletionMessage =
            serde_json::from_str(r#"{"testId":"t2","workerVersion":"1.4.0"}"#).unwrap();
        assert_eq!(msg.test_id.as_deref(), Some("t2"));
    }

    #[test]
    fn test_fractional_metrics_keep_precision() {
        for input in ["0.1", "33.333", "123456.789"] {
            let body = format!(r#"{{"tps":{input},"duration":{input}}}"#);
            let msg: CompletionMessage = serde_json::from_str(&body).unwrap();
            assert_eq!(msg.tps.unwrap().to_string(), input);
            assert_eq!(msg.duration.unwrap().to_string(), input);
        }
    }
}
