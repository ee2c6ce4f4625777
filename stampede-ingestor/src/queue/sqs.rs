//! AWS SQS implementation of [`MessageSource`]

use async_trait::async_trait;
use aws_sdk_sqs::Client;
use std::time::Duration;
use tracing::{debug, warn};

use super::{MessageSource, QueueError, QueueMessage};

/// SQS-backed message source
#[derive(Debug, Clone)]
pub struct SqsMessageSource {
    client: Client,
    queue_url: String,
    dead_letter_queue_url: Option<String>,
}

impl SqsMessageSource {
    /// Creates a message source from a shared AWS configuration
    pub fn new(
        config: &aws_config::SdkConfig,
        queue_url: impl Into<String>,
        dead_letter_queue_url: Option<String>,
    ) -> Self {
        Self {
            client: Client::new(config),
            queue_url: queue_url.into(),
            dead_letter_queue_url,
        }
    }
}

#[async_trait]
impl MessageSource for SqsMessageSource {
    async fn receive(&self, max: usize, wait: Duration) -> Result<Vec<QueueMessage>, QueueError> {
        let response = self
            .client
            .receive_message()
            .queue_url(&self.queue_url)
            .max_number_of_messages(max as i32)
            .wait_time_seconds(wait.as_secs() as i32)
            .send()
            .await
            .map_err(|e| QueueError::ReceiveFailed(e.to_string()))?;

        let messages = response
            .messages
            .unwrap_or_default()
            .into_iter()
            .filter_map(|msg| {
                let message_id = msg.message_id.unwrap_or_default();
                match (msg.receipt_handle, msg.body) {
                    (Some(receipt_handle), Some(body)) => Some(QueueMessage {
                        message_id,
                        receipt_handle,
                        body,
                    }),
                    _ => {
                        // No receipt handle means no way to ever ack it;
                        // let the visibility timeout hand it back.
                        warn!("Skipping message {} without receipt or body", message_id);
                        None
                    }
                }
            })
            .collect::<Vec<_>>();

        debug!("Received {} message(s)", messages.len());
        Ok(messages)
    }

    async fn acknowledge(&self, msg: &QueueMessage) -> Result<(), QueueError> {
        self.client
            .delete_message()
            .queue_url(&self.queue_url)
            .receipt_handle(&msg.receipt_handle)
            .send()
            .await
            .map_err(|e| QueueError::AcknowledgeFailed(e.to_string()))?;

        Ok(())
    }

    async fn forward_dead_letter(&self, msg: &QueueMessage) -> Result<bool, QueueError> {
        let Some(dlq_url) = &self.dead_letter_queue_url else {
            return Ok(false);
        };

        self.client
            .send_message()
            .queue_url(dlq_url)
            .message_body(&msg.body)
            .send()
            .await
            .map_err(|e| QueueError::DeadLetterFailed(e.to_string()))?;

        // Forwarded; drop the original so it is not redelivered.
        self.acknowledge(msg).await?;

        Ok(true)
    }
}
