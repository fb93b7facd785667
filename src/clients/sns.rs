use async_trait::async_trait;
use aws_sdk_sns::Client as SnsClient;

use crate::errors::NotifyError;

/// Receipt returned by the notification service for a published message.
#[derive(Debug, Clone)]
pub struct PublishReceipt {
    pub message_id: String,
}

/// Destination for outbound notifications.
///
/// Implemented by [`SnsSink`] in production and by recording doubles in
/// tests. Each call is at-most-once: there is no retry or idempotency key
/// at this layer.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// # Errors
    ///
    /// Returns `PublishError` when the notification service rejects the
    /// call (bad topic, permission denied, throttling, malformed arguments).
    async fn publish(&self, message: &str, subject: &str) -> Result<PublishReceipt, NotifyError>;
}

/// Thin wrapper around SNS `Publish`, pinned to one topic ARN.
pub struct SnsSink {
    client: SnsClient,
    topic_arn: String,
}

impl SnsSink {
    #[must_use]
    pub fn new(client: SnsClient, topic_arn: String) -> Self {
        Self { client, topic_arn }
    }
}

#[async_trait]
impl NotificationSink for SnsSink {
    async fn publish(&self, message: &str, subject: &str) -> Result<PublishReceipt, NotifyError> {
        let output = self
            .client
            .publish()
            .topic_arn(&self.topic_arn)
            .message(message)
            .subject(subject)
            .send()
            .await
            .map_err(|e| NotifyError::PublishError(format!("Failed to publish to SNS: {e}")))?;

        Ok(PublishReceipt {
            message_id: output.message_id().unwrap_or_default().to_string(),
        })
    }
}
