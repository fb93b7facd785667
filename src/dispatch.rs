//! Event dispatcher - classifies the inbound Lambda event and publishes the
//! matching notifications.
//!
//! Dispatch rules, first match wins:
//! - Non-empty `Records` array: one upload alert per forwarded S3 record
//!   (an envelope wrapping several records fans out to several publishes)
//! - `source == "aws.events"`: one fixed heartbeat message
//! - Anything else: no publish, logged and acknowledged as success

use lambda_runtime::{Error, LambdaEvent};
use serde_json::{Value, json};
use tracing::{info, warn};

use crate::clients::NotificationSink;
use crate::core::events::{S3Event, UploadEnvelope, has_upload_records, is_heartbeat};
use crate::errors::NotifyError;

pub use self::function_handler as handler;

/// Subject line for every scheduler-originated notification.
pub const UPDATE_SUBJECT: &str = "🌅 Task Scheduler Update";

/// Fixed body published for a scheduler heartbeat.
pub const HEARTBEAT_TEXT: &str =
    "⏰ AUTOMATED 2-MINUTE HEARTBEAT\nThe scheduler is running on standby.";

/// One notification ready to publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub body: String,
    pub subject: String,
}

impl OutboundMessage {
    #[must_use]
    pub fn upload_alert(bucket: &str, key: &str) -> Self {
        Self {
            body: format!("S3 UPLOAD ALERT\nFile: {key}\nBucket: {bucket}"),
            subject: UPDATE_SUBJECT.to_string(),
        }
    }

    #[must_use]
    pub fn heartbeat() -> Self {
        Self {
            body: HEARTBEAT_TEXT.to_string(),
            subject: UPDATE_SUBJECT.to_string(),
        }
    }
}

/// Classify an inbound payload into the notifications it calls for.
///
/// Pure: no publishing happens here. An unrecognized shape yields an empty
/// plan rather than an error, with a diagnostic log so dropped events stay
/// visible in CloudWatch.
///
/// # Errors
///
/// Returns `EnvelopeError` if a payload claiming the upload shape does not
/// decode, and `PayloadError` if a forwarded message string is not a valid
/// S3 event.
pub fn plan(payload: &Value) -> Result<Vec<OutboundMessage>, NotifyError> {
    if has_upload_records(payload) {
        let envelope = UploadEnvelope::from_value(payload)?;
        let mut messages = Vec::new();
        for record in &envelope.records {
            let forwarded = S3Event::from_json(&record.sns.message)?;
            for s3_record in &forwarded.records {
                messages.push(OutboundMessage::upload_alert(
                    &s3_record.s3.bucket.name,
                    &s3_record.s3.object.key,
                ));
            }
        }
        return Ok(messages);
    }

    if is_heartbeat(payload) {
        return Ok(vec![OutboundMessage::heartbeat()]);
    }

    warn!("Unrecognized event shape, no notification emitted");
    Ok(Vec::new())
}

/// Lambda handler for the dispatcher entrypoint.
///
/// Publishes each planned notification in order. The fan-out is not
/// transactional: a failed publish aborts the remainder and fails the
/// invocation, leaving earlier messages delivered.
///
/// # Errors
///
/// Propagates decode and publish failures to the Lambda runtime; the
/// trigger infrastructure is expected to log and alert on them.
#[tracing::instrument(level = "info", skip(event, sink))]
pub async fn function_handler(
    event: LambdaEvent<Value>,
    sink: &dyn NotificationSink,
) -> Result<Value, Error> {
    info!("Received event: {}", event.payload);

    for message in plan(&event.payload)? {
        let receipt = sink.publish(&message.body, &message.subject).await?;
        info!(message_id = %receipt.message_id, "Published notification");
    }

    Ok(json!({ "statusCode": 200 }))
}
