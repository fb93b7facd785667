//! Inbound event shapes.
//!
//! Upload notifications arrive double-wrapped: the Lambda payload is an SNS
//! delivery envelope whose `Message` field is a JSON *string* holding the
//! actual S3 event. Decoding is therefore two distinct stages with distinct
//! error kinds: the outer envelope (`EnvelopeError`) and the forwarded S3
//! payload (`PayloadError`).

use serde::Deserialize;
use serde_json::Value;

use crate::errors::NotifyError;

/// Origin tag carried by EventBridge scheduled events.
pub const SCHEDULER_SOURCE: &str = "aws.events";

#[derive(Debug, Deserialize)]
pub struct UploadEnvelope {
    #[serde(rename = "Records")]
    pub records: Vec<ForwardedRecord>,
}

#[derive(Debug, Deserialize)]
pub struct ForwardedRecord {
    #[serde(rename = "Sns")]
    pub sns: SnsDelivery,
}

#[derive(Debug, Deserialize)]
pub struct SnsDelivery {
    #[serde(rename = "Message")]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct S3Event {
    #[serde(rename = "Records")]
    pub records: Vec<S3Record>,
}

#[derive(Debug, Deserialize)]
pub struct S3Record {
    pub s3: S3Entity,
}

#[derive(Debug, Deserialize)]
pub struct S3Entity {
    pub bucket: S3Bucket,
    pub object: S3Object,
}

#[derive(Debug, Deserialize)]
pub struct S3Bucket {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct S3Object {
    pub key: String,
}

impl UploadEnvelope {
    /// Stage-1 decode: the outer SNS delivery envelope.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError` if the payload does not match the expected
    /// `Records[].Sns.Message` shape.
    pub fn from_value(payload: &Value) -> Result<Self, NotifyError> {
        serde_json::from_value(payload.clone())
            .map_err(|e| NotifyError::EnvelopeError(e.to_string()))
    }
}

impl S3Event {
    /// Stage-2 decode: the S3 event forwarded inside a delivery's `Message`.
    ///
    /// # Errors
    ///
    /// Returns `PayloadError` if the forwarded string is not a valid S3
    /// event document.
    pub fn from_json(raw: &str) -> Result<Self, NotifyError> {
        serde_json::from_str(raw).map_err(|e| NotifyError::PayloadError(e.to_string()))
    }
}

/// True when the payload carries a non-empty `Records` array, i.e. claims
/// the upload-envelope shape.
#[must_use]
pub fn has_upload_records(payload: &Value) -> bool {
    matches!(payload.get("Records"), Some(Value::Array(records)) if !records.is_empty())
}

/// True when the payload is an EventBridge scheduled heartbeat. Any other
/// fields on the event are ignored.
#[must_use]
pub fn is_heartbeat(payload: &Value) -> bool {
    payload.get("source").and_then(Value::as_str) == Some(SCHEDULER_SOURCE)
}
