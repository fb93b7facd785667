use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Failed to parse event envelope: {0}")]
    EnvelopeError(String),

    #[error("Failed to parse forwarded notification payload: {0}")]
    PayloadError(String),

    #[error("Failed to publish notification: {0}")]
    PublishError(String),
}
