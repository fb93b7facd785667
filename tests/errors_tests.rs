use std::error::Error;
use task_alerts::errors::NotifyError;

#[test]
fn test_notify_error_implements_error_trait() {
    // Verify NotifyError implements the Error trait
    fn assert_error<T: Error>(_: &T) {}

    let error = NotifyError::EnvelopeError("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_notify_error_display() {
    // Verify Display implementation works correctly
    let error = NotifyError::EnvelopeError("missing field `Sns`".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to parse event envelope: missing field `Sns`"
    );

    let error = NotifyError::PayloadError("expected value at line 1".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to parse forwarded notification payload: expected value at line 1"
    );

    let error = NotifyError::PublishError("AuthorizationError".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to publish notification: AuthorizationError"
    );
}
