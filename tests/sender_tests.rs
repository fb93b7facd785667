use std::sync::Mutex;

use async_trait::async_trait;
use task_alerts::NotifyError;
use task_alerts::clients::{NotificationSink, PublishReceipt};
use task_alerts::sender::{TASK_ALERT_SUBJECT, format_task_message, send_task_notification};

#[derive(Default)]
struct RecordingSink {
    published: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl NotificationSink for RecordingSink {
    async fn publish(&self, message: &str, subject: &str) -> Result<PublishReceipt, NotifyError> {
        self.published
            .lock()
            .unwrap()
            .push((message.to_string(), subject.to_string()));
        Ok(PublishReceipt {
            message_id: "test-message-id".to_string(),
        })
    }
}

struct FailingSink;

#[async_trait]
impl NotificationSink for FailingSink {
    async fn publish(&self, _message: &str, _subject: &str) -> Result<PublishReceipt, NotifyError> {
        Err(NotifyError::PublishError("topic does not exist".to_string()))
    }
}

#[test]
fn task_message_matches_the_template_exactly() {
    assert_eq!(
        format_task_message("T", "D"),
        "NEW TASK ASSIGNED:\n\nTask: T\nDetails: D"
    );
}

#[tokio::test]
async fn sends_one_message_with_the_task_subject() {
    let sink = RecordingSink::default();

    send_task_notification(&sink, "Complete AWS Project 1", "Push code to GitHub.").await;

    let published = sink.published.lock().unwrap();
    assert_eq!(published.len(), 1);
    assert_eq!(
        published[0].0,
        "NEW TASK ASSIGNED:\n\nTask: Complete AWS Project 1\nDetails: Push code to GitHub."
    );
    assert_eq!(published[0].1, TASK_ALERT_SUBJECT);
}

#[tokio::test]
async fn publish_failure_is_swallowed() {
    // Best-effort policy: the sender logs the error and returns normally.
    send_task_notification(&FailingSink, "T", "D").await;
}
