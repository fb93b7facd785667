//! Manual task-assignment sender.
//!
//! Best-effort by design: a publish failure is logged and swallowed so an
//! interactive caller never sees a crash.

use tracing::{error, info};

use crate::clients::NotificationSink;

/// Subject line for manually assigned tasks.
pub const TASK_ALERT_SUBJECT: &str = "Daily Task Alert";

/// Render the fixed task-assignment template.
#[must_use]
pub fn format_task_message(task_name: &str, details: &str) -> String {
    format!("NEW TASK ASSIGNED:\n\nTask: {task_name}\nDetails: {details}")
}

/// Publish a task assignment, logging the outcome either way.
pub async fn send_task_notification(sink: &dyn NotificationSink, task_name: &str, details: &str) {
    let message = format_task_message(task_name, details);

    match sink.publish(&message, TASK_ALERT_SUBJECT).await {
        Ok(receipt) => info!("Notification sent, message id: {}", receipt.message_id),
        Err(e) => error!("Failed to send task notification: {}", e),
    }
}
