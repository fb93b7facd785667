/// task-alerts - a notification relay that forwards scheduler and upload
/// events to an SNS topic.
///
/// This crate implements two entry points over one shared library:
/// 1. A Lambda handler that classifies incoming events (S3 uploads forwarded
///    through SNS, or EventBridge heartbeats) and publishes one formatted
///    alert per matched record
/// 2. A `send-task` CLI that publishes an ad-hoc task-assignment message to
///    the same topic, best-effort
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution
/// - SNS as the outbound notification topic
/// - Tokio for async runtime
///
/// The SNS client is constructed once at process start and passed into the
/// handler as a `NotificationSink`, so tests can substitute a recording
/// double.
///
/// # Example
///
/// ```no_run
/// use task_alerts::clients::SnsSink;
/// use task_alerts::core::config::AppConfig;
/// use task_alerts::sender;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     task_alerts::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let shared_config =
///         aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
///     let sink = SnsSink::new(aws_sdk_sns::Client::new(&shared_config), config.topic_arn);
///
///     sender::send_task_notification(&sink, "Review PR", "See the open review queue.").await;
///     Ok(())
/// }
/// ```
// Module declarations
pub mod clients;
pub mod core;
pub mod dispatch;
pub mod errors;
pub mod sender;

pub use errors::NotifyError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called at the start of each
/// binary.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
