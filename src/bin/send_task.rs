use std::env;

use task_alerts::clients::SnsSink;
use task_alerts::sender;

/// Topic used when SNS_TOPIC_ARN is not set in the environment.
const DEFAULT_TOPIC_ARN: &str = "arn:aws:sns:us-east-2:172670236523:daily-tasks";

#[tokio::main]
async fn main() {
    task_alerts::setup_logging();

    let topic_arn = env::var("SNS_TOPIC_ARN").unwrap_or_else(|_| DEFAULT_TOPIC_ARN.to_string());
    let shared_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let sink = SnsSink::new(aws_sdk_sns::Client::new(&shared_config), topic_arn);

    sender::send_task_notification(
        &sink,
        "Complete AWS Project 1",
        "Implement the notification relay and push code to GitHub.",
    )
    .await;
}
