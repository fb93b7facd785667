use lambda_runtime::{Error, run, service_fn};
use task_alerts::clients::SnsSink;
use task_alerts::core::config::AppConfig;
use task_alerts::dispatch::handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    task_alerts::setup_logging();

    let config = AppConfig::from_env().map_err(Error::from)?;
    let shared_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let sink = SnsSink::new(aws_sdk_sns::Client::new(&shared_config), config.topic_arn);

    let sink = &sink;
    run(service_fn(move |event| async move {
        handler(event, sink).await
    }))
    .await
}
