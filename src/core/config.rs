use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub topic_arn: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            topic_arn: env::var("SNS_TOPIC_ARN").map_err(|e| format!("SNS_TOPIC_ARN: {}", e))?,
        })
    }
}
