use boilerplate_config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to install log subscriber: {0}")]
    Subscriber(String),
}
