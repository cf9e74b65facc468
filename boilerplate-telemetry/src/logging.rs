//! Structured logging driven by the observability configuration.
//!
//! `RUST_LOG` still takes precedence over the configured level so operators can
//! raise verbosity without touching configuration files.

use boilerplate_config::{LogLevel, ObservabilityConfig};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, EnvFilter};

use crate::TelemetryError;

/// Output encoding selected by `logging.format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Text,
}

impl LogFormat {
    /// `json` (any case) selects JSON lines; anything else is human-readable text.
    pub fn from_config(format: &str) -> Self {
        if format.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

#[derive(Clone)]
pub struct EventLogger;

impl EventLogger {
    /// Installs the global subscriber. Fails if the configured level is not
    /// recognised or a subscriber is already installed.
    pub fn init(config: &ObservabilityConfig) -> Result<LogLevel, TelemetryError> {
        let level: LogLevel = config.effective_log_level().parse()?;
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::default().add_directive(level_filter(level).into()));

        let installed = match LogFormat::from_config(&config.logging.format) {
            LogFormat::Json => fmt()
                .json()
                .with_env_filter(filter)
                .with_thread_names(true)
                .try_init(),
            LogFormat::Text => fmt()
                .with_env_filter(filter)
                .with_thread_names(true)
                .try_init(),
        };
        installed.map_err(|e| TelemetryError::Subscriber(e.to_string()))?;

        tracing::info!(
            service = %config.service_name,
            environment = %config.environment,
            %level,
            format = %config.logging.format,
            "logging initialised"
        );
        Ok(level)
    }
}

/// Maximum verbosity for a configured level.
pub fn level_filter(level: LogLevel) -> LevelFilter {
    LevelFilter::from_level(level.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_filter_matches_configured_level() {
        assert_eq!(level_filter(LogLevel::Debug), LevelFilter::DEBUG);
        assert_eq!(level_filter(LogLevel::Error), LevelFilter::ERROR);
        assert!(level_filter(LogLevel::Warn) < level_filter(LogLevel::Info));
    }

    #[test]
    fn json_format_is_case_insensitive() {
        assert_eq!(LogFormat::from_config("json"), LogFormat::Json);
        assert_eq!(LogFormat::from_config("JSON"), LogFormat::Json);
    }

    #[test]
    fn other_formats_fall_back_to_text() {
        assert_eq!(LogFormat::from_config("text"), LogFormat::Text);
        assert_eq!(LogFormat::from_config("pretty"), LogFormat::Text);
        assert_eq!(LogFormat::from_config(""), LogFormat::Text);
    }
}
