//! # Boilerplate Observability Configuration
//!
//! Typed observability settings for a Boilerplate service: identity, logging,
//! the external monitoring agent and health-check policy.
//!
//! ## Features
//! - **Defaults**: a complete baseline via [`ObservabilityConfig::default`]
//! - **Layered loading**: defaults, YAML files and `BOILERPLATE_*` environment
//!   variables merged with `figment`
//! - **Two-stage checking**: structural annotations (required fields, minimum
//!   durations) checked by the loader, semantic rules checked by
//!   [`ObservabilityConfig::validate`]
//! - **Environment awareness**: log level fallback per environment

#![warn(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::path::Path;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub mod duration;
mod error;
pub mod global;
mod health;
mod logging;
mod new_relic;
mod provider;
mod text;
mod validation;

pub use error::ConfigError;
pub use health::HealthCheckConfig;
pub use logging::LogLevel;
pub use logging::LoggingConfig;
pub use new_relic::ExternalMonitoringConfig;
pub use provider::ConfigLoader;
pub use provider::ConfigProvider;
pub use provider::FileProvider;

pub const PRODUCTION: &str = "production";
pub const DEVELOPMENT: &str = "development";

/// Top-level observability configuration.
#[derive(Debug, Serialize, Deserialize, Validate, Clone, PartialEq)]
pub struct ObservabilityConfig {
    /// Name reported by logs, traces and health endpoints.
    #[validate(length(min = 1))]
    #[serde(default = "default_service_name", deserialize_with = "text::deserialize")]
    pub service_name: String,

    /// Deployment environment, usually `development` or `production`.
    #[validate(length(min = 1))]
    #[serde(default = "default_environment", deserialize_with = "text::deserialize")]
    pub environment: String,

    /// Log output settings.
    #[validate(nested)]
    #[serde(default)]
    pub logging: LoggingConfig,

    /// External monitoring agent settings.
    #[validate(nested)]
    #[serde(default, rename = "new_relic")]
    pub error_tracking: ExternalMonitoringConfig,

    /// Health-check policy.
    #[validate(nested)]
    #[serde(default, rename = "health_check")]
    pub health_checks: HealthCheckConfig,
}

fn default_service_name() -> String {
    "boilerplate".into()
}

fn default_environment() -> String {
    DEVELOPMENT.into()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            environment: default_environment(),
            logging: LoggingConfig::default(),
            error_tracking: ExternalMonitoringConfig::default(),
            health_checks: HealthCheckConfig::default(),
        }
    }
}

impl ObservabilityConfig {
    /// Load configuration from `config/` and the environment.
    ///
    /// See [`ConfigLoader`] for the layer order.
    pub fn load() -> Result<Self, ConfigError> {
        ConfigLoader::new().load()
    }

    /// Load configuration from a single YAML file overlaid on defaults.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::from_provider(&FileProvider::new(path))
    }

    /// Extract from any provider, then run both the structural and the semantic checks.
    pub fn from_provider<P: ConfigProvider + ?Sized>(provider: &P) -> Result<Self, ConfigError> {
        let config: Self = provider.figment()?.extract()?;
        config.validate_schema()?;
        config.validate()?;
        tracing::info!(
            service = %config.service_name,
            environment = %config.environment,
            level = config.effective_log_level(),
            "observability configuration loaded"
        );
        Ok(config)
    }

    /// Structural checks declared on the schema: required fields and minimum
    /// durations. Run by the loader; [`validate`](Self::validate) does not repeat them.
    pub fn validate_schema(&self) -> Result<(), ConfigError> {
        Validate::validate(self).map_err(ConfigError::from)
    }

    /// Semantic checks, fail-fast in this order:
    /// 1. `service_name` is non-empty
    /// 2. `logging.level` is one of debug, info, warn, error
    /// 3. `logging.slow_query_threshold` is not negative
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.service_name.is_empty() {
            return Err(ConfigError::MissingField("service_name"));
        }

        self.logging.parsed_level()?;

        if self.logging.slow_query_threshold < TimeDelta::zero() {
            return Err(ConfigError::OutOfRange("logging.slow_query_threshold"));
        }

        Ok(())
    }

    /// The level the logger should use.
    ///
    /// A configured level is returned as is. An empty one falls back to `debug`
    /// in development and `info` everywhere else.
    pub fn effective_log_level(&self) -> &str {
        if !self.logging.level.is_empty() {
            return &self.logging.level;
        }
        match self.environment.as_str() {
            DEVELOPMENT => LogLevel::Debug.as_str(),
            _ => LogLevel::Info.as_str(),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == PRODUCTION
    }

    pub fn is_development(&self) -> bool {
        self.environment == DEVELOPMENT
    }
}
