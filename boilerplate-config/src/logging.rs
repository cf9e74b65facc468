//! Logging configuration.
//!
//! The level is kept as its wire string so that an unknown value can be reported
//! by validation; [`LogLevel`] is the parsed form handed to the logger.

use std::fmt;
use std::str::FromStr;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use validator::{self, Validate};

use crate::duration;
use crate::text;
use crate::ConfigError;

/// Log output configuration.
#[derive(Debug, Serialize, Deserialize, Validate, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Minimum level emitted (debug, info, warn, error).
    #[serde(default = "default_level", deserialize_with = "text::deserialize")]
    pub level: String,

    /// Output encoding, e.g. `json` or `text`.
    #[validate(length(min = 1))]
    #[serde(default = "default_format", deserialize_with = "text::deserialize")]
    pub format: String,

    /// Queries slower than this are reported.
    #[serde(default = "default_slow_query_threshold", with = "duration")]
    pub slow_query_threshold: TimeDelta,
}

fn default_level() -> String {
    LogLevel::Info.to_string()
}

fn default_format() -> String {
    "json".into()
}

fn default_slow_query_threshold() -> TimeDelta {
    TimeDelta::milliseconds(100)
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
            slow_query_threshold: default_slow_query_threshold(),
        }
    }
}

impl LoggingConfig {
    /// The configured level as a closed variant.
    pub fn parsed_level(&self) -> Result<LogLevel, ConfigError> {
        self.level.parse()
    }
}

/// Log severity accepted by `logging.level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Wire names, in increasing severity.
    pub const NAMES: &'static [&'static str] = &["debug", "info", "warn", "error"];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    /// Exact, case-sensitive match against [`LogLevel::NAMES`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            other => Err(ConfigError::InvalidEnum {
                field: "logging.level",
                value: other.to_string(),
                allowed: LogLevel::NAMES,
            }),
        }
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names_parse_back() {
        for name in LogLevel::NAMES {
            let level: LogLevel = name.parse().unwrap();
            assert_eq!(level.as_str(), *name);
        }
    }

    #[test]
    fn level_parsing_is_case_sensitive() {
        assert!(matches!(
            "INFO".parse::<LogLevel>(),
            Err(ConfigError::InvalidEnum { field: "logging.level", .. })
        ));
        assert!("warning".parse::<LogLevel>().is_err());
        assert!("".parse::<LogLevel>().is_err());
    }

    #[test]
    fn levels_order_by_severity() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Warn < LogLevel::Error);
        assert_eq!(tracing::Level::from(LogLevel::Warn), tracing::Level::WARN);
    }

    #[test]
    fn parsed_level_reads_configured_value() {
        let mut config = LoggingConfig::default();
        assert_eq!(config.parsed_level().unwrap(), LogLevel::Info);
        config.level = "verbose".into();
        assert!(config.parsed_level().is_err());
    }
}
