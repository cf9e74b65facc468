//! Error-tracking and APM agent configuration (`new_relic` section).

use serde::{Deserialize, Serialize};
use validator::{self, Validate};

use crate::text;

/// External monitoring agent settings.
#[derive(Debug, Serialize, Deserialize, Validate, Clone, PartialEq)]
pub struct ExternalMonitoringConfig {
    /// Agent license key. Required by the loader, empty in defaults.
    #[validate(length(min = 1, message = "license_key is required"))]
    #[serde(default, deserialize_with = "text::deserialize")]
    pub license_key: String,

    /// Forward application logs to the agent.
    #[serde(default = "default_true")]
    pub app_log_forwarding_enabled: bool,

    /// Propagate distributed trace context.
    #[serde(default = "default_true")]
    pub distributed_tracing_enabled: bool,

    /// Verbose agent-side logging.
    #[serde(default)]
    pub debug_logging: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ExternalMonitoringConfig {
    fn default() -> Self {
        Self {
            license_key: String::new(),
            app_log_forwarding_enabled: default_true(),
            distributed_tracing_enabled: default_true(),
            debug_logging: false,
        }
    }
}
