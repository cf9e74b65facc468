//! Health-check policy configuration.
//!
//! Only the policy lives here: which dependencies to probe, how often and for
//! how long. The probes themselves belong to the health-check runner.

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use validator::{self, Validate};

use crate::duration;
use crate::validation;

/// Health-check runner settings.
#[derive(Debug, Serialize, Deserialize, Validate, Clone, PartialEq)]
pub struct HealthCheckConfig {
    /// Run health checks at all?
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Per-check deadline.
    #[validate(custom(function = validation::validate_at_least_one_second))]
    #[serde(default = "default_timeout", with = "duration")]
    pub timeout: TimeDelta,

    /// Delay between rounds of checks.
    #[validate(custom(function = validation::validate_at_least_one_second))]
    #[serde(default = "default_interval", with = "duration")]
    pub interval: TimeDelta,

    /// Dependencies to probe, in order.
    #[validate(length(min = 1))]
    #[validate(custom(function = validation::validate_names))]
    #[serde(default = "default_checks")]
    pub checks: Vec<String>,
}

fn default_enabled() -> bool {
    true
}

fn default_timeout() -> TimeDelta {
    TimeDelta::seconds(5)
}

fn default_interval() -> TimeDelta {
    TimeDelta::seconds(30)
}

fn default_checks() -> Vec<String> {
    vec!["database".into(), "redis".into()]
}

impl Default for HealthCheckConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            timeout: default_timeout(),
            interval: default_interval(),
            checks: default_checks(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn valid_default_health_config() {
        let config = HealthCheckConfig::default();
        config.validate().expect("Default config should be valid");
    }

    #[test]
    fn sub_second_timeout_is_rejected() {
        let mut config = HealthCheckConfig::default();
        config.timeout = TimeDelta::milliseconds(500);
        let errors = config.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("timeout"));
    }

    #[test]
    fn empty_check_list_is_rejected() {
        let mut config = HealthCheckConfig::default();
        config.checks.clear();
        let errors = config.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("checks"));
    }
}
