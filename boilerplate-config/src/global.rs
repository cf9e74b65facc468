//! Process-wide publication of the validated configuration.
//!
//! The configuration is built once on the startup thread and read everywhere
//! else. `OnceCell` gives the store release semantics and every read acquire
//! semantics, so readers never observe a partially written value.

use once_cell::sync::OnceCell;

use crate::{ConfigError, ObservabilityConfig};

static CONFIG: OnceCell<ObservabilityConfig> = OnceCell::new();

/// Validates `config` and publishes it. Only the first successful call wins.
pub fn install(config: ObservabilityConfig) -> Result<&'static ObservabilityConfig, ConfigError> {
    config.validate()?;
    let installed = CONFIG
        .try_insert(config)
        .map_err(|_| ConfigError::AlreadyInstalled)?;
    tracing::info!(
        service = %installed.service_name,
        environment = %installed.environment,
        "observability configuration installed"
    );
    Ok(installed)
}

/// The published configuration, if [`install`] has succeeded.
pub fn get() -> Option<&'static ObservabilityConfig> {
    CONFIG.get()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test: the cell is shared by the whole test binary.
    #[test]
    fn install_publishes_once() {
        let mut invalid = ObservabilityConfig::default();
        invalid.service_name.clear();
        assert!(matches!(
            install(invalid),
            Err(ConfigError::MissingField("service_name"))
        ));
        assert!(get().is_none());

        let mut config = ObservabilityConfig::default();
        config.service_name = "orders".into();
        let installed = install(config).expect("first install succeeds");
        assert_eq!(installed.service_name, "orders");

        assert!(matches!(
            install(ObservabilityConfig::default()),
            Err(ConfigError::AlreadyInstalled)
        ));
        assert_eq!(get().map(|c| c.service_name.as_str()), Some("orders"));
    }
}
