//! Configuration providers for loading observability configuration from layered sources.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};

use crate::{ConfigError, ObservabilityConfig};

pub const DEFAULT_CONFIG_DIR: &str = "config";
pub const DEFAULT_ENV_PREFIX: &str = "BOILERPLATE_";
pub const BASE_FILE: &str = "observability.yaml";
pub const DEFAULT_PROFILE: &str = "development";

/// Trait for loading observability configuration from different sources.
pub trait ConfigProvider {
    /// Builds the merged, not yet extracted, configuration.
    fn figment(&self) -> Result<Figment, ConfigError>;
}

/// Layered loader.
///
/// Hierarchy (later layers win):
/// 1. Default values
/// 2. `<dir>/observability.yaml`, skipped if missing
/// 3. `<dir>/<profile>.yaml`, where the profile comes from `<PREFIX>ENV`
///    (default `development`), skipped if missing
/// 4. `<PREFIX>*` environment variables, nested with `__`
///    (e.g. `BOILERPLATE_LOGGING__LEVEL=debug`)
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_dir: PathBuf,
    env_prefix: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            env_prefix: DEFAULT_ENV_PREFIX.into(),
        }
    }

    /// Directory holding `observability.yaml` and the profile overlays.
    pub fn config_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.config_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Prefix of the environment variables that override file values.
    pub fn env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Profile overlay selected by `<PREFIX>ENV`.
    pub fn profile(&self) -> String {
        std::env::var(format!("{}ENV", self.env_prefix))
            .ok()
            .filter(|profile| !profile.is_empty())
            .unwrap_or_else(|| DEFAULT_PROFILE.into())
    }

    /// Load, check the schema annotations, then validate.
    pub fn load(&self) -> Result<ObservabilityConfig, ConfigError> {
        ObservabilityConfig::from_provider(self)
    }
}

impl ConfigProvider for ConfigLoader {
    fn figment(&self) -> Result<Figment, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(ObservabilityConfig::default()));

        let base = self.config_dir.join(BASE_FILE);
        if base.exists() {
            figment = figment.merge(Yaml::file(&base));
        } else {
            tracing::debug!(path = %base.display(), "base configuration not found, using defaults");
        }

        let profile = self.profile();
        let overlay = self.config_dir.join(format!("{profile}.yaml"));
        if overlay.exists() {
            figment = figment.merge(Yaml::file(&overlay));
        } else {
            tracing::debug!(path = %overlay.display(), %profile, "no profile overlay");
        }

        Ok(merge_env(figment, &self.env_prefix))
    }
}

/// A single YAML file overlaid on defaults, with environment overrides.
#[derive(Debug, Clone)]
pub struct FileProvider {
    path: PathBuf,
}

impl FileProvider {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ConfigProvider for FileProvider {
    fn figment(&self) -> Result<Figment, ConfigError> {
        if !self.path.exists() {
            return Err(ConfigError::FileNotFound(self.path.clone()));
        }

        let figment = Figment::from(Serialized::defaults(ObservabilityConfig::default()))
            .merge(Yaml::file(&self.path));
        Ok(merge_env(figment, DEFAULT_ENV_PREFIX))
    }
}

/// Keys of string fields. Their environment values are taken verbatim, so a
/// license key like `0123456789` keeps its leading zero.
const TEXT_KEYS: &[&str] = &[
    "service_name",
    "environment",
    "logging.level",
    "logging.format",
    "new_relic.license_key",
];

/// Prefixed environment variables, nested on `__`. `<PREFIX>ENV` selects the
/// profile and is not a configuration key.
fn merge_env(figment: Figment, prefix: &str) -> Figment {
    let figment = figment.merge(Env::prefixed(prefix).ignore(&["env"]).split("__"));
    TEXT_KEYS.iter().fold(figment, |figment, key| {
        let name = format!("{}{}", prefix, key.replace('.', "__"));
        match env_text(&name) {
            Some(value) => figment.merge(Serialized::default(key, value)),
            None => figment,
        }
    })
}

/// Case-insensitive lookup, matching how `Env` reads its keys.
fn env_text(name: &str) -> Option<String> {
    std::env::vars()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value)
}
