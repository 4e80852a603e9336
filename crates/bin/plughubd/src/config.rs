//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `plughub.toml` in the working directory, or at the path given
//! by `PLUGHUB_CONFIG`. Every field has a sensible default so the file is
//! optional. Environment variables take precedence over file values.

use plughub_adapter_virtual::VirtualConfig;
use plughub_domain::id::{EntityId, split_entity_id};
use serde::Deserialize;

const DEFAULT_PATH: &str = "plughub.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Domains set up at startup.
    pub components: ComponentsConfig,
    /// Simulated devices.
    #[serde(rename = "virtual")]
    pub virtual_devices: VirtualConfig,
    /// Actions run once the components are set up.
    pub startup: StartupConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Which component domains to set up.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ComponentsConfig {
    pub enabled: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StartupConfig {
    /// Entity ids to turn on after setup.
    pub turn_on: Vec<String>,
}

impl Config {
    /// Load configuration from `plughub.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// result does not validate.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("PLUGHUB_CONFIG").unwrap_or_else(|_| DEFAULT_PATH.to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("PLUGHUB_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for raw in &self.startup.turn_on {
            split_entity_id(raw).map_err(|err| {
                ConfigError::Validation(format!("startup.turn_on: {err}"))
            })?;
        }
        let virtual_ids = [
            ("lights", "light", &self.virtual_devices.lights),
            ("switches", "switch", &self.virtual_devices.switches),
            ("sensors", "sensor", &self.virtual_devices.sensors),
        ];
        for (key, domain, object_ids) in virtual_ids {
            for object_id in object_ids {
                EntityId::from_parts(domain, object_id)
                    .map_err(|err| ConfigError::Validation(format!("virtual.{key}: {err}")))?;
            }
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "plughubd=info,plughub_app=info,plughub_adapter_virtual=info".to_string(),
        }
    }
}

impl Default for ComponentsConfig {
    fn default() -> Self {
        Self {
            enabled: vec![
                "light".to_string(),
                "switch".to_string(),
                "sensor".to_string(),
            ],
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
