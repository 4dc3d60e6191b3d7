//! Configuration management for authgate
//!
//! Values come from built-in defaults, then an optional `config.toml`,
//! then `AUTHGATE_*` environment variables.

use config::{Config, Environment, File};
use log::{info, warn};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::session::AuthLimits;

/// Where key/value data lives
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// One file per key under `storage_root`
    File,
    /// Process memory; nothing survives a restart
    Memory,
}

/// Complete application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Storage backend, `file` or `memory`
    /// Environment: AUTHGATE_STORAGE_BACKEND
    pub storage_backend: StorageBackend,

    /// Root directory of the file backend
    /// Environment: AUTHGATE_STORAGE_ROOT
    pub storage_root: String,

    /// Security limits
    pub max_username_length: usize,
    pub max_input_length: usize,

    /// Default log filter when RUST_LOG is unset
    pub log_level: String,
}

impl AppConfig {
    /// Load configuration from config.toml with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        // Packaged layout first, then the working directory
        let config_paths = ["authgate/config", "config"];

        let mut builder = Self::builder()?;
        match config_paths
            .iter()
            .find(|path| Path::new(&format!("{path}.toml")).is_file())
        {
            Some(path) => {
                info!("Loading configuration from {}.toml", path);
                builder = builder.add_source(File::with_name(path));
            }
            None => warn!("No config file found in {:?}, using defaults", config_paths),
        }

        let settings = builder
            .add_source(Environment::with_prefix("AUTHGATE"))
            .build()?;
        Self::finish(settings)
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        Config::builder()
            .set_default("storage_backend", "file")?
            .set_default("storage_root", "./auth_data")?
            .set_default("max_username_length", 32_i64)?
            .set_default("max_input_length", 512_i64)?
            .set_default("log_level", "info")
    }

    fn finish(settings: Config) -> Result<Self, config::ConfigError> {
        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.storage_backend == StorageBackend::File && self.storage_root.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "storage_root cannot be empty for the file backend".into(),
            ));
        }

        if self.max_username_length == 0 {
            return Err(config::ConfigError::Message(
                "max_username_length must be greater than 0".into(),
            ));
        }

        if self.max_input_length == 0 {
            return Err(config::ConfigError::Message(
                "max_input_length must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Get storage root as PathBuf
    pub fn storage_root_path(&self) -> PathBuf {
        PathBuf::from(&self.storage_root)
    }

    /// Input limits for login forms
    pub fn auth_limits(&self) -> AuthLimits {
        AuthLimits {
            max_username_length: self.max_username_length,
            max_input_length: self.max_input_length,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_backend: StorageBackend::File,
            storage_root: "./auth_data".to_string(),
            max_username_length: 32,
            max_input_length: 512,
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> Result<AppConfig, config::ConfigError> {
        let settings = AppConfig::builder()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        AppConfig::finish(settings)
    }

    #[test]
    fn test_defaults_fill_missing_values() {
        let config = from_toml("").unwrap();
        assert_eq!(config.storage_backend, StorageBackend::File);
        assert_eq!(config.storage_root, "./auth_data");
        assert_eq!(config.auth_limits(), AuthLimits::default());
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_toml_overrides() {
        let config = from_toml(
            r#"
            storage_backend = "memory"
            max_username_length = 8
            "#,
        )
        .unwrap();
        assert_eq!(config.storage_backend, StorageBackend::Memory);
        assert_eq!(config.max_username_length, 8);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        assert!(from_toml("storage_root = \"\"").is_err());
        assert!(from_toml("max_input_length = 0").is_err());
        assert!(from_toml("max_username_length = 0").is_err());
        assert!(from_toml("storage_backend = \"redis\"").is_err());
        // empty root is fine when nothing is written to disk
        assert!(from_toml("storage_backend = \"memory\"\nstorage_root = \"\"").is_ok());
    }
}
