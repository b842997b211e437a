use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{CacheConfig, DatabaseConfig, LogConfig};
use crate::env;
use crate::validation::ConfigValidator;

/// Top-level configuration handed to the hosting application at startup.
///
/// Values are read once when the process starts: compiled defaults, an
/// optional TOML file, then environment variables on top. The environment
/// always wins; containerized deployments expose no other source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub metadata_cache: CacheConfig,
    pub data_cache: CacheConfig,
    pub logging: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let metadata_cache = CacheConfig::default();
        let data_cache = metadata_cache.data_cache();
        Self {
            database: DatabaseConfig::default(),
            metadata_cache,
            data_cache,
            logging: LogConfig::default(),
        }
    }
}

impl AppConfig {
    /// Build the configuration from the environment alone.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_lookup(&env::process_env);
        config
    }

    /// Load the configuration from a TOML file with environment overrides.
    ///
    /// An explicitly given path must exist. Without one, a short list of
    /// conventional locations is probed and compiled defaults are used when
    /// none is present.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder = ConfigBuilder::builder();

        if let Some(path) = config_path {
            if Path::new(path).exists() {
                builder = builder.add_source(File::new(path, FileFormat::Toml));
            } else {
                return Err(anyhow::anyhow!("configuration file not found: {path}"));
            }
        } else {
            let default_paths = [
                "config/superset.toml",
                "superset.toml",
                "/etc/superset/config.toml",
            ];

            for path in &default_paths {
                if Path::new(path).exists() {
                    builder = builder.add_source(File::new(path, FileFormat::Toml));
                    break;
                }
            }
        }

        let mut config: AppConfig = builder
            .build()
            .context("failed to build configuration")?
            .try_deserialize()
            .context("failed to deserialize configuration")?;

        config.apply_lookup(&env::process_env);
        config.validate()?;

        Ok(config)
    }

    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(toml_str).context("failed to parse TOML")?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("failed to serialize configuration as TOML")
    }

    pub(crate) fn apply_lookup<F>(&mut self, lookup: &F)
    where
        F: Fn(&str) -> Option<String>,
    {
        self.database.apply_lookup(lookup);
        self.metadata_cache.apply_lookup(lookup);

        // The data cache shares the backend settings of the metadata cache
        // and keeps only its own key prefix.
        self.data_cache = CacheConfig {
            key_prefix: self.data_cache.key_prefix.clone(),
            ..self.metadata_cache.clone()
        };

        self.logging = LogConfig::from_lookup(lookup);
    }
}

impl ConfigValidator for AppConfig {
    fn validate(&self) -> crate::ConfigResult<()> {
        self.database.validate()?;
        self.metadata_cache.validate()?;
        self.data_cache.validate()?;

        if self.metadata_cache.key_prefix == self.data_cache.key_prefix {
            return Err(crate::ConfigError::Validation(
                "metadata_cache and data_cache must use distinct key prefixes".to_string(),
            ));
        }

        Ok(())
    }
}
