use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::constants::cache as defaults;
use crate::constants::env as env_vars;
use crate::env;
use crate::validation::{ConfigValidator, ValidationUtils};

/// Connection parameters for the Redis cache backend.
///
/// Every field is optional: deployments that do not configure Redis still
/// get a complete settings mapping, with the unset entries rendered as null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedisSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database: Option<i64>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl RedisSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(&env::process_env)
    }

    pub(crate) fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();
        settings.apply_lookup(lookup);
        settings
    }

    pub(crate) fn apply_lookup<F>(&mut self, lookup: &F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = env::optional_from(env_vars::CACHE_REDIS_HOST, lookup) {
            self.host = Some(host);
        }
        if let Some(port) = env::parsed_from(env_vars::CACHE_REDIS_PORT, lookup) {
            self.port = Some(port);
        }
        if let Some(database) = env::parsed_from(env_vars::CACHE_REDIS_DB, lookup) {
            self.database = Some(database);
        }
        if let Some(username) = env::optional_from(env_vars::CACHE_REDIS_USER, lookup) {
            self.username = Some(username);
        }
        if let Some(password) = env::optional_from(env_vars::CACHE_REDIS_PASSWORD, lookup) {
            self.password = Some(password);
        }
    }
}

/// Settings for one cache handed to the hosting framework.
///
/// The metadata cache and the data cache share every field except the key
/// prefix, which namespaces the two against each other in the same Redis
/// instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub cache_type: String,
    pub default_timeout_seconds: u64,
    pub key_prefix: String,
    pub redis: RedisSettings,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            cache_type: defaults::REDIS_BACKEND.to_string(),
            default_timeout_seconds: defaults::DEFAULT_TIMEOUT_SECONDS,
            key_prefix: defaults::METADATA_KEY_PREFIX.to_string(),
            redis: RedisSettings::default(),
        }
    }
}

impl CacheConfig {
    /// Metadata cache settings from the environment.
    pub fn metadata_from_env() -> Self {
        Self::metadata_from_lookup(&env::process_env)
    }

    pub(crate) fn metadata_from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        config.apply_lookup(lookup);
        config
    }

    pub(crate) fn apply_lookup<F>(&mut self, lookup: &F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(timeout) = env::parsed_from(env_vars::CACHE_DEFAULT_TIMEOUT, lookup) {
            self.default_timeout_seconds = timeout;
        }
        self.redis.apply_lookup(lookup);
    }

    /// Derive the data cache from this config: identical in every field
    /// except the key prefix.
    pub fn data_cache(&self) -> Self {
        Self {
            key_prefix: defaults::DATA_KEY_PREFIX.to_string(),
            ..self.clone()
        }
    }

    /// Render the settings mapping consumed by the hosting framework at
    /// startup. Unset backend parameters surface as null entries.
    pub fn to_settings(&self) -> Map<String, Value> {
        let mut settings = Map::new();
        settings.insert("CACHE_TYPE".to_string(), json!(self.cache_type));
        settings.insert(
            "CACHE_DEFAULT_TIMEOUT".to_string(),
            json!(self.default_timeout_seconds),
        );
        settings.insert("CACHE_KEY_PREFIX".to_string(), json!(self.key_prefix));
        settings.insert("CACHE_REDIS_HOST".to_string(), json!(self.redis.host));
        settings.insert("CACHE_REDIS_PORT".to_string(), json!(self.redis.port));
        settings.insert("CACHE_REDIS_DB".to_string(), json!(self.redis.database));
        settings.insert("CACHE_REDIS_USER".to_string(), json!(self.redis.username));
        settings.insert(
            "CACHE_REDIS_PASSWORD".to_string(),
            json!(self.redis.password),
        );
        settings
    }
}

impl ConfigValidator for CacheConfig {
    fn validate(&self) -> crate::ConfigResult<()> {
        ValidationUtils::validate_not_empty(&self.cache_type, "cache.cache_type")?;
        ValidationUtils::validate_not_empty(&self.key_prefix, "cache.key_prefix")?;
        ValidationUtils::validate_timeout_seconds(self.default_timeout_seconds)?;

        if let Some(port) = self.redis.port {
            ValidationUtils::validate_port(port)?;
        }

        Ok(())
    }
}
