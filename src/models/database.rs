use serde::{Deserialize, Serialize};

use crate::constants::database as defaults;
use crate::env;
use crate::validation::{ConfigValidator, ValidationUtils};

/// Metadata database settings for the hosting application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: defaults::DEFAULT_URL.to_string(),
        }
    }
}

impl DatabaseConfig {
    /// Resolve the connection string from the environment.
    ///
    /// Precedence: `SUPERSET_DATABASE_URI`, then
    /// `SUPERSET__SQLALCHEMY_DATABASE_URI`, then `DATABASE_URL`, then the
    /// bundled SQLite default. Empty values count as unset.
    pub fn from_env() -> Self {
        Self::from_lookup(&env::process_env)
    }

    pub(crate) fn from_lookup<F>(lookup: &F) -> Self
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
        if let Some(url) = env::first_of_from(&defaults::URL_PRECEDENCE, lookup) {
            self.url = url;
        }
    }
}

impl ConfigValidator for DatabaseConfig {
    fn validate(&self) -> crate::ConfigResult<()> {
        ValidationUtils::validate_url(&self.url, "database.url")
    }
}
