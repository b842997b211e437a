//! Shared configuration constants.

/// Metadata database constants
pub mod database {
    use super::env;

    /// Fallback metadata database when no connection-string variable is set
    pub const DEFAULT_URL: &str = "sqlite:////app/superset_home/superset.db";

    /// Connection-string variables in precedence order
    pub const URL_PRECEDENCE: [&str; 3] = [
        env::SUPERSET_DATABASE_URI,
        env::SUPERSET_SQLALCHEMY_DATABASE_URI,
        env::DATABASE_URL,
    ];
}

/// Cache backend constants
pub mod cache {
    /// Backend identifier understood by the hosting framework
    pub const REDIS_BACKEND: &str = "RedisCache";

    /// Default entry expiry in seconds
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 600;

    /// Key prefix for the metadata cache
    pub const METADATA_KEY_PREFIX: &str = "superset_metadata_cache";

    /// Key prefix for the data cache
    pub const DATA_KEY_PREFIX: &str = "superset_data_cache";
}

/// Environment variable names consumed at startup
pub mod env {
    pub const SUPERSET_DATABASE_URI: &str = "SUPERSET_DATABASE_URI";
    pub const SUPERSET_SQLALCHEMY_DATABASE_URI: &str = "SUPERSET__SQLALCHEMY_DATABASE_URI";
    pub const DATABASE_URL: &str = "DATABASE_URL";

    pub const CACHE_DEFAULT_TIMEOUT: &str = "CACHE_DEFAULT_TIMEOUT";
    pub const CACHE_REDIS_HOST: &str = "CACHE_REDIS_HOST";
    pub const CACHE_REDIS_PORT: &str = "CACHE_REDIS_PORT";
    pub const CACHE_REDIS_DB: &str = "CACHE_REDIS_DB";
    pub const CACHE_REDIS_USER: &str = "CACHE_REDIS_USER";
    pub const CACHE_REDIS_PASSWORD: &str = "CACHE_REDIS_PASSWORD";

    pub const LOG_LEVEL: &str = "LOG_LEVEL";
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
}
