/// Configuration for the server, including storage, access and rate limiting settings.
use std::{env, fmt, str::FromStr};

use log::warn;

use crate::{
    config::ConfigError,
    constants::{DEFAULT_REDIS_CONNECTION_TIMEOUT_MS, DEFAULT_REDIS_KEY_PREFIX},
    models::SecretString,
};

/// Backend used for the cat repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepositoryStorageType {
    #[default]
    InMemory,
    Redis,
}

impl FromStr for RepositoryStorageType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "in_memory" | "inmemory" | "memory" => Ok(Self::InMemory),
            "redis" => Ok(Self::Redis),
            other => Err(ConfigError::InvalidStorageType(other.to_string())),
        }
    }
}

impl fmt::Display for RepositoryStorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InMemory => write!(f, "in_memory"),
            Self::Redis => write!(f, "redis"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The host address the server will bind to.
    pub host: String,
    /// The port number the server will listen on.
    pub port: u16,
    /// Which cat repository backend to use.
    pub repository_storage_type: RepositoryStorageType,
    /// The URL for the Redis instance.
    pub redis_url: String,
    /// Prefix for every Redis key written by the service.
    pub redis_key_prefix: String,
    /// How long to wait for the initial Redis connection.
    pub redis_connection_timeout_ms: u64,
    /// API key required on non-public routes. `None` disables authentication.
    pub api_key: Option<SecretString>,
    /// The number of requests allowed per second.
    pub rate_limit_requests_per_second: u64,
    /// The maximum burst size for rate limiting.
    pub rate_limit_burst_size: u32,
}

fn parse_env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

impl ServerConfig {
    /// Creates a new `ServerConfig` instance from environment variables.
    ///
    /// # Defaults
    ///
    /// - `HOST` defaults to `"0.0.0.0"`.
    /// - `APP_PORT` defaults to `8080`.
    /// - `REPOSITORY_STORAGE_TYPE` defaults to `in_memory`.
    /// - `REDIS_URL` defaults to `"redis://127.0.0.1:6379"`.
    /// - `REDIS_KEY_PREFIX` defaults to `"cats"`.
    /// - `REDIS_CONNECTION_TIMEOUT_MS` defaults to `10000`.
    /// - `API_KEY` is unset, which leaves every route open.
    /// - `RATE_LIMIT_REQUESTS_PER_SECOND` defaults to `100`.
    /// - `RATE_LIMIT_BURST_SIZE` defaults to `300`.
    ///
    /// Values that fail to parse fall back to their defaults.
    pub fn from_env() -> Self {
        let repository_storage_type = match env::var("REPOSITORY_STORAGE_TYPE") {
            Ok(value) => value.parse().unwrap_or_else(|e: ConfigError| {
                warn!("{}, falling back to in_memory", e);
                RepositoryStorageType::InMemory
            }),
            Err(_) => RepositoryStorageType::default(),
        };

        let redis_key_prefix = env::var("REDIS_KEY_PREFIX")
            .ok()
            .filter(|prefix| !prefix.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_REDIS_KEY_PREFIX.to_string());

        let api_key = env::var("API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .map(|key| SecretString::new(&key));

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_env_or("APP_PORT", 8080),
            repository_storage_type,
            redis_url: env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string()),
            redis_key_prefix,
            redis_connection_timeout_ms: parse_env_or(
                "REDIS_CONNECTION_TIMEOUT_MS",
                DEFAULT_REDIS_CONNECTION_TIMEOUT_MS,
            ),
            api_key,
            rate_limit_requests_per_second: parse_env_or("RATE_LIMIT_REQUESTS_PER_SECOND", 100),
            rate_limit_burst_size: parse_env_or("RATE_LIMIT_BURST_SIZE", 300),
        }
    }
}
