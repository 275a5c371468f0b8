//! Error types for configuration system.
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid repository storage type: {0} (expected 'in_memory' or 'redis')")]
    InvalidStorageType(String),
}
