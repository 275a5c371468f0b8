//! Shared helpers for Redis-backed repositories.
//!
//! Rows are stored as JSON strings. Failures are classified so that an
//! unreachable server surfaces as [`RepositoryError::ConnectionError`] while
//! bad payloads surface as [`RepositoryError::InvalidData`].

use crate::models::RepositoryError;
use log::{error, warn};
use redis::{ErrorKind, RedisError};
use serde::{Deserialize, Serialize};

pub trait RedisRepository {
    fn serialize_entity<T>(
        &self,
        entity: &T,
        entity_id: &str,
        entity_type: &str,
    ) -> Result<String, RepositoryError>
    where
        T: Serialize,
    {
        serde_json::to_string(entity).map_err(|e| {
            error!("Serialization failed for {} {}: {}", entity_type, entity_id, e);
            RepositoryError::InvalidData(format!(
                "Failed to serialize {} {}: {}",
                entity_type, entity_id, e
            ))
        })
    }

    fn deserialize_entity<T>(
        &self,
        json: &str,
        entity_id: &str,
        entity_type: &str,
    ) -> Result<T, RepositoryError>
    where
        T: for<'de> Deserialize<'de>,
    {
        serde_json::from_str(json).map_err(|e| {
            error!(
                "Deserialization failed for {} {}: {}",
                entity_type, entity_id, e
            );
            RepositoryError::InvalidData(format!(
                "Failed to deserialize {} {}: {} (JSON length: {})",
                entity_type,
                entity_id,
                e,
                json.len()
            ))
        })
    }

    fn map_redis_error(&self, error: RedisError, context: &str) -> RepositoryError {
        warn!("Redis operation failed in context '{}': {}", context, error);

        if error.is_io_error()
            || error.is_connection_refusal()
            || error.is_connection_dropped()
            || error.is_timeout()
        {
            return RepositoryError::ConnectionError(format!(
                "Redis unavailable during '{}': {}",
                context, error
            ));
        }

        match error.kind() {
            ErrorKind::ClusterDown | ErrorKind::MasterDown | ErrorKind::TryAgain => {
                RepositoryError::ConnectionError(format!(
                    "Redis unavailable during '{}': {}",
                    context, error
                ))
            }
            ErrorKind::AuthenticationFailed => {
                RepositoryError::ConnectionError("Redis authentication failed".to_string())
            }
            ErrorKind::TypeError => RepositoryError::InvalidData(format!(
                "Redis data type error in operation '{}': {}",
                context, error
            )),
            ErrorKind::ReadOnly => RepositoryError::Other(format!(
                "Redis is read-only in operation '{}': {}",
                context, error
            )),
            ErrorKind::ExecAbortError => RepositoryError::Other(format!(
                "Redis transaction aborted in operation '{}': {}",
                context, error
            )),
            _ => RepositoryError::Other(format!("Redis operation '{}' failed: {}", context, error)),
        }
    }
}
