use std::sync::Arc;
use std::time::Duration;

use color_eyre::Result;
use eyre::WrapErr;
use log::info;
use redis::aio::ConnectionManager;
use tokio::time::timeout;

use crate::config::ServerConfig;

/// Opens the Redis connection manager used by the durable cat store.
///
/// Fails when the URL is malformed, the server refuses the connection, or no
/// connection is made within `redis_connection_timeout_ms`.
pub async fn initialize_redis_connection(config: &ServerConfig) -> Result<Arc<ConnectionManager>> {
    let redis_client =
        redis::Client::open(config.redis_url.as_str()).wrap_err("Invalid REDIS_URL")?;

    let connection_manager = timeout(
        Duration::from_millis(config.redis_connection_timeout_ms),
        ConnectionManager::new(redis_client),
    )
    .await
    .map_err(|_| {
        eyre::eyre!(
            "Redis connection timeout after {}ms",
            config.redis_connection_timeout_ms
        )
    })?
    .wrap_err("Failed to connect to Redis")?;

    info!(
        "Connected to Redis (key prefix '{}')",
        config.redis_key_prefix
    );

    Ok(Arc::new(connection_manager))
}
