//! Application state initialization
//!
//! Builds the cat store selected by the server configuration and wraps it in
//! the state handed to every handler.
use crate::{
    config::{RepositoryStorageType, ServerConfig},
    models::DefaultAppState,
    repositories::CatRepositoryStorage,
    utils::initialize_redis_connection,
};
use actix_web::web;
use color_eyre::Result;
use log::info;
use std::sync::Arc;

/// Initializes the cat repository based on the server configuration
///
/// # Errors
///
/// Returns error if the Redis backend is selected and no connection can be
/// made within the configured timeout.
pub async fn initialize_repositories(config: &ServerConfig) -> Result<Arc<CatRepositoryStorage>> {
    let repository = match config.repository_storage_type {
        RepositoryStorageType::InMemory => {
            info!("Using in-memory cat store; data is lost on restart");
            CatRepositoryStorage::new_in_memory()
        }
        RepositoryStorageType::Redis => {
            let connection_manager = initialize_redis_connection(config).await?;
            CatRepositoryStorage::new_redis(connection_manager, config.redis_key_prefix.clone())?
        }
    };

    Ok(Arc::new(repository))
}

/// Initializes application state
///
/// # Returns
///
/// * `Result<web::ThinData<DefaultAppState>>` - Initialized application state
pub async fn initialize_app_state(
    server_config: Arc<ServerConfig>,
) -> Result<web::ThinData<DefaultAppState>> {
    let cat_repository = initialize_repositories(&server_config).await?;

    Ok(web::ThinData(DefaultAppState::new(cat_repository)))
}
