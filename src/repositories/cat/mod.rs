//! Cat Repository Module
//!
//! The cat store behind a narrow interface, with two interchangeable backends:
//!
//! - [`InMemoryCatRepository`]: an ordered in-process sequence, lost on restart
//! - [`RedisCatRepository`]: a durable single-table keyspace in Redis
//!
//! Both assign `id` and `created` on create and list cats in ascending id
//! order, so swapping one for the other does not change what callers see.
mod cat_in_memory;
mod cat_redis;

pub use cat_in_memory::*;
pub use cat_redis::*;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use redis::aio::ConnectionManager;
use std::sync::Arc;

use crate::models::{Cat, NewCat, RepositoryError};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait CatRepository: Send + Sync {
    /// Stores a validated candidate, assigning a fresh id and the creation time.
    async fn create(&self, candidate: NewCat) -> Result<Cat, RepositoryError>;

    async fn get_by_id(&self, id: u64) -> Result<Cat, RepositoryError>;

    /// Returns every stored cat in ascending id order.
    async fn list_all(&self) -> Result<Vec<Cat>, RepositoryError>;

    async fn count(&self) -> Result<usize, RepositoryError>;
}

/// Enum wrapper for the cat repository implementations
#[derive(Debug)]
pub enum CatRepositoryStorage {
    InMemory(InMemoryCatRepository),
    Redis(RedisCatRepository),
}

impl CatRepositoryStorage {
    pub fn new_in_memory() -> Self {
        Self::InMemory(InMemoryCatRepository::new())
    }

    pub fn new_redis(
        connection_manager: Arc<ConnectionManager>,
        key_prefix: String,
    ) -> Result<Self, RepositoryError> {
        Ok(Self::Redis(RedisCatRepository::new(
            connection_manager,
            key_prefix,
        )?))
    }
}

#[async_trait]
impl CatRepository for CatRepositoryStorage {
    async fn create(&self, candidate: NewCat) -> Result<Cat, RepositoryError> {
        match self {
            CatRepositoryStorage::InMemory(repo) => repo.create(candidate).await,
            CatRepositoryStorage::Redis(repo) => repo.create(candidate).await,
        }
    }

    async fn get_by_id(&self, id: u64) -> Result<Cat, RepositoryError> {
        match self {
            CatRepositoryStorage::InMemory(repo) => repo.get_by_id(id).await,
            CatRepositoryStorage::Redis(repo) => repo.get_by_id(id).await,
        }
    }

    async fn list_all(&self) -> Result<Vec<Cat>, RepositoryError> {
        match self {
            CatRepositoryStorage::InMemory(repo) => repo.list_all().await,
            CatRepositoryStorage::Redis(repo) => repo.list_all().await,
        }
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        match self {
            CatRepositoryStorage::InMemory(repo) => repo.count().await,
            CatRepositoryStorage::Redis(repo) => repo.count().await,
        }
    }
}
