//! Redis-backed implementation of the CatRepository.
//!
//! The cat table lives under `{prefix}`:
//!
//! - `{prefix}:cat:{id}`: the row as JSON
//! - `{prefix}:cat_list`: sorted set of ids scored by id
//! - `{prefix}:cat_sequence`: `INCR` counter handing out ids

use crate::models::{Cat, NewCat, RepositoryError};
use crate::repositories::{redis_base::RedisRepository, CatRepository};
use async_trait::async_trait;
use chrono::Utc;
use log::{debug, warn};
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use std::fmt;
use std::sync::Arc;

const CAT_PREFIX: &str = "cat";
const CAT_LIST_KEY: &str = "cat_list";
const CAT_SEQUENCE_KEY: &str = "cat_sequence";

#[derive(Clone)]
pub struct RedisCatRepository {
    pub client: Arc<ConnectionManager>,
    pub key_prefix: String,
}

impl RedisRepository for RedisCatRepository {}

impl RedisCatRepository {
    pub fn new(
        connection_manager: Arc<ConnectionManager>,
        key_prefix: String,
    ) -> Result<Self, RepositoryError> {
        if key_prefix.is_empty() {
            return Err(RepositoryError::InvalidData(
                "Redis key prefix cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            client: connection_manager,
            key_prefix,
        })
    }

    fn cat_key(&self, id: u64) -> String {
        format!("{}:{}:{}", self.key_prefix, CAT_PREFIX, id)
    }

    fn cat_list_key(&self) -> String {
        format!("{}:{}", self.key_prefix, CAT_LIST_KEY)
    }

    fn cat_sequence_key(&self) -> String {
        format!("{}:{}", self.key_prefix, CAT_SEQUENCE_KEY)
    }

    /// Fetches rows for `ids` in the given order.
    ///
    /// Fails with `InvalidData` when an indexed row is missing or unreadable.
    async fn get_cats_by_ids(&self, ids: &[u64]) -> Result<Vec<Cat>, RepositoryError> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let mut conn = self.client.as_ref().clone();
        let keys: Vec<String> = ids.iter().map(|id| self.cat_key(*id)).collect();

        debug!("Batch fetching {} cats", keys.len());

        let values: Vec<Option<String>> = conn
            .mget(&keys)
            .await
            .map_err(|e| self.map_redis_error(e, "batch_fetch_cats"))?;

        let mut cats = Vec::with_capacity(values.len());
        for (id, value) in ids.iter().zip(values) {
            let Some(json) = value else {
                warn!("Cat {} is indexed but has no row", id);
                return Err(RepositoryError::InvalidData(format!(
                    "Cat with ID '{}' is indexed but has no row",
                    id
                )));
            };
            cats.push(self.deserialize_entity::<Cat>(&json, &id.to_string(), "cat")?);
        }

        Ok(cats)
    }
}

impl fmt::Debug for RedisCatRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisCatRepository")
            .field("client", &"<ConnectionManager>")
            .field("key_prefix", &self.key_prefix)
            .finish()
    }
}

#[async_trait]
impl CatRepository for RedisCatRepository {
    async fn create(&self, candidate: NewCat) -> Result<Cat, RepositoryError> {
        let mut conn = self.client.as_ref().clone();

        let id: u64 = conn
            .incr(self.cat_sequence_key(), 1u64)
            .await
            .map_err(|e| self.map_redis_error(e, "create_cat_next_id"))?;

        let key = self.cat_key(id);
        let cat = candidate.into_cat(id, Utc::now());
        let value = self.serialize_entity(&cat, &id.to_string(), "cat")?;

        debug!("Creating cat with ID: {}", id);

        // The sequence is atomic, so a clash means the counter was reset under live data.
        let existing: bool = conn
            .exists(&key)
            .await
            .map_err(|e| self.map_redis_error(e, "create_cat_check"))?;

        if existing {
            return Err(RepositoryError::ConstraintViolation(format!(
                "Cat with ID '{}' already exists",
                id
            )));
        }

        let mut pipe = redis::pipe();
        pipe.atomic();
        pipe.set(&key, &value);
        pipe.zadd(self.cat_list_key(), id, id);

        pipe.exec_async(&mut conn)
            .await
            .map_err(|e| self.map_redis_error(e, "create_cat"))?;

        debug!("Successfully created cat {}", id);
        Ok(cat)
    }

    async fn get_by_id(&self, id: u64) -> Result<Cat, RepositoryError> {
        let mut conn = self.client.as_ref().clone();

        debug!("Fetching cat with ID: {}", id);

        let value: Option<String> = conn
            .get(self.cat_key(id))
            .await
            .map_err(|e| self.map_redis_error(e, "get_cat_by_id"))?;

        match value {
            Some(json) => self.deserialize_entity::<Cat>(&json, &id.to_string(), "cat"),
            None => Err(RepositoryError::NotFound(format!(
                "Cat with ID '{}' not found",
                id
            ))),
        }
    }

    async fn list_all(&self) -> Result<Vec<Cat>, RepositoryError> {
        let mut conn = self.client.as_ref().clone();

        let ids: Vec<u64> = conn
            .zrange(self.cat_list_key(), 0, -1)
            .await
            .map_err(|e| self.map_redis_error(e, "list_all_cat_ids"))?;

        debug!("Found {} cat IDs", ids.len());

        self.get_cats_by_ids(&ids).await
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        let mut conn = self.client.as_ref().clone();

        let count: u64 = conn
            .zcard(self.cat_list_key())
            .await
            .map_err(|e| self.map_redis_error(e, "count_cats"))?;

        Ok(count as usize)
    }
}
