//! In-memory cat repository.
//!
//! Cats live in a `Vec` in insertion order next to the id counter. Both sit
//! behind one `Mutex`, so concurrent creates are serialised: every create gets
//! a distinct id and the sequence stays sorted by id.

use crate::{
    models::{Cat, NewCat, RepositoryError},
    repositories::CatRepository,
};
use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use tokio::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
struct CatTable {
    last_id: u64,
    rows: Vec<Cat>,
}

#[derive(Debug)]
pub struct InMemoryCatRepository {
    store: Mutex<CatTable>,
}

impl InMemoryCatRepository {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(CatTable::default()),
        }
    }

    async fn acquire_lock<T>(lock: &Mutex<T>) -> Result<MutexGuard<T>, RepositoryError> {
        Ok(lock.lock().await)
    }
}

impl Default for InMemoryCatRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatRepository for InMemoryCatRepository {
    async fn create(&self, candidate: NewCat) -> Result<Cat, RepositoryError> {
        let mut table = Self::acquire_lock(&self.store).await?;

        let id = table.last_id.checked_add(1).ok_or_else(|| {
            RepositoryError::ConstraintViolation("Cat id sequence exhausted".to_string())
        })?;
        let cat = candidate.into_cat(id, Utc::now());

        table.last_id = id;
        table.rows.push(cat.clone());

        debug!("Created cat {} in memory", id);
        Ok(cat)
    }

    async fn get_by_id(&self, id: u64) -> Result<Cat, RepositoryError> {
        let table = Self::acquire_lock(&self.store).await?;

        match table.rows.binary_search_by_key(&id, |cat| cat.id) {
            Ok(index) => Ok(table.rows[index].clone()),
            Err(_) => Err(RepositoryError::NotFound(format!(
                "Cat with ID '{}' not found",
                id
            ))),
        }
    }

    async fn list_all(&self) -> Result<Vec<Cat>, RepositoryError> {
        let table = Self::acquire_lock(&self.store).await?;
        Ok(table.rows.clone())
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        let table = Self::acquire_lock(&self.store).await?;
        Ok(table.rows.len())
    }
}
