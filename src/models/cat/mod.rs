//! Cat domain model.
//!
//! A [`Cat`] is the only entity of the service. The store assigns `id` and
//! `created` when a validated [`NewCat`] candidate is persisted; neither field
//! is ever accepted from a client or changed afterwards.

mod request;
pub use request::*;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::constants::{MAX_CAT_COLOR_LENGTH, MAX_CAT_NAME_LENGTH};

/// A stored cat record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Cat {
    /// Store-assigned identifier, starting at 1.
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = "Tom")]
    pub name: String,
    #[schema(example = "black")]
    pub color: Option<String>,
    /// Creation instant, set by the store.
    #[schema(example = "2024-01-01T12:00:00Z")]
    pub created: DateTime<Utc>,
}

#[derive(Debug, Error, PartialEq)]
pub enum CatValidationError {
    #[error("Cat name must not be empty")]
    EmptyName,
    #[error("Cat name must be at most {max} characters long (got {actual})")]
    NameTooLong { max: usize, actual: usize },
    #[error("Cat color must be at most {max} characters long (got {actual})")]
    ColorTooLong { max: usize, actual: usize },
}

/// A cat that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCat {
    pub name: String,
    pub color: Option<String>,
}

impl NewCat {
    /// Builds a candidate, trimming both fields and dropping a blank color.
    pub fn new(name: impl Into<String>, color: Option<String>) -> Self {
        let name = name.into().trim().to_string();
        let color = color
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        Self { name, color }
    }

    pub fn validate(&self) -> Result<(), CatValidationError> {
        if self.name.is_empty() {
            return Err(CatValidationError::EmptyName);
        }

        let name_len = self.name.chars().count();
        if name_len > MAX_CAT_NAME_LENGTH {
            return Err(CatValidationError::NameTooLong {
                max: MAX_CAT_NAME_LENGTH,
                actual: name_len,
            });
        }

        if let Some(color) = &self.color {
            let color_len = color.chars().count();
            if color_len > MAX_CAT_COLOR_LENGTH {
                return Err(CatValidationError::ColorTooLong {
                    max: MAX_CAT_COLOR_LENGTH,
                    actual: color_len,
                });
            }
        }

        Ok(())
    }

    /// Turns the candidate into a stored record. Only repositories call this.
    pub fn into_cat(self, id: u64, created: DateTime<Utc>) -> Cat {
        Cat {
            id,
            name: self.name,
            color: self.color,
            created,
        }
    }
}
