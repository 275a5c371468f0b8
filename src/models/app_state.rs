//! Application state shared by every request handler.
//!
//! The state is built once at start-up and handed to actix as `ThinData`, so
//! handlers receive the store by explicit injection rather than by lookup.
use std::sync::Arc;

use actix_web::web::ThinData;

use crate::repositories::{CatRepository, CatRepositoryStorage};

pub struct AppState<CR>
where
    CR: CatRepository + Send + Sync + 'static,
{
    pub cat_repository: Arc<CR>,
}

impl<CR> AppState<CR>
where
    CR: CatRepository + Send + Sync + 'static,
{
    pub fn new(cat_repository: Arc<CR>) -> Self {
        Self { cat_repository }
    }

    pub fn cat_repository(&self) -> Arc<CR> {
        Arc::clone(&self.cat_repository)
    }
}

impl<CR> Clone for AppState<CR>
where
    CR: CatRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            cat_repository: Arc::clone(&self.cat_repository),
        }
    }
}

/// The application state type used by the running server.
pub type DefaultAppState = AppState<CatRepositoryStorage>;

pub type ThinDataAppState<CR> = ThinData<AppState<CR>>;
