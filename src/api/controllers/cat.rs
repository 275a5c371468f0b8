//! # Cats Controller
//!
//! Handles HTTP endpoints for cat operations:
//! - Creating cats
//! - Listing cats
//! - Getting a single cat

use crate::{
    metrics::CATS_CREATED,
    models::{ApiError, CreateCatRequest, NewCat, ThinDataAppState},
    repositories::CatRepository,
};
use actix_web::HttpResponse;
use log::info;

/// Validates the request and stores a new cat.
///
/// # Returns
///
/// `201 Created` with the stored cat, `400` when the input is invalid, or
/// `503` when the store cannot be reached.
pub async fn create_cat<CR>(
    request: CreateCatRequest,
    state: ThinDataAppState<CR>,
) -> Result<HttpResponse, ApiError>
where
    CR: CatRepository + Send + Sync + 'static,
{
    let candidate = NewCat::try_from(request)?;

    let cat = state.cat_repository.create(candidate).await?;
    CATS_CREATED.inc();
    info!("Created cat {} ({})", cat.id, cat.name);

    Ok(HttpResponse::Created().json(cat))
}

/// Lists every stored cat in ascending id order.
pub async fn list_cats<CR>(state: ThinDataAppState<CR>) -> Result<HttpResponse, ApiError>
where
    CR: CatRepository + Send + Sync + 'static,
{
    let cats = state.cat_repository.list_all().await?;

    Ok(HttpResponse::Ok().json(cats))
}

pub async fn get_cat<CR>(cat_id: u64, state: ThinDataAppState<CR>) -> Result<HttpResponse, ApiError>
where
    CR: CatRepository + Send + Sync + 'static,
{
    let cat = state.cat_repository.get_by_id(cat_id).await?;

    Ok(HttpResponse::Ok().json(cat))
}
