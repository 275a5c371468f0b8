//! This module defines the HTTP routes for cat operations.
//! The routes are integrated with the Actix-web framework and interact with the cat controller.

use crate::{
    api::controllers::cat,
    models::{CreateCatRequest, DefaultAppState},
};
use actix_web::{get, post, web, Responder};

/// Creates a new cat.
#[post("/cats")]
async fn create_cat(
    request: web::Json<CreateCatRequest>,
    data: web::ThinData<DefaultAppState>,
) -> impl Responder {
    cat::create_cat(request.into_inner(), data).await
}

/// Lists all cats.
#[get("/cats")]
async fn list_cats(data: web::ThinData<DefaultAppState>) -> impl Responder {
    cat::list_cats(data).await
}

/// Retrieves a single cat by ID.
#[get("/cats/{cat_id}")]
async fn get_cat(cat_id: web::Path<u64>, data: web::ThinData<DefaultAppState>) -> impl Responder {
    cat::get_cat(cat_id.into_inner(), data).await
}

/// Configures the cat routes.
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(create_cat).service(list_cats).service(get_cat);
}
