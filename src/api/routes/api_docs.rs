//! Serves the generated OpenAPI document.
//!
//! Registered outside the `/api/v1` scope at `/api-docs/openapi.json`.
use actix_web::{get, web, HttpResponse};
use utoipa::OpenApi;

use crate::openapi::ApiDoc;

#[get("/api-docs/openapi.json")]
async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(openapi_json);
}
