//! # API Module
//!
//! Contains HTTP API implementation for the cats service.
//!
//! ## Structure
//!
//! * `controllers` - Request handling and business logic
//! * `routes` - API endpoint definitions and routing

use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::models::ApiError;

pub mod controllers;

pub mod routes;

/// JSON extractor configuration that reports unreadable bodies as `400` in
/// the standard error envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        ApiError::BadRequest(format!("Invalid request body: {}", err)).into()
    })
}
