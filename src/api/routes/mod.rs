//! # API Routes Module
//!
//! Configures HTTP routes for the cats service API.
//!
//! ## Routes
//!
//! * `/health` - Health check endpoint
//! * `/ping` - Caller echo
//! * `/cats` - Cat creation and listing
//! * `/metrics` - Prometheus metrics
//!
//! `api_docs` is mounted at the application root, not under `/api/v1`.

pub mod api_docs;
pub mod cat;
pub mod docs;
pub mod health;
pub mod metrics;
pub mod ping;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::init)
        .configure(ping::init)
        .configure(cat::init)
        .configure(metrics::init);
}
