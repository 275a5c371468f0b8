//! # Cats API
//!
//! A REST service for creating and listing cats.
//!
//! ## Architecture
//!
//! The service is built using Actix-web and provides:
//! - HTTP endpoints under `/api/v1`
//! - In-memory and Redis cat stores
//! - A generated OpenAPI document at `/api-docs/openapi.json`
//!
//! ## Usage
//!
//! ```bash
//! cargo run
//! ```

use std::sync::Arc;

use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::{
    dev::Service,
    middleware::{self, Logger},
    web, App, HttpServer, ResponseError,
};
use color_eyre::{
    eyre::{eyre, WrapErr},
    Result,
};
use dotenvy::dotenv;
use log::info;

use cats_api::{
    api::{self, json_config},
    bootstrap::initialize_app_state,
    config::{ClientKeyRateLimit, ServerConfig},
    logging::setup_logging,
    metrics::middleware::MetricsMiddleware,
    models::ApiError,
    utils::{is_request_authorized, log_service_info},
};

#[actix_web::main]
async fn main() -> Result<()> {
    // Initialize error reporting with eyre
    color_eyre::install().wrap_err("Failed to initialize error reporting")?;

    dotenv().ok();
    setup_logging()?;

    let config = Arc::new(ServerConfig::from_env());
    log_service_info(&config);

    let app_state = initialize_app_state(Arc::clone(&config)).await?;

    // Rate limit configuration
    let rate_limit_config = GovernorConfigBuilder::default()
        .requests_per_second(config.rate_limit_requests_per_second.max(1))
        .key_extractor(ClientKeyRateLimit)
        .burst_size(config.rate_limit_burst_size.max(1))
        .finish()
        .ok_or_else(|| eyre!("Invalid rate limit configuration"))?;

    let moved_cfg = Arc::clone(&config);
    info!("Starting server on {}:{}", config.host, config.port);
    HttpServer::new(move || {
        let config = Arc::clone(&moved_cfg);
        App::new()
            .wrap_fn(move |req, srv| {
                if is_request_authorized(&req, config.api_key.as_ref()) {
                    return srv.call(req);
                }

                Box::pin(async move {
                    Ok(req.into_response(
                        ApiError::Unauthorized("Unauthorized".to_string()).error_response(),
                    ))
                })
            })
            .wrap(Governor::new(&rate_limit_config))
            .wrap(MetricsMiddleware)
            .wrap(middleware::Compress::default())
            .wrap(middleware::NormalizePath::trim())
            .wrap(middleware::DefaultHeaders::new())
            .wrap(Logger::default())
            .app_data(json_config())
            .app_data(app_state.clone())
            .service(web::scope("/api/v1").configure(api::routes::configure_routes))
            .configure(api::routes::api_docs::init)
    })
    .bind((config.host.as_str(), config.port))
    .wrap_err_with(|| format!("Failed to bind server to {}:{}", config.host, config.port))?
    .shutdown_timeout(5)
    .run()
    .await
    .wrap_err("Server runtime error")
}
