//! Integration tests for the bearer authorization middleware.
use actix_web::{dev::Service, test, web, App, HttpResponse, ResponseError};
use std::sync::Arc;

use cats_api::{
    config::{RepositoryStorageType, ServerConfig},
    constants::{AUTHORIZATION_HEADER_NAME, AUTHORIZATION_HEADER_VALUE_PREFIX},
    models::{ApiError, SecretString},
    utils::is_request_authorized,
};

fn server_config(api_key: Option<&str>) -> Arc<ServerConfig> {
    Arc::new(ServerConfig {
        host: "localhost".to_string(),
        port: 8080,
        repository_storage_type: RepositoryStorageType::InMemory,
        redis_url: "redis://localhost:6379".to_string(),
        redis_key_prefix: "test".to_string(),
        redis_connection_timeout_ms: 5000,
        api_key: api_key.map(SecretString::new),
        rate_limit_requests_per_second: 10,
        rate_limit_burst_size: 10,
    })
}

macro_rules! auth_app {
    ($config:expr) => {
        test::init_service(
            App::new()
                .wrap_fn({
                    let config = Arc::clone(&$config);
                    move |req, srv| {
                        if is_request_authorized(&req, config.api_key.as_ref()) {
                            return srv.call(req);
                        }
                        Box::pin(async move {
                            Ok(req.into_response(
                                ApiError::Unauthorized("Unauthorized".to_string())
                                    .error_response(),
                            ))
                        })
                    }
                })
                .service(
                    web::resource("/api/v1/cats").to(|| async { HttpResponse::Ok().body("cats") }),
                )
                .service(
                    web::resource("/api/v1/ping").to(|| async { HttpResponse::Ok().body("pong") }),
                ),
        )
        .await
    };
}

#[actix_web::test]
async fn test_authorization_middleware_success() {
    let config = server_config(Some("test_key"));
    let app = auth_app!(config);

    let req = test::TestRequest::get()
        .uri("/api/v1/cats")
        .insert_header((
            AUTHORIZATION_HEADER_NAME,
            format!("{}{}", AUTHORIZATION_HEADER_VALUE_PREFIX, "test_key"),
        ))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
}

#[actix_web::test]
async fn test_authorization_middleware_failure() {
    let config = server_config(Some("test_key"));
    let app = auth_app!(config);

    let req = test::TestRequest::get().uri("/api/v1/cats").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Unauthorized");
}

#[actix_web::test]
async fn test_public_endpoint_skips_authorization() {
    let config = server_config(Some("test_key"));
    let app = auth_app!(config);

    let req = test::TestRequest::get().uri("/api/v1/ping").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
}

#[actix_web::test]
async fn test_no_api_key_leaves_routes_open() {
    let config = server_config(None);
    let app = auth_app!(config);

    let req = test::TestRequest::get().uri("/api/v1/cats").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
}
