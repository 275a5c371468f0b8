//! End-to-end tests of the cats API over the in-memory store.
use std::{collections::HashSet, sync::Arc};

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    http::{header::USER_AGENT, StatusCode},
    test, web, App, Error,
};
use cats_api::{
    api::{self, json_config},
    models::DefaultAppState,
    repositories::CatRepositoryStorage,
};
use serde_json::{json, Value};

fn cats_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let state = DefaultAppState::new(Arc::new(CatRepositoryStorage::new_in_memory()));
    App::new()
        .app_data(json_config())
        .app_data(web::ThinData(state))
        .service(web::scope("/api/v1").configure(api::routes::configure_routes))
        .configure(api::routes::api_docs::init)
}

#[actix_web::test]
async fn test_create_and_list_cats() {
    let app = test::init_service(cats_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/cats")
        .set_json(json!({ "name": "Tom", "color": "black" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let tom: Value = test::read_body_json(resp).await;
    assert_eq!(tom["name"], "Tom");
    assert_eq!(tom["color"], "black");
    assert!(tom["id"].is_u64());
    assert!(tom["created"].is_string());

    let req = test::TestRequest::post()
        .uri("/api/v1/cats")
        .set_json(json!({ "name": "Felix" }))
        .to_request();
    let felix: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert!(felix["color"].is_null());
    assert_ne!(felix["id"], tom["id"]);

    let req = test::TestRequest::get().uri("/api/v1/cats").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let cats: Value = test::read_body_json(resp).await;
    assert_eq!(cats, json!([tom, felix]));
}

#[actix_web::test]
async fn test_list_is_empty_on_fresh_store() {
    let app = test::init_service(cats_app()).await;

    let req = test::TestRequest::get().uri("/api/v1/cats").to_request();
    let cats: Value = test::read_body_json(test::call_service(&app, req).await).await;

    assert_eq!(cats, json!([]));
}

#[actix_web::test]
async fn test_client_supplied_id_and_created_are_ignored() {
    let app = test::init_service(cats_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/cats")
        .set_json(json!({
            "id": 999,
            "created": "1999-01-01T00:00:00Z",
            "name": "Tom"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let tom: Value = test::read_body_json(resp).await;

    assert_ne!(tom["id"], 999);
    assert_ne!(tom["created"], "1999-01-01T00:00:00Z");
}

#[actix_web::test]
async fn test_ids_are_unique_across_creates() {
    let app = test::init_service(cats_app()).await;

    let mut ids = HashSet::new();
    for i in 0..20 {
        let req = test::TestRequest::post()
            .uri("/api/v1/cats")
            .set_json(json!({ "name": format!("cat-{}", i) }))
            .to_request();
        let cat: Value = test::read_body_json(test::call_service(&app, req).await).await;
        assert!(ids.insert(cat["id"].as_u64().unwrap()));
    }

    let req = test::TestRequest::get().uri("/api/v1/cats").to_request();
    let cats: Vec<Value> = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(cats.len(), 20);
}

#[actix_web::test]
async fn test_invalid_input_is_bad_request() {
    let app = test::init_service(cats_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/cats")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"name\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert!(body["data"].is_null());

    let req = test::TestRequest::post()
        .uri("/api/v1/cats")
        .set_json(json!({ "name": "   " }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Cat name must not be empty");

    let req = test::TestRequest::post()
        .uri("/api/v1/cats")
        .set_json(json!({ "name": "x".repeat(256) }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Nothing was stored by the rejected requests.
    let req = test::TestRequest::get().uri("/api/v1/cats").to_request();
    let cats: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(cats, json!([]));
}

#[actix_web::test]
async fn test_get_cat_by_id() {
    let app = test::init_service(cats_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/cats")
        .set_json(json!({ "name": "Tom" }))
        .to_request();
    let tom: Value = test::read_body_json(test::call_service(&app, req).await).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/cats/{}", tom["id"]))
        .to_request();
    let fetched: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(fetched, tom);

    let req = test::TestRequest::get().uri("/api/v1/cats/4242").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
}

#[actix_web::test]
async fn test_ping_echoes_client() {
    let app = test::init_service(cats_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/ping")
        .insert_header((USER_AGENT, "integration-test"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "pong from integration-test");
}

#[actix_web::test]
async fn test_openapi_document_is_served() {
    let app = test::init_service(cats_app()).await;

    let req = test::TestRequest::get()
        .uri("/api-docs/openapi.json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let doc: Value = test::read_body_json(resp).await;
    assert!(doc["paths"]["/api/v1/cats"].is_object());
    assert!(doc["components"]["schemas"]["CreateCatRequest"].is_object());
}
