//! OpenAPI documentation stubs for the cat endpoints.
//!
//! The handlers live in `api::routes::cat`; these functions only carry the
//! `utoipa` annotations.
use crate::models::{ApiResponse, Cat, CreateCatRequest};

/// Creates a new cat.
///
/// The store assigns `id` and `created`; those fields are ignored when sent.
#[utoipa::path(
  post,
  path = "/api/v1/cats",
  tag = "Cats",
  operation_id = "createCat",
  security(
      ("bearer_auth" = [])
  ),
  request_body = CreateCatRequest,
  responses(
      (
          status = 201,
          description = "Cat created successfully",
          body = Cat
      ),
      (
          status = 400,
          description = "Bad Request",
          body = ApiResponse<String>,
          example = json!({
              "success": false,
              "data": null,
              "error": "Cat name must not be empty"
          })
      ),
      (
          status = 401,
          description = "Unauthorized",
          body = ApiResponse<String>,
          example = json!({
              "success": false,
              "data": null,
              "error": "Unauthorized"
          })
      ),
      (
          status = 429,
          description = "Too Many Requests",
          body = ApiResponse<String>
      ),
      (
          status = 503,
          description = "Cat store unavailable",
          body = ApiResponse<String>,
          example = json!({
              "success": false,
              "data": null,
              "error": "Connection refused"
          })
      )
  )
)]
#[allow(dead_code)]
fn doc_create_cat() {}

/// Lists every stored cat in ascending id order.
#[utoipa::path(
  get,
  path = "/api/v1/cats",
  tag = "Cats",
  operation_id = "listCats",
  security(
      ("bearer_auth" = [])
  ),
  responses(
      (
          status = 200,
          description = "Cat list retrieved successfully",
          body = Vec<Cat>
      ),
      (
          status = 401,
          description = "Unauthorized",
          body = ApiResponse<String>
      ),
      (
          status = 503,
          description = "Cat store unavailable",
          body = ApiResponse<String>
      )
  )
)]
#[allow(dead_code)]
fn doc_list_cats() {}

/// Retrieves a single cat by ID.
#[utoipa::path(
  get,
  path = "/api/v1/cats/{cat_id}",
  tag = "Cats",
  operation_id = "getCat",
  security(
      ("bearer_auth" = [])
  ),
  params(
      ("cat_id" = u64, Path, description = "Cat ID")
  ),
  responses(
      (
          status = 200,
          description = "Cat retrieved successfully",
          body = Cat
      ),
      (
          status = 404,
          description = "Not Found",
          body = ApiResponse<String>,
          example = json!({
              "success": false,
              "data": null,
              "error": "Cat with ID '7' not found"
          })
      ),
      (
          status = 503,
          description = "Cat store unavailable",
          body = ApiResponse<String>
      )
  )
)]
#[allow(dead_code)]
fn doc_get_cat() {}
