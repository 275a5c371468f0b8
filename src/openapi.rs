use crate::{
    api::routes::{docs::cat_docs, health, metrics, ping},
    models,
};
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}

/// # OpenAPI Specification
///
/// Describes the cats API. Served at `/api-docs/openapi.json` and written to
/// disk by the `generate_openapi` helper.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    tags(
      (name = "Cats", description = "Create and list cats. Ids and timestamps are assigned."),
      (name = "Ping", description = "Liveness probe that echoes the caller."),
      (name = "Health", description = "Service health."),
      (name = "Metrics", description = "Prometheus metrics for the service.")
    ),
    info(description = "Cats API", version = "1.0.0", title = "Cats API"),
    paths(
        cat_docs::doc_create_cat,
        cat_docs::doc_list_cats,
        cat_docs::doc_get_cat,
        ping::ping,
        health::health,
        metrics::list_metrics,
        metrics::metric_detail,
        metrics::scrape_metrics,
    ),
    components(schemas(models::Cat, models::CreateCatRequest))
)]
pub struct ApiDoc;
