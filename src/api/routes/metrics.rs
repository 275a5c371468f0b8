//! Prometheus metrics exposed over HTTP.
use crate::{
    metrics::{gather_metrics, update_system_metrics, REGISTRY},
    models::{ApiError, ApiResponse},
};
use actix_web::{get, web, HttpResponse};
use prometheus::{Encoder, TextEncoder};

/// Lists the names of every registered metric.
#[utoipa::path(
    get,
    path = "/api/v1/metrics",
    tag = "Metrics",
    operation_id = "listMetrics",
    responses(
        (status = 200, description = "Metric names", body = Vec<String>),
    )
)]
#[get("/metrics")]
async fn list_metrics() -> HttpResponse {
    let metric_names: Vec<String> = REGISTRY
        .gather()
        .iter()
        .map(|mf| mf.get_name().to_string())
        .collect();
    HttpResponse::Ok().json(metric_names)
}

/// Returns one metric family in the Prometheus text format.
#[utoipa::path(
    get,
    path = "/api/v1/metrics/{metric_name}",
    tag = "Metrics",
    operation_id = "getMetric",
    params(
        ("metric_name" = String, Path, description = "Name of the metric")
    ),
    responses(
        (status = 200, description = "Metric in Prometheus text format", body = String),
        (status = 404, description = "Metric not found", body = ApiResponse<String>),
    )
)]
#[get("/metrics/{metric_name}")]
async fn metric_detail(path: web::Path<String>) -> Result<HttpResponse, ApiError> {
    let metric_name = path.into_inner();
    let family = REGISTRY
        .gather()
        .into_iter()
        .find(|mf| mf.get_name() == metric_name)
        .ok_or_else(|| ApiError::NotFound(format!("Metric '{}' not found", metric_name)))?;

    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    encoder
        .encode(&[family], &mut buffer)
        .map_err(|e| ApiError::InternalError(format!("Encoding error: {}", e)))?;

    Ok(HttpResponse::Ok()
        .content_type(encoder.format_type())
        .body(buffer))
}

/// Refreshes the system gauges and returns every metric.
#[utoipa::path(
    get,
    path = "/api/v1/debug/metrics/scrape",
    tag = "Metrics",
    operation_id = "scrapeMetrics",
    responses(
        (status = 200, description = "All metrics in Prometheus text format", body = String),
    )
)]
#[get("/debug/metrics/scrape")]
async fn scrape_metrics() -> Result<HttpResponse, ApiError> {
    update_system_metrics();
    let body = gather_metrics().map_err(|e| ApiError::InternalError(format!("Error: {}", e)))?;
    Ok(HttpResponse::Ok()
        .content_type(TextEncoder::new().format_type())
        .body(body))
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(list_metrics);
    cfg.service(metric_detail);
    cfg.service(scrape_metrics);
}
