//! Liveness probe that echoes the caller's identity.
//!
//! The caller is identified by its `User-Agent` header.
use actix_web::{get, http::header::USER_AGENT, web, HttpRequest, HttpResponse};

const UNKNOWN_CLIENT: &str = "unknown";

/// Builds the ping reply for a client identity.
pub fn ping_message(client: Option<&str>) -> String {
    let client = client
        .map(str::trim)
        .filter(|client| !client.is_empty())
        .unwrap_or(UNKNOWN_CLIENT);
    format!("pong from {}", client)
}

/// Handles the `/ping` endpoint.
///
/// Returns `200 OK` with a plain-text `pong from <client>` body.
#[utoipa::path(
    get,
    path = "/api/v1/ping",
    tag = "Ping",
    operation_id = "ping",
    params(
        ("User-Agent" = Option<String>, Header, description = "Client identity echoed in the reply")
    ),
    responses(
        (
            status = 200,
            description = "Reply naming the caller",
            body = String,
            example = json!("pong from curl/8.5.0")
        ),
    )
)]
#[get("/ping")]
async fn ping(req: HttpRequest) -> HttpResponse {
    let client = req
        .headers()
        .get(USER_AGENT)
        .and_then(|value| value.to_str().ok());

    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(ping_message(client))
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(ping);
}
