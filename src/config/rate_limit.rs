//! This module provides rate limiting keyed on the calling client.
//!
//! A client is identified by its bearer token when it sends one and by the
//! socket peer address otherwise. `Forwarded`/`X-Forwarded-For` are ignored.

use actix_governor::{KeyExtractor, SimpleKeyExtractionError};
use actix_web::{
    dev::ServiceRequest,
    http::{header::ContentType, StatusCode},
    HttpResponse, HttpResponseBuilder,
};
use governor::clock::{Clock, DefaultClock};

use crate::constants::{AUTHORIZATION_HEADER_NAME, AUTHORIZATION_HEADER_VALUE_PREFIX};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ClientKeyRateLimit;

impl KeyExtractor for ClientKeyRateLimit {
    type Key = String;
    type KeyExtractionError = SimpleKeyExtractionError<&'static str>;

    fn extract(&self, req: &ServiceRequest) -> Result<Self::Key, Self::KeyExtractionError> {
        let token = req
            .headers()
            .get(AUTHORIZATION_HEADER_NAME)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix(AUTHORIZATION_HEADER_VALUE_PREFIX))
            .map(str::trim)
            .filter(|token| !token.is_empty());

        if let Some(token) = token {
            return Ok(format!("token:{}", token));
        }

        req.peer_addr()
            .map(|addr| format!("peer:{}", addr.ip()))
            .ok_or_else(|| {
                Self::KeyExtractionError::new(
                    r#"{"success": false, "data": null, "error": "Unable to identify client"}"#,
                )
                .set_content_type(ContentType::json())
                .set_status_code(StatusCode::BAD_REQUEST)
            })
    }

    fn exceed_rate_limit_response(
        &self,
        negative: &governor::NotUntil<governor::clock::QuantaInstant>,
        mut response: HttpResponseBuilder,
    ) -> HttpResponse {
        let wait_time = negative
            .wait_time_from(DefaultClock::default().now())
            .as_secs();
        let body = serde_json::json!({
            "success": false,
            "data": null,
            "error": format!("Too many requests, retry after {}s", wait_time),
        });
        response
            .content_type(ContentType::json())
            .body(body.to_string())
    }
}
