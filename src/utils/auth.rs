use actix_web::dev::ServiceRequest;

use crate::{
    constants::{AUTHORIZATION_HEADER_NAME, AUTHORIZATION_HEADER_VALUE_PREFIX, PUBLIC_ENDPOINTS},
    models::SecretString,
};

/// Returns true when `path` is served without authentication.
pub fn is_public_endpoint(path: &str) -> bool {
    PUBLIC_ENDPOINTS
        .iter()
        .any(|endpoint| path.trim_end_matches('/') == *endpoint)
}

/// Decides whether a request may reach the handlers.
///
/// With no API key configured every request passes. Otherwise public
/// endpoints pass and the rest need a matching bearer token.
pub fn is_request_authorized(req: &ServiceRequest, api_key: Option<&SecretString>) -> bool {
    match api_key {
        None => true,
        Some(_) if is_public_endpoint(req.path()) => true,
        Some(expected_key) => check_authorization_header(req, expected_key),
    }
}

/// Checks if the authorization header in the request matches the expected API key.
///
/// This function extracts the authorization header from the request, verifies that it starts
/// with the expected prefix (e.g., "Bearer "), and then compares the remaining part of the header
/// value with the expected API key.
pub fn check_authorization_header(req: &ServiceRequest, expected_key: &SecretString) -> bool {
    // Ensure there is exactly one Authorization header
    let headers: Vec<_> = req.headers().get_all(AUTHORIZATION_HEADER_NAME).collect();
    if headers.len() != 1 {
        return false;
    }

    if let Ok(key) = headers[0].to_str() {
        if !key.starts_with(AUTHORIZATION_HEADER_VALUE_PREFIX) {
            return false;
        }
        let prefix_len = AUTHORIZATION_HEADER_VALUE_PREFIX.len();
        let token = &key[prefix_len..];

        if token.is_empty() || token.contains(' ') {
            return false;
        }

        return &SecretString::new(token) == expected_key;
    }
    false
}
