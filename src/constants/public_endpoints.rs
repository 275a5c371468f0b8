/// Paths served without an API key, even when one is configured.
pub const PUBLIC_ENDPOINTS: &[&str] = &["/api/v1/health", "/api/v1/ping", "/api-docs/openapi.json"];
