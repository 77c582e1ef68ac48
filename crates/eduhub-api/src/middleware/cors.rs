//! CORS for the browser frontend.

use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowOrigin, Any, CorsLayer};

use eduhub_core::config::CorsConfig;

fn has_wildcard(list: &[String]) -> bool {
    list.iter().any(|v| v == "*")
}

fn parse_all<T: std::str::FromStr>(values: &[String]) -> Vec<T> {
    values
        .iter()
        .filter(|v| v.as_str() != "*")
        .filter_map(|v| v.parse().ok())
        .collect()
}

fn origins(config: &CorsConfig) -> AllowOrigin {
    match (has_wildcard(&config.allowed_origins), config.allow_credentials) {
        // Browsers reject `*` on credentialed requests; echo the origin instead.
        (true, true) => AllowOrigin::mirror_request(),
        (true, false) => Any.into(),
        (false, _) => parse_all::<HeaderValue>(&config.allowed_origins).into(),
    }
}

fn headers(config: &CorsConfig) -> AllowHeaders {
    match (has_wildcard(&config.allowed_headers), config.allow_credentials) {
        (true, true) => AllowHeaders::mirror_request(),
        (true, false) => Any.into(),
        (false, _) => parse_all::<HeaderName>(&config.allowed_headers).into(),
    }
}

/// Builds the CORS layer. Unparseable entries are skipped.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origins(config))
        .allow_methods(parse_all::<Method>(&config.allowed_methods))
        .allow_headers(headers(config))
        .expose_headers(parse_all::<HeaderName>(&config.exposed_headers))
        .allow_credentials(config.allow_credentials)
        .max_age(Duration::from_secs(config.max_age_seconds))
}
