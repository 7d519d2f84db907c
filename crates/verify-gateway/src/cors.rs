//! CORS layer construction.
//!
//! Wrapper around tower-http CORS with gateway configuration: one
//! configured origin, credentials allowed, JSON content only.

use crate::config::CorsConfig;
use axum::http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;

/// Create a CORS layer from gateway config.
///
/// The origin must already have passed [`GatewayConfig::validate`]; an
/// unparsable origin falls back to denying cross-origin requests rather
/// than panicking inside tower-http.
///
/// [`GatewayConfig::validate`]: crate::config::GatewayConfig::validate
pub fn create_cors_layer(config: &CorsConfig) -> CorsLayer {
    let mut cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    if let Ok(origin) = config.allowed_origin.parse::<HeaderValue>() {
        cors = cors.allow_origin(origin);
    }

    if config.allow_credentials {
        cors = cors.allow_credentials(true);
    }

    cors
}
