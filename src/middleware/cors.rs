//! CORS policy for the browser frontend.
//!
//! Note:
//! - CORS is enforced by browsers. Server-to-server calls (e.g. the frontend's
//!   backend proxy) are not restricted by CORS.
//! - This middleware should be applied at the Router level (not inside handlers).
//!
//! Policy:
//! - Allowlist origins from Config (comma-separated env var, exact match), WITH credentials.
//! - An empty allowlist allows none (no CORS headers).

use axum::Router;
use axum::http::{HeaderName, HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::Config;

/// Apply CORS policy to the given Router.
///
/// IMPORTANT:
/// - tower-http rejects wildcard origin/methods/headers together with
///   `allow_credentials(true)`, so everything here is listed explicitly.
pub fn apply(router: Router, config: &Config) -> Router {
    let allowed: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
            HeaderName::from_static("x-request-id"),
        ])
        .max_age(std::time::Duration::from_secs(60 * 10));

    router.layer(cors)
}
