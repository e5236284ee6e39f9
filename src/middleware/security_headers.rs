//! Security-related response headers for a JSON-only API.
//!
//! Responsibility:
//! - MIME sniffing protection (browsers must treat bodies as JSON)
//! - Lock down any accidental rendering (no subresources, no framing)
//! - Referrer leakage control
//! - Keep identity responses (`/me`, personalized `/`) out of shared caches
//!
//! Framing / browser-feature headers for HTML pages are left out: nothing here is rendered.

use axum::Router;
use axum::http::header::{self, HeaderName, HeaderValue};
use tower_http::set_header::SetResponseHeaderLayer;

/// Apply the API's security headers to all responses.
///
/// `if_not_present`: a handler that sets one of these explicitly wins.
pub fn apply(router: Router) -> Router {
    router
        .layer(SetResponseHeaderLayer::if_not_present(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CONTENT_SECURITY_POLICY,
            HeaderValue::from_static("default-src 'none'; frame-ancestors 'none'"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
        // Responses depend on the bearer token
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
}
