//! Cross-origin policy for the browser client.

use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Methods a cross-origin client may use.
pub const ALLOWED_METHODS: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::OPTIONS,
];

/// Build the CORS layer.
///
/// Only `origin` is allowed. Requests from other origins are still served,
/// but the response carries no `Access-Control-Allow-Origin` header, so the
/// browser will not expose it. Any request header is accepted.
#[must_use]
pub fn cors_layer(origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_methods(ALLOWED_METHODS)
        .allow_headers(Any)
}
