//! Cross-cutting layers applied to every route.

use tower_http::cors::{Any, CorsLayer};

/// CORS layer accepting requests from any origin, with any method and any header.
///
/// Credentials are never allowed together with a wildcard origin.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_credentials(false)
}
