use axum::http::{header, request::Parts, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// CORS policy for the browser frontend.
///
/// Requests without an `Origin` header (server-to-server, curl) pass through
/// untouched. Listed origins get credentialed CORS headers; any other origin
/// gets none, so the browser blocks the response.
pub fn cors_layer(allowed_origins: Vec<String>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _parts: &Parts| {
                let allowed = is_allowed(&allowed_origins, origin);
                if !allowed {
                    tracing::warn!("Blocked by CORS: {:?}", origin);
                }
                allowed
            },
        ))
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
}

fn is_allowed(allowed_origins: &[String], origin: &HeaderValue) -> bool {
    origin
        .to_str()
        .map(|o| allowed_origins.iter().any(|allowed| allowed == o))
        .unwrap_or(false)
}
