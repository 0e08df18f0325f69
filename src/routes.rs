use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::handlers::{projects, system};
use crate::middleware::cors_layer;
use crate::state::AppState;

/// Build the application router with all endpoints and global middleware
pub fn app(state: AppState, config: &AppConfig) -> Router {
    let router = Router::new()
        // Public
        .route("/", get(system::root))
        .route("/api/health", get(system::health))
        .merge(project_routes())
        .fallback(system::not_found)
        .with_state(state)
        // Global middleware
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes))
        .layer(cors_layer(config.security.cors_origins.clone()));

    if config.api.enable_request_logging {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

fn project_routes() -> Router<AppState> {
    Router::new()
        .route("/api/projects", get(projects::list).post(projects::create))
        // Static segment wins over the :id capture
        .route("/api/projects/recent", get(projects::recent))
        .route(
            "/api/projects/:id",
            get(projects::get)
                .put(projects::update)
                .delete(projects::delete),
        )
}
