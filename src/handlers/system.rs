use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::{SecondsFormat, Utc};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::state::AppState;

/// GET / - Banner with the available endpoints
pub async fn root() -> Json<Value> {
    Json(json!({
        "success": true,
        "message": "CodeCollab API Server is running!",
        "status": "success",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "projects": "/api/projects",
            "health": "/api/health"
        }
    }))
}

/// GET /api/health - Liveness probe that also pings the store
pub async fn health(State(state): State<AppState>) -> Response {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

    match state.projects.health_check().await {
        Ok(()) => Json(json!({
            "success": true,
            "status": "healthy",
            "timestamp": timestamp,
            "database": "ok"
        }))
        .into_response(),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "success": false,
                    "status": "degraded",
                    "timestamp": timestamp,
                    "error": "database unavailable"
                })),
            )
                .into_response()
        }
    }
}

/// Fallback for any unmatched route
pub async fn not_found() -> ApiError {
    ApiError::not_found(crate::error::ROUTE_NOT_FOUND)
}
