// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::database::models::ValidationError;
use crate::database::DatabaseError;

pub const PROJECT_NOT_FOUND: &str = "Project not found";
pub const ROUTE_NOT_FOUND: &str = "Route not found";

/// HTTP API error with appropriate status codes and client-friendly messages
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest(String),
    ValidationError(Vec<String>),

    // 404 Not Found
    NotFound(String),

    // 500 Internal Server Error
    InternalServerError(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Envelope body. Validation failures carry a list of messages,
    /// everything else a single string.
    pub fn to_json(&self) -> Value {
        let error = match self {
            ApiError::ValidationError(messages) => json!(messages),
            ApiError::BadRequest(msg)
            | ApiError::NotFound(msg)
            | ApiError::InternalServerError(msg) => json!(msg),
        };
        json!({ "success": false, "error": error })
    }
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn project_not_found() -> Self {
        ApiError::not_found(PROJECT_NOT_FOUND)
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }

    /// Log a store failure and hide it behind the operation's fixed message,
    /// e.g. `ApiError::store("fetch projects")` answers
    /// "Server Error: Could not fetch projects".
    pub fn store(action: &'static str) -> impl FnOnce(DatabaseError) -> ApiError {
        move |err| {
            tracing::error!("Error while trying to {}: {}", action, err);
            ApiError::internal_server_error(format!("Server Error: Could not {}", action))
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::ValidationError(err.messages)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::ValidationError(messages) => write!(f, "{}", messages.join("; ")),
            ApiError::BadRequest(msg)
            | ApiError::NotFound(msg)
            | ApiError::InternalServerError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}
