use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use crate::config::AppConfig;
use crate::database::models::{NewProject, Project, ProjectInput};
use crate::database::{InMemoryProjectStore, ProjectStore};
use crate::routes::app;
use crate::state::AppState;

/// Router wired to an in-memory store, for driving handlers in-process
pub struct TestContext {
    pub store: Arc<InMemoryProjectStore>,
    pub config: AppConfig,
}

impl TestContext {
    pub fn new() -> Self {
        let mut config = AppConfig::development();
        config.api.enable_request_logging = false;
        Self {
            store: Arc::new(InMemoryProjectStore::new()),
            config,
        }
    }

    pub fn router(&self) -> Router {
        let state = AppState::new(self.store.clone(), self.config.query.clone());
        app(state, &self.config)
    }

    /// Insert a project directly into the store
    pub async fn seed(&self, title: &str) -> Project {
        let project = NewProject::from_input(ProjectInput {
            title: Some(title.to_string()),
            ..Default::default()
        })
        .expect("valid seed project");
        self.store.create(project).await.expect("seed insert")
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request");
        self.dispatch(request).await
    }

    pub async fn dispatch(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router().oneshot(request).await.expect("infallible router");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("response body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }
}
