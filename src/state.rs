use std::sync::Arc;

use crate::config::QueryConfig;
use crate::database::ProjectStore;

/// Shared request state: the project store plus the query limits handlers need
#[derive(Clone)]
pub struct AppState {
    pub projects: Arc<dyn ProjectStore>,
    pub query: QueryConfig,
}

impl AppState {
    pub fn new(projects: Arc<dyn ProjectStore>, query: QueryConfig) -> Self {
        Self { projects, query }
    }
}
