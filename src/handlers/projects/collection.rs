use axum::extract::{rejection::QueryRejection, Query, State};
use serde::Deserialize;

use crate::database::models::project::TITLE_REQUIRED;
use crate::database::models::{NewProject, Project, ProjectInput, ProjectSummary};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, Payload};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RecentQuery {
    pub limit: Option<i64>,
}

/// GET /api/projects - List all projects, most recently updated first
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Project>> {
    let projects = state
        .projects
        .list()
        .await
        .map_err(ApiError::store("fetch projects"))?;

    Ok(ApiResponse::list(projects))
}

/// GET /api/projects/recent?limit=N - Summaries of the latest projects
pub async fn recent(
    State(state): State<AppState>,
    query: Result<Query<RecentQuery>, QueryRejection>,
) -> ApiResult<Vec<ProjectSummary>> {
    let Query(query) = query.map_err(|e| ApiError::bad_request(e.body_text()))?;

    let max = state.query.max_limit.max(1);
    let limit = query
        .limit
        .unwrap_or(state.query.recent_default_limit)
        .clamp(1, max);

    let summaries = state
        .projects
        .recent(limit)
        .await
        .map_err(ApiError::store("fetch projects"))?;

    Ok(ApiResponse::list(summaries))
}

/// POST /api/projects - Create a project; omitted code panes get starter templates
pub async fn create(
    State(state): State<AppState>,
    Payload(input): Payload<ProjectInput>,
) -> ApiResult<Project> {
    if input.is_missing_title() {
        return Err(ApiError::bad_request(TITLE_REQUIRED));
    }
    let project = NewProject::from_input(input)?;

    let created = state
        .projects
        .create(project)
        .await
        .map_err(ApiError::store("create project"))?;

    tracing::info!(id = %created.id, "Created project");
    Ok(ApiResponse::created(created))
}
