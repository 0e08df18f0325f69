use axum::extract::{Path, State};
use serde_json::{json, Value};

use crate::database::models::{Project, ProjectChanges, ProjectInput};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, Payload};
use crate::state::AppState;

use super::parse_project_id;

/// GET /api/projects/:id - Get a single project
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Project> {
    let id = parse_project_id(&id)?;

    let project = state
        .projects
        .find(id)
        .await
        .map_err(ApiError::store("fetch project"))?
        .ok_or_else(ApiError::project_not_found)?;

    Ok(ApiResponse::success(project))
}

/// PUT /api/projects/:id - Overwrite only the fields present in the body
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Payload(input): Payload<ProjectInput>,
) -> ApiResult<Project> {
    let id = parse_project_id(&id)?;
    let changes = ProjectChanges::from_input(input)?;

    let project = state
        .projects
        .update(id, changes)
        .await
        .map_err(ApiError::store("update project"))?
        .ok_or_else(ApiError::project_not_found)?;

    tracing::info!(id = %project.id, "Updated project");
    Ok(ApiResponse::success(project))
}

/// DELETE /api/projects/:id - Remove a project
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Value> {
    let id = parse_project_id(&id)?;

    state
        .projects
        .delete(id)
        .await
        .map_err(ApiError::store("delete project"))?
        .ok_or_else(ApiError::project_not_found)?;

    tracing::info!(%id, "Deleted project");
    Ok(ApiResponse::success(json!({})).with_message("Project deleted successfully"))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;
    use uuid::Uuid;

    use crate::database::models::project::{DEFAULT_HTML_CODE, DESCRIPTION_TOO_LONG, TITLE_REQUIRED};
    use crate::testing::TestContext;

    #[tokio::test]
    async fn get_returns_project() {
        let ctx = TestContext::new();
        let project = ctx.seed("Shown").await;

        let (status, body) = ctx
            .send(Method::GET, &format!("/api/projects/{}", project.id), None)
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["_id"], project.id.to_string());
        assert_eq!(body["data"]["title"], "Shown");
    }

    #[tokio::test]
    async fn unknown_and_malformed_ids_are_not_found() {
        let ctx = TestContext::new();
        let missing = format!("/api/projects/{}", Uuid::new_v4());

        for uri in [missing.as_str(), "/api/projects/not-an-id", "/api/projects/507f1f77bcf86cd799439011"] {
            let (status, body) = ctx.send(Method::GET, uri, None).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "GET {}", uri);
            assert_eq!(body, json!({ "success": false, "error": "Project not found" }));

            let (status, _) = ctx.send(Method::PUT, uri, Some(json!({ "title": "x" }))).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "PUT {}", uri);

            let (status, _) = ctx.send(Method::DELETE, uri, None).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "DELETE {}", uri);
        }
    }

    #[tokio::test]
    async fn partial_update_keeps_omitted_fields() {
        let ctx = TestContext::new();
        let project = ctx.seed("Original").await;
        let uri = format!("/api/projects/{}", project.id);

        let (status, body) = ctx
            .send(
                Method::PUT,
                &uri,
                Some(json!({ "jsCode": "let x = 1;", "description": "  about  " })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        let data = &body["data"];
        assert_eq!(data["title"], "Original");
        assert_eq!(data["htmlCode"], DEFAULT_HTML_CODE);
        assert_eq!(data["jsCode"], "let x = 1;");
        assert_eq!(data["description"], "about");

        let (_, body) = ctx.send(Method::GET, &uri, None).await;
        assert_eq!(body["data"]["jsCode"], "let x = 1;");
        assert_eq!(body["data"]["title"], "Original");
    }

    #[tokio::test]
    async fn update_ignores_visibility() {
        let ctx = TestContext::new();
        let project = ctx.seed("Private").await;
        let uri = format!("/api/projects/{}", project.id);

        let (status, body) = ctx
            .send(Method::PUT, &uri, Some(json!({ "isPublic": true })))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["isPublic"], false);
    }

    #[tokio::test]
    async fn update_validates_provided_fields() {
        let ctx = TestContext::new();
        let project = ctx.seed("Valid").await;
        let uri = format!("/api/projects/{}", project.id);

        let (status, body) = ctx
            .send(
                Method::PUT,
                &uri,
                Some(json!({ "title": " ", "description": "d".repeat(501) })),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], json!([TITLE_REQUIRED, DESCRIPTION_TOO_LONG]));

        let (_, body) = ctx.send(Method::GET, &uri, None).await;
        assert_eq!(body["data"]["title"], "Valid");
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let ctx = TestContext::new();
        let project = ctx.seed("Doomed").await;
        let uri = format!("/api/projects/{}", project.id);

        let (status, body) = ctx.send(Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "success": true, "message": "Project deleted successfully", "data": {} })
        );

        let (status, _) = ctx.send(Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn store_failures_use_fixed_messages() {
        let ctx = TestContext::new();
        let project = ctx.seed("p").await;
        let uri = format!("/api/projects/{}", project.id);
        ctx.store.set_offline(true);

        let (status, body) = ctx.send(Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Server Error: Could not fetch project");

        let (_, body) = ctx.send(Method::PUT, &uri, Some(json!({}))).await;
        assert_eq!(body["error"], "Server Error: Could not update project");

        let (_, body) = ctx.send(Method::DELETE, &uri, None).await;
        assert_eq!(body["error"], "Server Error: Could not delete project");
    }
}
