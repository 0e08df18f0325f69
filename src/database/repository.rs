use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::{NewProject, Project, ProjectChanges, ProjectSummary};
use crate::database::store::ProjectStore;

const PROJECT_COLUMNS: &str = "id, title, html_code, css_code, js_code, description, is_public, created_at, updated_at";

/// PostgreSQL-backed project store
#[derive(Clone)]
pub struct ProjectRepository {
    pool: PgPool,
}

impl ProjectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectStore for ProjectRepository {
    async fn list(&self) -> Result<Vec<Project>, DatabaseError> {
        let sql = format!(
            "SELECT {} FROM projects ORDER BY updated_at DESC, created_at DESC",
            PROJECT_COLUMNS
        );
        let rows = sqlx::query_as::<_, Project>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn recent(&self, limit: i64) -> Result<Vec<ProjectSummary>, DatabaseError> {
        let rows = sqlx::query_as::<_, ProjectSummary>(
            "SELECT id, title, description, created_at, updated_at
             FROM projects
             ORDER BY updated_at DESC, created_at DESC
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Project>, DatabaseError> {
        let sql = format!("SELECT {} FROM projects WHERE id = $1", PROJECT_COLUMNS);
        let row = sqlx::query_as::<_, Project>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, project: NewProject) -> Result<Project, DatabaseError> {
        let now = Utc::now();
        let sql = format!(
            "INSERT INTO projects ({})
             VALUES ($1, $2, $3, $4, $5, $6, FALSE, $7, $7)
             RETURNING {}",
            PROJECT_COLUMNS, PROJECT_COLUMNS
        );
        let row = sqlx::query_as::<_, Project>(&sql)
            .bind(Uuid::new_v4())
            .bind(&project.title)
            .bind(&project.html_code)
            .bind(&project.css_code)
            .bind(&project.js_code)
            .bind(&project.description)
            .bind(now)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: ProjectChanges,
    ) -> Result<Option<Project>, DatabaseError> {
        let sql = format!(
            "UPDATE projects SET
                title = COALESCE($2, title),
                html_code = COALESCE($3, html_code),
                css_code = COALESCE($4, css_code),
                js_code = COALESCE($5, js_code),
                description = COALESCE($6, description),
                updated_at = $7
             WHERE id = $1
             RETURNING {}",
            PROJECT_COLUMNS
        );
        let row = sqlx::query_as::<_, Project>(&sql)
            .bind(id)
            .bind(&changes.title)
            .bind(&changes.html_code)
            .bind(&changes.css_code)
            .bind(&changes.js_code)
            .bind(&changes.description)
            .bind(Utc::now())
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Project>, DatabaseError> {
        let sql = format!("DELETE FROM projects WHERE id = $1 RETURNING {}", PROJECT_COLUMNS);
        let row = sqlx::query_as::<_, Project>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        DatabaseManager::health_check(&self.pool).await
    }
}
