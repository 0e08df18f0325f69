use async_trait::async_trait;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::{NewProject, Project, ProjectChanges, ProjectSummary};

/// Persistence seam behind the project handlers. Each method is a single
/// store call; validation happens before the call.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// All projects, most recently updated first
    async fn list(&self) -> Result<Vec<Project>, DatabaseError>;

    /// Summaries of the `limit` most recently updated projects
    async fn recent(&self, limit: i64) -> Result<Vec<ProjectSummary>, DatabaseError>;

    async fn find(&self, id: Uuid) -> Result<Option<Project>, DatabaseError>;

    async fn create(&self, project: NewProject) -> Result<Project, DatabaseError>;

    /// Returns `None` when no project has this id
    async fn update(&self, id: Uuid, changes: ProjectChanges)
        -> Result<Option<Project>, DatabaseError>;

    /// Returns the removed project, or `None` when no project has this id
    async fn delete(&self, id: Uuid) -> Result<Option<Project>, DatabaseError>;

    async fn health_check(&self) -> Result<(), DatabaseError>;
}
