use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::{NewProject, Project, ProjectChanges, ProjectSummary};
use crate::database::store::ProjectStore;

struct Entry {
    project: Project,
    // Monotonic write counter; breaks ties between equal timestamps
    revision: u64,
}

/// In-process project store. Used by tests and local tooling; can be
/// switched offline to simulate an unreachable database.
#[derive(Default)]
pub struct InMemoryProjectStore {
    entries: RwLock<HashMap<Uuid, Entry>>,
    revision: AtomicU64,
    offline: AtomicBool,
}

impl InMemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), DatabaseError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(DatabaseError::Unavailable("in-memory store is offline".to_string()));
        }
        Ok(())
    }

    fn next_revision(&self) -> u64 {
        self.revision.fetch_add(1, Ordering::SeqCst) + 1
    }

    async fn sorted(&self) -> Vec<Project> {
        let entries = self.entries.read().await;
        let mut sorted: Vec<&Entry> = entries.values().collect();
        sorted.sort_by(|a, b| {
            b.project
                .updated_at
                .cmp(&a.project.updated_at)
                .then(b.revision.cmp(&a.revision))
        });
        sorted.into_iter().map(|e| e.project.clone()).collect()
    }
}

#[async_trait]
impl ProjectStore for InMemoryProjectStore {
    async fn list(&self) -> Result<Vec<Project>, DatabaseError> {
        self.ensure_online()?;
        Ok(self.sorted().await)
    }

    async fn recent(&self, limit: i64) -> Result<Vec<ProjectSummary>, DatabaseError> {
        self.ensure_online()?;
        let take = usize::try_from(limit.max(0)).unwrap_or(usize::MAX);
        Ok(self
            .sorted()
            .await
            .iter()
            .take(take)
            .map(Project::summary)
            .collect())
    }

    async fn find(&self, id: Uuid) -> Result<Option<Project>, DatabaseError> {
        self.ensure_online()?;
        let entries = self.entries.read().await;
        Ok(entries.get(&id).map(|e| e.project.clone()))
    }

    async fn create(&self, project: NewProject) -> Result<Project, DatabaseError> {
        self.ensure_online()?;
        let project = project.into_project(Uuid::new_v4(), Utc::now());
        let entry = Entry {
            project: project.clone(),
            revision: self.next_revision(),
        };
        self.entries.write().await.insert(project.id, entry);
        Ok(project)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: ProjectChanges,
    ) -> Result<Option<Project>, DatabaseError> {
        self.ensure_online()?;
        let mut entries = self.entries.write().await;
        let Some(entry) = entries.get_mut(&id) else {
            return Ok(None);
        };
        changes.apply_to(&mut entry.project, Utc::now());
        entry.revision = self.next_revision();
        Ok(Some(entry.project.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Project>, DatabaseError> {
        self.ensure_online()?;
        Ok(self.entries.write().await.remove(&id).map(|e| e.project))
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        self.ensure_online()
    }
}
