//! JSON workspace snapshot store.
//!
//! Implements [`TaskStore`] over a single JSON file:
//!
//! ```json
//! { "tasks": [...], "projects": [...], "goals": [...] }
//! ```
//!
//! Every call re-reads the file; [`TaskStore::load_snapshot`] parses it once
//! for all three lists. Writes go to a sibling temp file that is
//! then renamed over the original, so readers never see a half-written
//! snapshot. Writers are serialized by an async mutex; the store does not
//! coordinate with other processes.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, error, info};
use workly_application::ports::task_store::{HierarchyPatch, StoreError, TaskStore};
use workly_domain::{Goal, Project, TaskId, WorklyTask, WorkspaceSnapshot};

pub struct JsonWorkspaceStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonWorkspaceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Get the path to the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write a whole snapshot, replacing the file.
    pub async fn save(&self, snapshot: &WorkspaceSnapshot) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        self.write(snapshot).await
    }

    /// Read and parse the snapshot file.
    pub async fn load(&self) -> Result<WorkspaceSnapshot, StoreError> {
        let data = tokio::fs::read(&self.path).await.map_err(|e| {
            StoreError::Unavailable(format!("cannot read {}: {}", self.path.display(), e))
        })?;

        let snapshot: WorkspaceSnapshot = serde_json::from_slice(&data).map_err(|e| {
            error!("Workspace parse error in {}: {}", self.path.display(), e);
            StoreError::Corrupt(format!("{}: {}", self.path.display(), e))
        })?;

        debug!(
            "Loaded {} tasks, {} projects, {} goals from {}",
            snapshot.tasks.len(),
            snapshot.projects.len(),
            snapshot.goals.len(),
            self.path.display()
        );
        Ok(snapshot)
    }

    async fn write(&self, snapshot: &WorkspaceSnapshot) -> Result<(), StoreError> {
        let data = serde_json::to_vec_pretty(snapshot)
            .map_err(|e| StoreError::WriteFailed(format!("serialization failed: {}", e)))?;

        let temp_path = self.temp_path();
        tokio::fs::write(&temp_path, &data).await.map_err(|e| {
            error!("Workspace write failed: {}", e);
            StoreError::WriteFailed(format!("cannot write {}: {}", temp_path.display(), e))
        })?;

        tokio::fs::rename(&temp_path, &self.path).await.map_err(|e| {
            error!("Workspace rename failed: {}", e);
            StoreError::WriteFailed(format!(
                "cannot replace {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "workspace.json".to_string());
        self.path.with_file_name(format!(".{}.tmp", name))
    }
}

#[async_trait]
impl TaskStore for JsonWorkspaceStore {
    async fn list_tasks(&self) -> Result<Vec<WorklyTask>, StoreError> {
        Ok(self.load().await?.tasks)
    }

    async fn list_projects(&self) -> Result<Vec<Project>, StoreError> {
        Ok(self.load().await?.projects)
    }

    async fn list_goals(&self) -> Result<Vec<Goal>, StoreError> {
        Ok(self.load().await?.goals)
    }

    async fn load_snapshot(&self) -> Result<WorkspaceSnapshot, StoreError> {
        self.load().await
    }

    async fn update_task(
        &self,
        task_id: &TaskId,
        patch: HierarchyPatch,
    ) -> Result<WorklyTask, StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut snapshot = self.load().await?;
        let task = snapshot
            .task_mut(task_id)
            .ok_or_else(|| StoreError::TaskNotFound(task_id.clone()))?;

        let placement = patch.placement();
        task.hierarchy_type = placement.hierarchy_type;
        task.project_id = placement.project_id;
        task.goal_id = placement.goal_id;
        task.updated_at = patch.updated_at;
        let stored = task.clone();

        self.write(&snapshot).await?;
        info!("Stored hierarchy change for {} in {}", task_id, self.path.display());
        Ok(stored)
    }
}
