//! Task store port
//!
//! Defines how the application reads tasks, projects and goals and writes
//! hierarchy changes back. Implementations (REST clients, database
//! repositories, local snapshot files) live in the infrastructure layer.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use workly_domain::{
    Goal, GoalId, HierarchyPlacement, HierarchyType, Project, ProjectId, TaskId, WorklyTask,
    WorkspaceSnapshot,
};

/// Errors that can occur during task store operations
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Task not found: {0}")]
    TaskNotFound(TaskId),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed store data: {0}")]
    Corrupt(String),

    #[error("Write failed: {0}")]
    WriteFailed(String),
}

/// Fields written back when a task's hierarchy changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyPatch {
    pub hierarchy_type: HierarchyType,
    pub project_id: Option<ProjectId>,
    pub goal_id: Option<GoalId>,
    pub updated_at: DateTime<Utc>,
}

impl HierarchyPatch {
    /// Take the hierarchy fields of an already-updated task.
    pub fn from_task(task: &WorklyTask) -> Self {
        Self {
            hierarchy_type: task.hierarchy_type,
            project_id: task.project_id.clone(),
            goal_id: task.goal_id.clone(),
            updated_at: task.updated_at,
        }
    }

    pub fn placement(&self) -> HierarchyPlacement {
        HierarchyPlacement::new(
            self.hierarchy_type,
            self.project_id.clone(),
            self.goal_id.clone(),
        )
    }
}

/// Store of tasks and their parents.
///
/// The use cases read through [`TaskStore::load_snapshot`]. The default
/// issues the three list calls concurrently; stores that can read all three
/// from one source should override it so the result is one consistent
/// version. The application performs no staleness checks.
#[async_trait]
pub trait TaskStore: Send + Sync {
    async fn list_tasks(&self) -> Result<Vec<WorklyTask>, StoreError>;

    async fn list_projects(&self) -> Result<Vec<Project>, StoreError>;

    async fn list_goals(&self) -> Result<Vec<Goal>, StoreError>;

    /// Fetch tasks, projects and goals together.
    async fn load_snapshot(&self) -> Result<WorkspaceSnapshot, StoreError> {
        let (tasks, projects, goals) =
            futures::try_join!(self.list_tasks(), self.list_projects(), self.list_goals())?;
        Ok(WorkspaceSnapshot::new(tasks, projects, goals))
    }

    /// Persist a hierarchy change and return the stored task.
    async fn update_task(
        &self,
        task_id: &TaskId,
        patch: HierarchyPatch,
    ) -> Result<WorklyTask, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{InMemoryStore, sample_snapshot};

    #[test]
    fn test_patch_from_task() {
        let task = WorklyTask::new("t1", "x")
            .with_placement(HierarchyPlacement::full_hierarchy("p1", "g1"));
        let patch = HierarchyPatch::from_task(&task);
        assert_eq!(patch.hierarchy_type, HierarchyType::FullHierarchy);
        assert_eq!(patch.updated_at, task.updated_at);
        assert_eq!(patch.placement(), task.placement());
    }

    #[test]
    fn test_patch_serializes_null_ids() {
        let task = WorklyTask::new("t1", "x");
        let json = serde_json::to_value(HierarchyPatch::from_task(&task)).unwrap();
        assert_eq!(json["hierarchyType"], "independent");
        assert!(json["projectId"].is_null());
        assert!(json["goalId"].is_null());
        assert!(json["updatedAt"].is_string());
    }

    #[tokio::test]
    async fn test_default_load_snapshot_joins_lists() {
        let store = InMemoryStore::new(sample_snapshot());
        let snapshot = store.load_snapshot().await.unwrap();
        assert_eq!(snapshot.tasks.len(), 4);
        assert_eq!(snapshot.projects.len(), 2);
        assert_eq!(snapshot.goals.len(), 2);

        let err = InMemoryStore::failing().load_snapshot().await.unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));
    }
}
