//! Analyze Task use case.
//!
//! Loads the workspace from the [`TaskStore`], resolves the task's project
//! and goal, and runs the hierarchy engine over it: path, analytics and
//! invariant diagnostics in one [`TaskReport`].

use crate::ports::task_store::{StoreError, TaskStore};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};
use workly_domain::{
    ConsistencyIssue, HierarchyAnalytics, HierarchyManager, TaskId, WorklyTask, WorkspaceSnapshot,
};

/// Errors that can occur while analyzing tasks.
#[derive(Error, Debug)]
pub enum AnalyzeTaskError {
    #[error("Task not found: {0}")]
    TaskNotFound(TaskId),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Everything the engine can say about one task.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskReport {
    pub task: WorklyTask,
    pub path: String,
    pub analytics: HierarchyAnalytics,
    /// Hierarchy invariant violations; empty for well-formed tasks.
    pub consistency_issues: Vec<ConsistencyIssue>,
}

/// Use case for analyzing one or all tasks.
#[derive(Clone)]
pub struct AnalyzeTaskUseCase {
    store: Arc<dyn TaskStore>,
    manager: HierarchyManager,
}

impl AnalyzeTaskUseCase {
    pub fn new(store: Arc<dyn TaskStore>, manager: HierarchyManager) -> Self {
        Self { store, manager }
    }

    /// Analyze a single task.
    pub async fn execute(&self, task_id: &TaskId) -> Result<TaskReport, AnalyzeTaskError> {
        info!("Analyzing task {}", task_id);
        let snapshot = self.store.load_snapshot().await?;

        let task = snapshot
            .task(task_id)
            .ok_or_else(|| AnalyzeTaskError::TaskNotFound(task_id.clone()))?;

        Ok(self.report(&snapshot, task))
    }

    /// Analyze every task in the workspace, in store order.
    pub async fn execute_all(&self) -> Result<Vec<TaskReport>, AnalyzeTaskError> {
        let snapshot = self.store.load_snapshot().await?;
        info!("Analyzing {} tasks", snapshot.tasks.len());

        Ok(snapshot
            .tasks
            .iter()
            .map(|task| self.report(&snapshot, task))
            .collect())
    }

    fn report(&self, snapshot: &WorkspaceSnapshot, task: &WorklyTask) -> TaskReport {
        let (project, goal) = snapshot.references_of(task);

        if task.project_id.is_some() && project.is_none() {
            debug!("Task {}: project {:?} not in snapshot", task.id, task.project_id);
        }
        if task.goal_id.is_some() && goal.is_none() {
            debug!("Task {}: goal {:?} not in snapshot", task.id, task.goal_id);
        }

        let consistency_issues = task.consistency_issues();
        for issue in &consistency_issues {
            warn!("Task {} is inconsistent: {}", task.id, issue);
        }

        TaskReport {
            task: task.clone(),
            path: self.manager.hierarchy_path(task, project, goal),
            analytics: self.manager.analyze_hierarchy(task, project, goal),
            consistency_issues,
        }
    }
}
