//! In-memory port implementations for use case tests.

use crate::ports::audit_log::{AuditEvent, AuditLog};
use crate::ports::task_store::{HierarchyPatch, StoreError, TaskStore};
use async_trait::async_trait;
use std::sync::Mutex;
use workly_domain::{
    CperStage, Goal, HierarchyPlacement, Priority, Project, TaskId, WorklyTask, WorkspaceSnapshot,
};

pub(crate) struct InMemoryStore {
    snapshot: Mutex<WorkspaceSnapshot>,
    pub(crate) updates: Mutex<Vec<(TaskId, HierarchyPatch)>>,
    fail_lists: bool,
}

impl InMemoryStore {
    pub(crate) fn new(snapshot: WorkspaceSnapshot) -> Self {
        Self {
            snapshot: Mutex::new(snapshot),
            updates: Mutex::new(Vec::new()),
            fail_lists: false,
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            fail_lists: true,
            ..Self::new(WorkspaceSnapshot::default())
        }
    }

    pub(crate) fn task(&self, id: &str) -> Option<WorklyTask> {
        self.snapshot.lock().unwrap().task(&TaskId::new(id)).cloned()
    }

    pub(crate) fn update_count(&self) -> usize {
        self.updates.lock().unwrap().len()
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.fail_lists {
            return Err(StoreError::Unavailable("offline".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl TaskStore for InMemoryStore {
    async fn list_tasks(&self) -> Result<Vec<WorklyTask>, StoreError> {
        self.check()?;
        Ok(self.snapshot.lock().unwrap().tasks.clone())
    }

    async fn list_projects(&self) -> Result<Vec<Project>, StoreError> {
        self.check()?;
        Ok(self.snapshot.lock().unwrap().projects.clone())
    }

    async fn list_goals(&self) -> Result<Vec<Goal>, StoreError> {
        self.check()?;
        Ok(self.snapshot.lock().unwrap().goals.clone())
    }

    async fn update_task(
        &self,
        task_id: &TaskId,
        patch: HierarchyPatch,
    ) -> Result<WorklyTask, StoreError> {
        let mut snapshot = self.snapshot.lock().unwrap();
        let task = snapshot
            .task_mut(task_id)
            .ok_or_else(|| StoreError::TaskNotFound(task_id.clone()))?;
        let placement = patch.placement();
        task.hierarchy_type = placement.hierarchy_type;
        task.project_id = placement.project_id;
        task.goal_id = placement.goal_id;
        task.updated_at = patch.updated_at;
        let stored = task.clone();
        self.updates.lock().unwrap().push((task_id.clone(), patch));
        Ok(stored)
    }
}

#[derive(Default)]
pub(crate) struct RecordingAuditLog {
    pub(crate) events: Mutex<Vec<(&'static str, serde_json::Value)>>,
}

impl RecordingAuditLog {
    pub(crate) fn types(&self) -> Vec<&'static str> {
        self.events.lock().unwrap().iter().map(|(t, _)| *t).collect()
    }
}

impl AuditLog for RecordingAuditLog {
    fn record(&self, event: AuditEvent) {
        self.events
            .lock()
            .unwrap()
            .push((event.event_type, event.payload));
    }
}

/// A small workspace:
///
/// - `loose`: independent, planned, 3h
/// - `site`: project_only under "Website", executing today, focused
/// - `hire`: full_hierarchy (Hiring > Grow team), executing today, urgent
/// - `done`: goal_direct, completed
pub(crate) fn sample_snapshot() -> WorkspaceSnapshot {
    WorkspaceSnapshot::new(
        vec![
            WorklyTask::new("loose", "Clean garage")
                .with_stage(CperStage::Planned)
                .with_estimated_minutes(180),
            WorklyTask::new("site", "Landing page copy")
                .with_placement(HierarchyPlacement::project_only("p-site"))
                .with_stage(CperStage::Executing)
                .with_priority(Priority::High)
                .with_estimated_minutes(120)
                .scheduled_today()
                .focused(),
            WorklyTask::new("hire", "Post job ad")
                .with_placement(HierarchyPlacement::full_hierarchy("p-hire", "g-team"))
                .with_stage(CperStage::Executing)
                .with_priority(Priority::Urgent)
                .with_estimated_minutes(30)
                .scheduled_today(),
            WorklyTask::new("done", "Book venue")
                .with_placement(HierarchyPlacement::goal_direct("g-team"))
                .with_stage(CperStage::Completed),
        ],
        vec![
            Project::new("p-site", "Website").with_tasks_count(4),
            Project::new("p-hire", "Hiring")
                .with_tasks_count(5)
                .with_goal("g-team"),
        ],
        vec![
            Goal::new("g-team", "Grow team").with_project_count(2),
            Goal::new("g-fit", "Stay fit").with_project_count(1),
        ],
    )
}
