//! Task, project and goal entities.
//!
//! These are the read-only shapes the hierarchy engine consumes. They are
//! built from whatever the task store returns and discarded after use; the
//! engine never assigns ids or persists them.

use super::value_objects::{CperStage, GoalId, Priority, ProjectId, TaskId};
use crate::hierarchy::kind::HierarchyType;
use crate::hierarchy::placement::{ConsistencyIssue, HierarchyPlacement};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// CPER workflow state of a task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CperWorkflow {
    pub stage: CperStage,
}

/// Scheduling flags for the "today" view.
///
/// At most one task per user should be focused; the engine does not check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionData {
    #[serde(default)]
    pub is_today: bool,
    #[serde(default)]
    pub is_focused: bool,
}

/// A Workly task.
///
/// The hierarchy invariant (`full_hierarchy` carries both ids,
/// `independent` carries neither, ...) is assumed, not enforced. Use
/// [`WorklyTask::consistency_issues`] to inspect violations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorklyTask {
    pub id: TaskId,
    #[serde(default)]
    pub title: String,
    pub hierarchy_type: HierarchyType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<ProjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_id: Option<GoalId>,
    #[serde(default)]
    pub cper_workflow: CperWorkflow,
    #[serde(default)]
    pub execution_data: ExecutionData,
    #[serde(default)]
    pub priority: Priority,
    /// Planned effort. Negative or non-finite input reads as 0.
    #[serde(default, deserialize_with = "non_negative_minutes")]
    pub estimated_minutes: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_action: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WorklyTask {
    /// Create an independent, captured task stamped with the current time.
    pub fn new(id: impl Into<TaskId>, title: impl Into<String>) -> Self {
        Self::new_at(id, title, Utc::now())
    }

    /// Create an independent, captured task with explicit timestamps.
    pub fn new_at(id: impl Into<TaskId>, title: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            hierarchy_type: HierarchyType::Independent,
            project_id: None,
            goal_id: None,
            cper_workflow: CperWorkflow::default(),
            execution_data: ExecutionData::default(),
            priority: Priority::default(),
            estimated_minutes: 0.0,
            next_action: None,
            created_at: now,
            updated_at: now,
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_placement(mut self, placement: HierarchyPlacement) -> Self {
        self.apply_placement(placement);
        self
    }

    pub fn with_stage(mut self, stage: CperStage) -> Self {
        self.cper_workflow.stage = stage;
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_estimated_minutes(mut self, minutes: impl Into<f64>) -> Self {
        self.estimated_minutes = clamp_minutes(minutes.into());
        self
    }

    pub fn with_next_action(mut self, action: impl Into<String>) -> Self {
        self.next_action = Some(action.into());
        self
    }

    pub fn scheduled_today(mut self) -> Self {
        self.execution_data.is_today = true;
        self
    }

    pub fn focused(mut self) -> Self {
        self.execution_data.is_focused = true;
        self
    }

    // ==================== Accessors ====================

    pub fn stage(&self) -> CperStage {
        self.cper_workflow.stage
    }

    pub fn is_today(&self) -> bool {
        self.execution_data.is_today
    }

    pub fn is_focused(&self) -> bool {
        self.execution_data.is_focused
    }

    /// Whether the task has a concrete next physical action.
    pub fn has_next_action(&self) -> bool {
        self.next_action
            .as_deref()
            .is_some_and(|action| !action.trim().is_empty())
    }

    /// Current position in the hierarchy.
    pub fn placement(&self) -> HierarchyPlacement {
        HierarchyPlacement::new(
            self.hierarchy_type,
            self.project_id.clone(),
            self.goal_id.clone(),
        )
    }

    /// Replace type and ids in one step.
    pub(crate) fn apply_placement(&mut self, placement: HierarchyPlacement) {
        self.hierarchy_type = placement.hierarchy_type;
        self.project_id = placement.project_id;
        self.goal_id = placement.goal_id;
    }

    pub fn consistency_issues(&self) -> Vec<ConsistencyIssue> {
        self.placement().consistency_issues()
    }
}

fn clamp_minutes(minutes: f64) -> f64 {
    if minutes.is_finite() {
        minutes.max(0.0)
    } else {
        0.0
    }
}

fn non_negative_minutes<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    f64::deserialize(deserializer).map(clamp_minutes)
}

/// A project, as seen by the hierarchy engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    /// Completion, 0–100.
    #[serde(default)]
    pub progress: f64,
    #[serde(default)]
    pub tasks_count: u32,
    /// Goal this project contributes to, when the store knows it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_id: Option<GoalId>,
}

impl Project {
    pub fn new(id: impl Into<ProjectId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            progress: 0.0,
            tasks_count: 0,
            goal_id: None,
        }
    }

    pub fn with_tasks_count(mut self, count: u32) -> Self {
        self.tasks_count = count;
        self
    }

    pub fn with_progress(mut self, progress: f64) -> Self {
        self.progress = progress;
        self
    }

    pub fn with_goal(mut self, goal_id: impl Into<GoalId>) -> Self {
        self.goal_id = Some(goal_id.into());
        self
    }
}

/// A goal, as seen by the hierarchy engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: GoalId,
    pub title: String,
    /// Completion, 0–100.
    #[serde(default)]
    pub progress: f64,
    #[serde(default)]
    pub project_count: u32,
}

impl Goal {
    pub fn new(id: impl Into<GoalId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            progress: 0.0,
            project_count: 0,
        }
    }

    pub fn with_project_count(mut self, count: u32) -> Self {
        self.project_count = count;
        self
    }

    pub fn with_progress(mut self, progress: f64) -> Self {
        self.progress = progress;
        self
    }
}
