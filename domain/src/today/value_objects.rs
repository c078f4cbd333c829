//! Today view value objects.

use crate::task::entities::WorklyTask;
use crate::task::value_objects::{GoalId, ProjectId};
use serde::{Deserialize, Serialize};

/// How the ready-to-start bucket relates to the other buckets.
///
/// - `Overlapping` (default): every task with a next action, including
///   focused and urgent ones. This is how the Workly app behaves.
/// - `Exclusive`: only tasks that are neither focused nor urgent.
///
/// `today_tasks` is the same in both modes: tasks that are not focused, not
/// urgent and have no next action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadyToStartMode {
    #[default]
    Overlapping,
    Exclusive,
}

impl ReadyToStartMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadyToStartMode::Overlapping => "overlapping",
            ReadyToStartMode::Exclusive => "exclusive",
        }
    }
}

impl std::fmt::Display for ReadyToStartMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ReadyToStartMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "overlapping" | "overlap" => Ok(ReadyToStartMode::Overlapping),
            "exclusive" => Ok(ReadyToStartMode::Exclusive),
            _ => Err(format!(
                "Unknown ready-to-start mode: {}. Valid: overlapping, exclusive",
                s
            )),
        }
    }
}

/// Today's tasks under one project.
///
/// `project_id` is `None` when tasks claim a project-bearing hierarchy type
/// without a project id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTaskGroup {
    pub project_id: Option<ProjectId>,
    pub project_title: String,
    pub tasks: Vec<WorklyTask>,
}

/// Today's tasks under one goal, split by how they reach it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalTaskGroup {
    pub goal_id: Option<GoalId>,
    pub goal_title: String,
    /// `goal_direct` tasks.
    pub direct_tasks: Vec<WorklyTask>,
    /// `full_hierarchy` tasks, nested per project.
    pub project_tasks: Vec<ProjectTaskGroup>,
}

impl GoalTaskGroup {
    pub fn task_count(&self) -> usize {
        self.direct_tasks.len() + self.project_tasks.iter().map(|p| p.tasks.len()).sum::<usize>()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyGroups {
    pub independent: Vec<WorklyTask>,
    pub by_project: Vec<ProjectTaskGroup>,
    pub by_goal: Vec<GoalTaskGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeAnalysis {
    /// Tasks that passed the today filter.
    pub task_count: usize,
    pub total_estimated_minutes: f64,
    pub focused_tasks_minutes: f64,
    pub average_task_minutes: f64,
    pub recommended_daily_limit: u32,
    /// Planned minutes exceed the recommended daily limit.
    pub over_capacity: bool,
}

/// The today view: buckets, hierarchy groups and time totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayTasksOptimized {
    pub focused_tasks: Vec<WorklyTask>,
    pub urgent_tasks: Vec<WorklyTask>,
    pub ready_to_start_tasks: Vec<WorklyTask>,
    pub today_tasks: Vec<WorklyTask>,
    pub hierarchy_groups: HierarchyGroups,
    pub time_analysis: TimeAnalysis,
}
