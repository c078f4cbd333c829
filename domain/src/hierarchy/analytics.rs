//! Contribution and independence scoring.
//!
//! All scores are advisory estimates on a 0–100 scale:
//!
//! ```text
//! project = 100 / max(tasksCount, 1)         × priority × min(minutes / workday, 2)
//! goal    = 100 / max(projectCount × 3, 1)   × priority    (goal_direct)
//!         = 100 / max(projectCount × 10, 1)  × priority    (via a project)
//! ```
//!
//! Each result is clamped to `[0, 100]`. Independence is a fixed lookup on
//! the hierarchy type (see [`HierarchyType::independence_score`]).
//!
//! # Examples
//!
//! ```
//! use workly_domain::{Goal, HierarchyPlacement, Priority, WorklyTask, analyze_hierarchy};
//!
//! let task = WorklyTask::new("t1", "Sign up for race")
//!     .with_placement(HierarchyPlacement::goal_direct("g1"))
//!     .with_priority(Priority::High);
//! let goal = Goal::new("g1", "Run a marathon").with_project_count(2);
//!
//! let analytics = analyze_hierarchy(&task, None, Some(&goal));
//! let on_goal = analytics.impact.on_goal.unwrap();
//! assert!((on_goal - 25.0).abs() < 1e-9);
//! ```

use super::kind::HierarchyType;
use super::manager::HierarchyManager;
use super::recommendation::HierarchyRecommendations;
use crate::task::entities::{Goal, Project, WorklyTask};
use crate::task::value_objects::{GoalId, ProjectId, TaskId};
use serde::{Deserialize, Serialize};

/// Assumed number of direct tasks per project-equivalent slot of a goal.
const DIRECT_TASKS_PER_PROJECT_SLOT: u32 = 3;

/// Assumed number of tasks per project when reaching a goal through it.
const TASKS_PER_PROJECT: u32 = 10;

/// How a task reaches its goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalConnection {
    Direct,
    ViaProject,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectContribution {
    pub project_id: ProjectId,
    pub title: String,
    pub contribution_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalContribution {
    pub goal_id: GoalId,
    pub title: String,
    pub connection: GoalConnection,
    pub contribution_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyImpact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_project: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_goal: Option<f64>,
    /// 0–100, derived from the hierarchy type alone.
    pub independence: u8,
}

/// Per-task analytics snapshot. Regenerated on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyAnalytics {
    pub task_id: TaskId,
    pub hierarchy_type: HierarchyType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectContribution>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<GoalContribution>,
    pub impact: HierarchyImpact,
    pub recommendations: HierarchyRecommendations,
}

fn clamp_percentage(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}

impl HierarchyManager {
    /// Score a task against its (optional) project and goal.
    ///
    /// Project contribution needs both `project` and `task.project_id`;
    /// goal contribution needs only `goal`. Never fails.
    pub fn analyze_hierarchy(
        &self,
        task: &WorklyTask,
        project: Option<&Project>,
        goal: Option<&Goal>,
    ) -> HierarchyAnalytics {
        let project = match (project, &task.project_id) {
            (Some(project), Some(_)) => Some(ProjectContribution {
                project_id: project.id.clone(),
                title: project.title.clone(),
                contribution_percentage: self.project_contribution(task, project),
            }),
            _ => None,
        };

        let goal = goal.map(|goal| {
            let connection = if task.hierarchy_type == HierarchyType::GoalDirect {
                GoalConnection::Direct
            } else {
                GoalConnection::ViaProject
            };
            GoalContribution {
                goal_id: goal.id.clone(),
                title: goal.title.clone(),
                connection,
                contribution_percentage: self.goal_contribution(task, goal, connection),
            }
        });

        let independence = task.hierarchy_type.independence_score();
        let impact = HierarchyImpact {
            on_project: project.as_ref().map(|p| p.contribution_percentage),
            on_goal: goal.as_ref().map(|g| g.contribution_percentage),
            independence,
        };

        HierarchyAnalytics {
            task_id: task.id.clone(),
            hierarchy_type: task.hierarchy_type,
            project,
            goal,
            recommendations: self.recommend(task, independence),
            impact,
        }
    }

    /// Estimated share of the project this task completes, 0–100.
    pub fn project_contribution(&self, task: &WorklyTask, project: &Project) -> f64 {
        let base = 100.0 / project.tasks_count.max(1) as f64;
        let time_weight = self.policy().time_weight(task.estimated_minutes);
        clamp_percentage(base * task.priority.weight() * time_weight)
    }

    /// Estimated share of the goal this task completes, 0–100.
    pub fn goal_contribution(
        &self,
        task: &WorklyTask,
        goal: &Goal,
        connection: GoalConnection,
    ) -> f64 {
        let slots = match connection {
            GoalConnection::Direct => goal.project_count.saturating_mul(DIRECT_TASKS_PER_PROJECT_SLOT),
            GoalConnection::ViaProject => goal.project_count.saturating_mul(TASKS_PER_PROJECT),
        };
        let base = 100.0 / slots.max(1) as f64;
        clamp_percentage(base * task.priority.weight())
    }
}

/// [`HierarchyManager::analyze_hierarchy`] with the default policy.
pub fn analyze_hierarchy(
    task: &WorklyTask,
    project: Option<&Project>,
    goal: Option<&Goal>,
) -> HierarchyAnalytics {
    HierarchyManager::default().analyze_hierarchy(task, project, goal)
}
