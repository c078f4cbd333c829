//! Hierarchy placement value object
//!
//! A [`HierarchyPlacement`] is the triple (type, projectId, goalId) that
//! positions a task in the tree. It is both the current state read from a
//! task and the target of a hierarchy change.

use super::kind::HierarchyType;
use crate::task::value_objects::{GoalId, ProjectId};
use serde::{Deserialize, Serialize};

/// Where a task sits in the project/goal hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyPlacement {
    pub hierarchy_type: HierarchyType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<ProjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_id: Option<GoalId>,
}

/// A disagreement between a placement's type and the ids it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsistencyIssue {
    MissingProjectId,
    MissingGoalId,
    UnexpectedProjectId,
    UnexpectedGoalId,
}

impl std::fmt::Display for ConsistencyIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            ConsistencyIssue::MissingProjectId => "hierarchy type requires a projectId",
            ConsistencyIssue::MissingGoalId => "hierarchy type requires a goalId",
            ConsistencyIssue::UnexpectedProjectId => "projectId set on a type without projects",
            ConsistencyIssue::UnexpectedGoalId => "goalId set on a type without goals",
        };
        write!(f, "{}", text)
    }
}

impl HierarchyPlacement {
    pub fn independent() -> Self {
        Self {
            hierarchy_type: HierarchyType::Independent,
            project_id: None,
            goal_id: None,
        }
    }

    pub fn project_only(project_id: impl Into<ProjectId>) -> Self {
        Self {
            hierarchy_type: HierarchyType::ProjectOnly,
            project_id: Some(project_id.into()),
            goal_id: None,
        }
    }

    pub fn goal_direct(goal_id: impl Into<GoalId>) -> Self {
        Self {
            hierarchy_type: HierarchyType::GoalDirect,
            project_id: None,
            goal_id: Some(goal_id.into()),
        }
    }

    pub fn full_hierarchy(project_id: impl Into<ProjectId>, goal_id: impl Into<GoalId>) -> Self {
        Self {
            hierarchy_type: HierarchyType::FullHierarchy,
            project_id: Some(project_id.into()),
            goal_id: Some(goal_id.into()),
        }
    }

    /// Build a placement from loose parts, e.g. CLI arguments.
    pub fn new(
        hierarchy_type: HierarchyType,
        project_id: Option<ProjectId>,
        goal_id: Option<GoalId>,
    ) -> Self {
        Self {
            hierarchy_type,
            project_id,
            goal_id,
        }
    }

    /// Report mismatches between the type and the ids. Never fails.
    ///
    /// `Unknown` placements carry no expectations and report nothing.
    pub fn consistency_issues(&self) -> Vec<ConsistencyIssue> {
        let mut issues = Vec::new();
        if self.hierarchy_type == HierarchyType::Unknown {
            return issues;
        }

        match (self.hierarchy_type.requires_project(), &self.project_id) {
            (true, None) => issues.push(ConsistencyIssue::MissingProjectId),
            (false, Some(_)) => issues.push(ConsistencyIssue::UnexpectedProjectId),
            _ => {}
        }
        match (self.hierarchy_type.requires_goal(), &self.goal_id) {
            (true, None) => issues.push(ConsistencyIssue::MissingGoalId),
            (false, Some(_)) => issues.push(ConsistencyIssue::UnexpectedGoalId),
            _ => {}
        }

        issues
    }

    pub fn is_consistent(&self) -> bool {
        self.consistency_issues().is_empty()
    }
}
