//! Hierarchy change validation.
//!
//! [`HierarchyManager::can_change_hierarchy`] decides whether a task may be
//! moved to a new placement, based on its CPER stage and focus state. Only
//! one rule blocks (completed tasks are immutable); everything else is
//! advisory and left to the caller.
//!
//! [`HierarchyManager::verify_hierarchy_links`] is a separate, opt-in check
//! that compares the target placement against the projects and goals the
//! caller knows about. It is never run implicitly.
//!
//! # Examples
//!
//! ```
//! use workly_domain::{CperStage, HierarchyPlacement, WorklyTask, can_change_hierarchy};
//!
//! let task = WorklyTask::new("t1", "Ship release").with_stage(CperStage::Completed);
//! let validation = can_change_hierarchy(&task, &HierarchyPlacement::independent());
//! assert!(!validation.is_valid);
//! assert_eq!(validation.errors.len(), 1);
//! ```

use super::kind::HierarchyType;
use super::manager::HierarchyManager;
use super::placement::HierarchyPlacement;
use crate::task::entities::{Goal, Project, WorklyTask};
use serde::{Deserialize, Serialize};

/// Outcome of validating a hierarchy change. Output-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
}

impl Default for HierarchyValidation {
    fn default() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            suggestions: Vec::new(),
        }
    }
}

impl HierarchyValidation {
    pub fn valid() -> Self {
        Self::default()
    }

    /// Record a blocking error.
    pub fn error(&mut self, message: impl Into<String>) {
        self.is_valid = false;
        self.errors.push(message.into());
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn suggest(&mut self, message: impl Into<String>) {
        self.suggestions.push(message.into());
    }

    /// Fold another validation into this one. Invalid wins.
    pub fn merge(mut self, other: HierarchyValidation) -> Self {
        self.is_valid &= other.is_valid;
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self.suggestions.extend(other.suggestions);
        self
    }

    /// All error messages on one line.
    pub fn error_message(&self) -> String {
        self.errors.join(", ")
    }

    pub fn has_notes(&self) -> bool {
        !self.warnings.is_empty() || !self.suggestions.is_empty()
    }
}

impl HierarchyManager {
    /// Check whether `task` may move to `target`.
    ///
    /// - completed stage: error
    /// - executing stage: warning
    /// - focused task becoming independent: warning
    /// - independent task gaining structure: suggestion
    pub fn can_change_hierarchy(
        &self,
        task: &WorklyTask,
        target: &HierarchyPlacement,
    ) -> HierarchyValidation {
        let locale = self.locale();
        let mut validation = HierarchyValidation::valid();

        if task.stage().is_completed() {
            validation.error(locale.completed_is_immutable());
        }

        if task.stage().is_executing() {
            validation.warn(locale.executing_caution());
        }

        if task.is_focused() && target.hierarchy_type == HierarchyType::Independent {
            validation.warn(locale.focused_to_independent());
        }

        if task.hierarchy_type == HierarchyType::Independent
            && target.hierarchy_type != HierarchyType::Independent
        {
            validation.suggest(locale.structuring_suggestion());
        }

        validation
    }

    /// Check the target placement against known projects and goals.
    ///
    /// Errors: unclassified target, a required id is missing, or the chosen
    /// project is linked to a different goal than the chosen one.
    /// Warnings: ids that will be dropped, or that are not in the given lists.
    /// A project without a known `goal_id` is not treated as a mismatch.
    pub fn verify_hierarchy_links(
        &self,
        target: &HierarchyPlacement,
        projects: &[Project],
        goals: &[Goal],
    ) -> HierarchyValidation {
        let locale = self.locale();
        let mut validation = HierarchyValidation::valid();
        let kind = target.hierarchy_type;

        if kind == HierarchyType::Unknown {
            validation.error(locale.unclassified_target());
            return validation;
        }

        if kind.requires_project() && target.project_id.is_none() {
            validation.error(locale.missing_project_link());
        }
        if kind.requires_goal() && target.goal_id.is_none() {
            validation.error(locale.missing_goal_link());
        }
        if !kind.requires_project() && target.project_id.is_some() {
            validation.warn(locale.unexpected_project_link());
        }
        if !kind.requires_goal() && target.goal_id.is_some() {
            validation.warn(locale.unexpected_goal_link());
        }

        let project = match (&target.project_id, kind.requires_project()) {
            (Some(id), true) => {
                let found = projects.iter().find(|p| &p.id == id);
                if found.is_none() {
                    validation.warn(locale.unknown_project(id.as_str()));
                }
                found
            }
            _ => None,
        };
        let goal = match (&target.goal_id, kind.requires_goal()) {
            (Some(id), true) => {
                let found = goals.iter().find(|g| &g.id == id);
                if found.is_none() {
                    validation.warn(locale.unknown_goal(id.as_str()));
                }
                found
            }
            _ => None,
        };

        if kind == HierarchyType::FullHierarchy
            && let (Some(project), Some(goal_id)) = (project, &target.goal_id)
            && let Some(linked) = &project.goal_id
            && linked != goal_id
        {
            let goal_title = goal.map(|g| g.title.as_str()).unwrap_or(goal_id.as_str());
            validation.error(locale.project_goal_mismatch(&project.title, goal_title));
        }

        validation
    }
}

/// [`HierarchyManager::can_change_hierarchy`] with the default policy.
pub fn can_change_hierarchy(task: &WorklyTask, target: &HierarchyPlacement) -> HierarchyValidation {
    HierarchyManager::default().can_change_hierarchy(task, target)
}
