//! Hierarchy change executor
//!
//! Produces the updated task for a validated hierarchy change. Writing the
//! result back to the task store is the caller's job.

use super::manager::HierarchyManager;
use super::placement::HierarchyPlacement;
use crate::core::error::DomainError;
use crate::task::entities::WorklyTask;
use crate::task::value_objects::TaskId;
use chrono::{DateTime, Utc};

impl HierarchyManager {
    /// Apply `target` to `current`, stamping `updated_at` with the current time.
    pub fn change_hierarchy(
        &self,
        task_id: &TaskId,
        target: HierarchyPlacement,
        current: &WorklyTask,
    ) -> Result<WorklyTask, DomainError> {
        self.change_hierarchy_at(task_id, target, current, Utc::now())
    }

    /// Apply `target` to `current` with an explicit clock.
    ///
    /// Fails with [`DomainError::UnknownHierarchyType`] for an `Unknown`
    /// target, and with [`DomainError::Validation`] when
    /// [`can_change_hierarchy`](HierarchyManager::can_change_hierarchy)
    /// reports the change invalid. `current` is never modified.
    pub fn change_hierarchy_at(
        &self,
        task_id: &TaskId,
        target: HierarchyPlacement,
        current: &WorklyTask,
        now: DateTime<Utc>,
    ) -> Result<WorklyTask, DomainError> {
        if task_id != &current.id {
            return Err(DomainError::TaskMismatch {
                expected: task_id.clone(),
                actual: current.id.clone(),
            });
        }

        if !target.hierarchy_type.is_assignable() {
            return Err(DomainError::UnknownHierarchyType(
                target.hierarchy_type.to_string(),
            ));
        }

        let validation = self.can_change_hierarchy(current, &target);
        if !validation.is_valid {
            return Err(DomainError::Validation(validation.error_message()));
        }

        let mut updated = current.clone();
        updated.apply_placement(target);
        updated.updated_at = now;
        Ok(updated)
    }
}

/// [`HierarchyManager::change_hierarchy`] with the default policy.
pub fn change_hierarchy(
    task_id: &TaskId,
    target: HierarchyPlacement,
    current: &WorklyTask,
) -> Result<WorklyTask, DomainError> {
    HierarchyManager::default().change_hierarchy(task_id, target, current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::kind::HierarchyType;
    use crate::task::value_objects::{CperStage, GoalId, ProjectId};
    use chrono::TimeZone;

    fn created() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 1, 9, 0, 0).unwrap()
    }

    fn later() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 14, 30, 0).unwrap()
    }

    #[test]
    fn change_replaces_placement_and_timestamp() {
        let current = WorklyTask::new_at("t1", "Draft", created())
            .with_placement(HierarchyPlacement::project_only("p1"))
            .with_stage(CperStage::Planned);

        let updated = HierarchyManager::default()
            .change_hierarchy_at(
                &TaskId::new("t1"),
                HierarchyPlacement::full_hierarchy("p2", "g1"),
                &current,
                later(),
            )
            .unwrap();

        assert_eq!(updated.hierarchy_type, HierarchyType::FullHierarchy);
        assert_eq!(updated.project_id, Some(ProjectId::new("p2")));
        assert_eq!(updated.goal_id, Some(GoalId::new("g1")));
        assert_eq!(updated.updated_at, later());
        assert_eq!(updated.created_at, created());
        assert_eq!(updated.title, "Draft");

        // input untouched
        assert_eq!(current.hierarchy_type, HierarchyType::ProjectOnly);
        assert_eq!(current.updated_at, created());
    }

    #[test]
    fn change_to_independent_clears_ids() {
        let current = WorklyTask::new_at("t1", "Draft", created())
            .with_placement(HierarchyPlacement::full_hierarchy("p1", "g1"));
        let updated = change_hierarchy(
            &TaskId::new("t1"),
            HierarchyPlacement::independent(),
            &current,
        )
        .unwrap();
        assert_eq!(updated.project_id, None);
        assert_eq!(updated.goal_id, None);
        assert!(updated.updated_at >= created());
    }

    #[test]
    fn completed_task_change_fails_with_validation_error() {
        let current = WorklyTask::new("t1", "Done").with_stage(CperStage::Completed);
        let err = change_hierarchy(
            &TaskId::new("t1"),
            HierarchyPlacement::goal_direct("g1"),
            &current,
        )
        .unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("completed task"));
    }

    #[test]
    fn executing_task_change_succeeds_despite_warning() {
        let current = WorklyTask::new("t1", "Doing").with_stage(CperStage::Executing);
        assert!(
            change_hierarchy(
                &TaskId::new("t1"),
                HierarchyPlacement::goal_direct("g1"),
                &current
            )
            .is_ok()
        );
    }

    #[test]
    fn unknown_target_type_is_rejected() {
        let current = WorklyTask::new("t1", "x");
        let err = change_hierarchy(
            &TaskId::new("t1"),
            HierarchyPlacement::new(HierarchyType::Unknown, None, None),
            &current,
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::UnknownHierarchyType(_)));
    }

    #[test]
    fn mismatched_task_id_is_rejected() {
        let current = WorklyTask::new("t1", "x");
        let err = change_hierarchy(
            &TaskId::new("t2"),
            HierarchyPlacement::independent(),
            &current,
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::TaskMismatch { .. }));
    }
}
