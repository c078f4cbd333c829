//! Hierarchy path formatter

use super::kind::HierarchyType;
use super::manager::HierarchyManager;
use crate::task::entities::{Goal, Project, WorklyTask};

impl HierarchyManager {
    /// Render where a task sits, e.g. `"Grow revenue > Website"`.
    ///
    /// Missing project/goal arguments degrade to placeholder labels; this
    /// never fails.
    pub fn hierarchy_path(
        &self,
        task: &WorklyTask,
        project: Option<&Project>,
        goal: Option<&Goal>,
    ) -> String {
        let locale = self.locale();
        let project_title = project
            .map(|p| p.title.as_str())
            .unwrap_or(locale.unresolved_project());
        let goal_title = goal
            .map(|g| g.title.as_str())
            .unwrap_or(locale.unresolved_goal());

        match task.hierarchy_type {
            HierarchyType::Independent => locale.independent_label().to_string(),
            HierarchyType::ProjectOnly => project_title.to_string(),
            HierarchyType::GoalDirect => goal_title.to_string(),
            HierarchyType::FullHierarchy => format!("{} > {}", goal_title, project_title),
            HierarchyType::Unknown => locale.unclassified_label().to_string(),
        }
    }
}

/// [`HierarchyManager::hierarchy_path`] with the default policy.
pub fn hierarchy_path(task: &WorklyTask, project: Option<&Project>, goal: Option<&Goal>) -> String {
    HierarchyManager::default().hierarchy_path(task, project, goal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::locale::Locale;
    use crate::hierarchy::placement::HierarchyPlacement;
    use crate::hierarchy::policy::HierarchyPolicy;

    fn task(placement: HierarchyPlacement) -> WorklyTask {
        WorklyTask::new("t1", "Task").with_placement(placement)
    }

    #[test]
    fn test_independent_label() {
        let t = task(HierarchyPlacement::independent());
        assert_eq!(hierarchy_path(&t, None, None), "Independent task");
    }

    #[test]
    fn test_project_only_uses_project_title() {
        let t = task(HierarchyPlacement::project_only("p1"));
        let project = Project::new("p1", "Website redesign");
        assert_eq!(hierarchy_path(&t, Some(&project), None), "Website redesign");
        assert_eq!(hierarchy_path(&t, None, None), "Unresolved project");
    }

    #[test]
    fn test_goal_direct_uses_goal_title() {
        let t = task(HierarchyPlacement::goal_direct("g1"));
        let goal = Goal::new("g1", "Run a marathon");
        assert_eq!(hierarchy_path(&t, None, Some(&goal)), "Run a marathon");
        assert_eq!(hierarchy_path(&t, None, None), "Unresolved goal");
    }

    #[test]
    fn test_full_hierarchy_goal_first() {
        let t = task(HierarchyPlacement::full_hierarchy("p1", "g1"));
        let project = Project::new("p1", "Website");
        let goal = Goal::new("g1", "Grow revenue");
        assert_eq!(
            hierarchy_path(&t, Some(&project), Some(&goal)),
            "Grow revenue > Website"
        );
        assert_eq!(
            hierarchy_path(&t, Some(&project), None),
            "Unresolved goal > Website"
        );
    }

    #[test]
    fn test_full_hierarchy_without_references_uses_both_placeholders() {
        let t = task(HierarchyPlacement::full_hierarchy("p1", "g1"));
        assert_eq!(
            hierarchy_path(&t, None, None),
            "Unresolved goal > Unresolved project"
        );
    }

    #[test]
    fn test_korean_placeholders() {
        let manager = HierarchyManager::new(HierarchyPolicy::default().with_locale(Locale::Ko));
        let t = task(HierarchyPlacement::full_hierarchy("p1", "g1"));
        assert_eq!(
            manager.hierarchy_path(&t, None, None),
            "목표 미확인 > 프로젝트 미확인"
        );
    }

    #[test]
    fn test_unknown_type_is_unclassified() {
        let mut t = task(HierarchyPlacement::independent());
        t.hierarchy_type = HierarchyType::Unknown;
        assert_eq!(hierarchy_path(&t, None, None), "Unclassified task");
    }

    #[test]
    fn test_path_is_deterministic() {
        let t = task(HierarchyPlacement::full_hierarchy("p1", "g1"));
        let project = Project::new("p1", "Website");
        assert_eq!(
            hierarchy_path(&t, Some(&project), None),
            hierarchy_path(&t, Some(&project), None)
        );
    }
}
