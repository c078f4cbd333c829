//! Recommendation generator
//!
//! Soft, non-blocking suggestions derived from the scorer's output.

use super::kind::HierarchyType;
use super::manager::HierarchyManager;
use super::policy::SIMPLIFY_INDEPENDENCE_THRESHOLD;
use crate::task::entities::WorklyTask;
use crate::task::value_objects::Priority;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyRecommendations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_move_to_project: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_connect_to_goal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_become_independent: Option<String>,
}

impl HierarchyRecommendations {
    pub fn is_empty(&self) -> bool {
        self.should_move_to_project.is_none()
            && self.should_connect_to_goal.is_none()
            && self.should_become_independent.is_none()
    }

    /// Present recommendations, in a stable order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        [
            &self.should_move_to_project,
            &self.should_connect_to_goal,
            &self.should_become_independent,
        ]
        .into_iter()
        .filter_map(|r| r.as_deref())
    }
}

impl HierarchyManager {
    /// Derive recommendations for a task given its independence score.
    ///
    /// The "become independent" rule only fires for `full_hierarchy` tasks
    /// scoring above 80, which the fixed independence lookup (0 for that
    /// type) never produces. The rule is kept as stated.
    pub fn recommend(&self, task: &WorklyTask, independence: u8) -> HierarchyRecommendations {
        let locale = self.locale();
        let mut recommendations = HierarchyRecommendations::default();

        if task.hierarchy_type == HierarchyType::Independent
            && task.estimated_minutes > f64::from(self.policy().promotion_threshold_minutes)
        {
            recommendations.should_move_to_project = Some(locale.move_to_project().to_string());
        }

        if task.hierarchy_type == HierarchyType::ProjectOnly && task.priority == Priority::High {
            recommendations.should_connect_to_goal = Some(locale.connect_to_goal().to_string());
        }

        if task.hierarchy_type == HierarchyType::FullHierarchy
            && independence > SIMPLIFY_INDEPENDENCE_THRESHOLD
        {
            recommendations.should_become_independent =
                Some(locale.become_independent().to_string());
        }

        recommendations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::analytics::analyze_hierarchy;
    use crate::hierarchy::placement::HierarchyPlacement;
    use crate::hierarchy::policy::HierarchyPolicy;

    fn manager() -> HierarchyManager {
        HierarchyManager::default()
    }

    #[test]
    fn long_independent_task_should_become_project() {
        let task = WorklyTask::new("t1", "Big").with_estimated_minutes(121);
        let r = manager().recommend(&task, task.hierarchy_type.independence_score());
        assert!(r.should_move_to_project.is_some());

        let task = WorklyTask::new("t1", "Exactly two hours").with_estimated_minutes(120);
        let r = manager().recommend(&task, task.hierarchy_type.independence_score());
        assert!(r.is_empty());
    }

    #[test]
    fn promotion_threshold_follows_policy() {
        let manager =
            HierarchyManager::new(HierarchyPolicy::default().with_promotion_threshold_minutes(30));
        let task = WorklyTask::new("t1", "Medium").with_estimated_minutes(45);
        assert!(manager.recommend(&task, 100).should_move_to_project.is_some());
    }

    #[test]
    fn high_priority_project_task_should_connect_to_goal() {
        let task = WorklyTask::new("t1", "Important")
            .with_placement(HierarchyPlacement::project_only("p1"))
            .with_priority(Priority::High);
        let r = manager().recommend(&task, 30);
        assert!(r.should_connect_to_goal.is_some());

        // urgent is not "high"
        let task = task.with_priority(Priority::Urgent);
        assert!(manager().recommend(&task, 30).should_connect_to_goal.is_none());
    }

    #[test]
    fn become_independent_is_unreachable_through_analysis() {
        let task = WorklyTask::new("t1", "Linked")
            .with_placement(HierarchyPlacement::full_hierarchy("p1", "g1"))
            .with_estimated_minutes(600)
            .with_priority(Priority::High);
        let analytics = analyze_hierarchy(&task, None, None);
        assert_eq!(analytics.impact.independence, 0);
        assert!(analytics.recommendations.should_become_independent.is_none());
    }

    #[test]
    fn become_independent_fires_for_high_independence_input() {
        let task = WorklyTask::new("t1", "Linked")
            .with_placement(HierarchyPlacement::full_hierarchy("p1", "g1"));
        let r = manager().recommend(&task, 81);
        assert!(r.should_become_independent.is_some());
        assert!(manager().recommend(&task, 80).should_become_independent.is_none());
    }

    #[test]
    fn iter_yields_present_recommendations() {
        let r = HierarchyRecommendations {
            should_move_to_project: None,
            should_connect_to_goal: Some("connect".to_string()),
            should_become_independent: Some("simplify".to_string()),
        };
        assert_eq!(r.iter().collect::<Vec<_>>(), vec!["connect", "simplify"]);
    }
}
