//! Today-tasks optimizer
//!
//! Only tasks scheduled for today *and* in the `executing` CPER stage take
//! part. They are partitioned by precedence:
//!
//! 1. focused
//! 2. urgent (not focused)
//! 3. ready to start (has a next action, see [`ReadyToStartMode`])
//! 4. remaining (`today_tasks`)
//!
//! and grouped independently by hierarchy. Input order is preserved inside
//! every bucket and group; groups appear in first-seen order.

use super::value_objects::{
    GoalTaskGroup, HierarchyGroups, ProjectTaskGroup, ReadyToStartMode, TimeAnalysis,
    TodayTasksOptimized,
};
use crate::core::locale::Locale;
use crate::hierarchy::kind::HierarchyType;
use crate::hierarchy::manager::HierarchyManager;
use crate::task::entities::{Goal, Project, WorklyTask};
use crate::task::value_objects::{GoalId, Priority, ProjectId};

impl HierarchyManager {
    /// Build the today view from a task list and its parents.
    pub fn optimize_today_tasks(
        &self,
        tasks: &[WorklyTask],
        projects: &[Project],
        goals: &[Goal],
    ) -> TodayTasksOptimized {
        let today: Vec<&WorklyTask> = tasks
            .iter()
            .filter(|t| t.is_today() && t.stage().is_executing())
            .collect();

        let is_urgent = |t: &WorklyTask| t.priority == Priority::Urgent && !t.is_focused();

        let focused_tasks = collect(&today, |t| t.is_focused());
        let urgent_tasks = collect(&today, is_urgent);
        let ready_to_start_tasks = match self.policy().ready_to_start {
            ReadyToStartMode::Overlapping => collect(&today, |t| t.has_next_action()),
            ReadyToStartMode::Exclusive => collect(&today, |t| {
                t.has_next_action() && !t.is_focused() && !is_urgent(t)
            }),
        };
        let today_tasks = collect(&today, |t| {
            !t.is_focused() && !is_urgent(t) && !t.has_next_action()
        });

        let hierarchy_groups = group_by_hierarchy(&today, projects, goals, self.locale());
        let time_analysis = self.time_analysis(&today);

        TodayTasksOptimized {
            focused_tasks,
            urgent_tasks,
            ready_to_start_tasks,
            today_tasks,
            hierarchy_groups,
            time_analysis,
        }
    }

    fn time_analysis(&self, today: &[&WorklyTask]) -> TimeAnalysis {
        let total: f64 = today.iter().map(|t| t.estimated_minutes).sum();
        let focused: f64 = today
            .iter()
            .filter(|t| t.is_focused())
            .map(|t| t.estimated_minutes)
            .sum();
        let limit = self.policy().daily_limit_minutes;

        TimeAnalysis {
            task_count: today.len(),
            total_estimated_minutes: total,
            focused_tasks_minutes: focused,
            average_task_minutes: total / today.len().max(1) as f64,
            recommended_daily_limit: limit,
            over_capacity: total > f64::from(limit),
        }
    }
}

/// [`HierarchyManager::optimize_today_tasks`] with the default policy.
pub fn optimize_today_tasks(
    tasks: &[WorklyTask],
    projects: &[Project],
    goals: &[Goal],
) -> TodayTasksOptimized {
    HierarchyManager::default().optimize_today_tasks(tasks, projects, goals)
}

fn collect(tasks: &[&WorklyTask], keep: impl Fn(&WorklyTask) -> bool) -> Vec<WorklyTask> {
    tasks
        .iter()
        .filter(|t| keep(**t))
        .map(|t| (*t).clone())
        .collect()
}

fn project_title(projects: &[Project], id: Option<&ProjectId>, locale: Locale) -> String {
    id.and_then(|id| projects.iter().find(|p| &p.id == id))
        .map(|p| p.title.clone())
        .unwrap_or_else(|| locale.unresolved_project().to_string())
}

fn goal_title(goals: &[Goal], id: Option<&GoalId>, locale: Locale) -> String {
    id.and_then(|id| goals.iter().find(|g| &g.id == id))
        .map(|g| g.title.clone())
        .unwrap_or_else(|| locale.unresolved_goal().to_string())
}

/// Find the group for `id`, appending a new one on first sight.
fn project_group<'a>(
    groups: &'a mut Vec<ProjectTaskGroup>,
    id: Option<&ProjectId>,
    projects: &[Project],
    locale: Locale,
) -> &'a mut ProjectTaskGroup {
    let index = match groups.iter().position(|g| g.project_id.as_ref() == id) {
        Some(index) => index,
        None => {
            groups.push(ProjectTaskGroup {
                project_id: id.cloned(),
                project_title: project_title(projects, id, locale),
                tasks: Vec::new(),
            });
            groups.len() - 1
        }
    };
    &mut groups[index]
}

fn goal_group<'a>(
    groups: &'a mut Vec<GoalTaskGroup>,
    id: Option<&GoalId>,
    goals: &[Goal],
    locale: Locale,
) -> &'a mut GoalTaskGroup {
    let index = match groups.iter().position(|g| g.goal_id.as_ref() == id) {
        Some(index) => index,
        None => {
            groups.push(GoalTaskGroup {
                goal_id: id.cloned(),
                goal_title: goal_title(goals, id, locale),
                direct_tasks: Vec::new(),
                project_tasks: Vec::new(),
            });
            groups.len() - 1
        }
    };
    &mut groups[index]
}

/// `Unknown` tasks belong to no group.
fn group_by_hierarchy(
    today: &[&WorklyTask],
    projects: &[Project],
    goals: &[Goal],
    locale: Locale,
) -> HierarchyGroups {
    let mut groups = HierarchyGroups::default();

    for &task in today {
        match task.hierarchy_type {
            HierarchyType::Independent => groups.independent.push(task.clone()),
            HierarchyType::ProjectOnly => {
                project_group(&mut groups.by_project, task.project_id.as_ref(), projects, locale)
                    .tasks
                    .push(task.clone());
            }
            HierarchyType::GoalDirect => {
                goal_group(&mut groups.by_goal, task.goal_id.as_ref(), goals, locale)
                    .direct_tasks
                    .push(task.clone());
            }
            HierarchyType::FullHierarchy => {
                project_group(&mut groups.by_project, task.project_id.as_ref(), projects, locale)
                    .tasks
                    .push(task.clone());
                let goal = goal_group(&mut groups.by_goal, task.goal_id.as_ref(), goals, locale);
                project_group(&mut goal.project_tasks, task.project_id.as_ref(), projects, locale)
                    .tasks
                    .push(task.clone());
            }
            HierarchyType::Unknown => {}
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::placement::HierarchyPlacement;
    use crate::hierarchy::policy::HierarchyPolicy;
    use crate::task::value_objects::{CperStage, TaskId};

    // ==================== Helpers ====================

    fn executing(id: &str) -> WorklyTask {
        WorklyTask::new(id, id)
            .with_stage(CperStage::Executing)
            .scheduled_today()
    }

    fn ids(tasks: &[WorklyTask]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    fn projects() -> Vec<Project> {
        vec![
            Project::new("p1", "Website"),
            Project::new("p2", "Hiring"),
        ]
    }

    fn goals() -> Vec<Goal> {
        vec![Goal::new("g1", "Grow revenue")]
    }

    /// 2 focused, 1 urgent, 2 plain (one with a next action).
    fn five_tasks() -> Vec<WorklyTask> {
        vec![
            executing("f1").focused().with_estimated_minutes(60),
            executing("f2").focused().with_priority(Priority::Urgent).with_estimated_minutes(30),
            executing("u1").with_priority(Priority::Urgent).with_estimated_minutes(45),
            executing("r1").with_next_action("Open the spreadsheet").with_estimated_minutes(20),
            executing("p1").with_estimated_minutes(25),
        ]
    }

    // ==================== Filtering ====================

    #[test]
    fn only_executing_today_tasks_participate() {
        let tasks = vec![
            executing("in"),
            WorklyTask::new("not-today", "x").with_stage(CperStage::Executing),
            WorklyTask::new("planned", "x").with_stage(CperStage::Planned).scheduled_today(),
            WorklyTask::new("done", "x").with_stage(CperStage::Completed).scheduled_today(),
        ];

        let view = optimize_today_tasks(&tasks, &[], &[]);
        assert_eq!(view.time_analysis.task_count, 1);
        assert_eq!(ids(&view.today_tasks), vec!["in"]);
    }

    // ==================== Partitioning ====================

    #[test]
    fn five_task_scenario() {
        let view = optimize_today_tasks(&five_tasks(), &[], &[]);
        assert_eq!(ids(&view.focused_tasks), vec!["f1", "f2"]);
        assert_eq!(ids(&view.urgent_tasks), vec!["u1"]);
        assert_eq!(ids(&view.today_tasks), vec!["p1"]);
        assert!(view.today_tasks.len() <= 2);
    }

    #[test]
    fn focused_urgent_and_remaining_are_disjoint_and_cover_everything_without_next_action() {
        let tasks = five_tasks();
        let view = optimize_today_tasks(&tasks, &[], &[]);

        for task in tasks.iter().filter(|t| !t.has_next_action()) {
            let hits = [&view.focused_tasks, &view.urgent_tasks, &view.today_tasks]
                .iter()
                .filter(|bucket| bucket.iter().any(|t| t.id == task.id))
                .count();
            assert_eq!(hits, 1, "task {} appears in {} buckets", task.id, hits);
        }
    }

    #[test]
    fn overlapping_ready_bucket_includes_focused_and_urgent() {
        let tasks = vec![
            executing("f").focused().with_next_action("a"),
            executing("u").with_priority(Priority::Urgent).with_next_action("b"),
            executing("r").with_next_action("c"),
            executing("plain"),
        ];
        let view = optimize_today_tasks(&tasks, &[], &[]);

        assert_eq!(ids(&view.ready_to_start_tasks), vec!["f", "u", "r"]);
        // the ready task is in no precedence bucket other than ready
        assert_eq!(ids(&view.today_tasks), vec!["plain"]);
        assert_eq!(ids(&view.focused_tasks), vec!["f"]);
        assert_eq!(ids(&view.urgent_tasks), vec!["u"]);
    }

    #[test]
    fn exclusive_ready_bucket_skips_focused_and_urgent() {
        let tasks = vec![
            executing("f").focused().with_next_action("a"),
            executing("u").with_priority(Priority::Urgent).with_next_action("b"),
            executing("r").with_next_action("c"),
            executing("plain"),
        ];
        let manager = HierarchyManager::new(
            HierarchyPolicy::default().with_ready_to_start(ReadyToStartMode::Exclusive),
        );
        let view = manager.optimize_today_tasks(&tasks, &[], &[]);

        assert_eq!(ids(&view.ready_to_start_tasks), vec!["r"]);
        assert_eq!(ids(&view.today_tasks), vec!["plain"]);

        // in exclusive mode the four buckets partition the filtered set
        let total = view.focused_tasks.len()
            + view.urgent_tasks.len()
            + view.ready_to_start_tasks.len()
            + view.today_tasks.len();
        assert_eq!(total, view.time_analysis.task_count);
    }

    #[test]
    fn blank_next_action_is_not_ready() {
        let tasks = vec![
            executing("empty").with_next_action(""),
            executing("spaces").with_next_action("  \t "),
        ];
        let view = optimize_today_tasks(&tasks, &[], &[]);
        assert!(view.ready_to_start_tasks.is_empty());
        assert_eq!(ids(&view.today_tasks), vec!["empty", "spaces"]);
    }

    // ==================== Grouping ====================

    #[test]
    fn groups_by_hierarchy() {
        let tasks = vec![
            executing("i1"),
            executing("po1").with_placement(HierarchyPlacement::project_only("p1")),
            executing("gd1").with_placement(HierarchyPlacement::goal_direct("g1")),
            executing("fh1").with_placement(HierarchyPlacement::full_hierarchy("p2", "g1")),
            executing("po2").with_placement(HierarchyPlacement::project_only("p1")),
        ];
        let view = optimize_today_tasks(&tasks, &projects(), &goals());
        let groups = &view.hierarchy_groups;

        assert_eq!(ids(&groups.independent), vec!["i1"]);

        assert_eq!(groups.by_project.len(), 2);
        assert_eq!(groups.by_project[0].project_title, "Website");
        assert_eq!(ids(&groups.by_project[0].tasks), vec!["po1", "po2"]);
        assert_eq!(groups.by_project[1].project_title, "Hiring");
        assert_eq!(ids(&groups.by_project[1].tasks), vec!["fh1"]);

        assert_eq!(groups.by_goal.len(), 1);
        let goal = &groups.by_goal[0];
        assert_eq!(goal.goal_title, "Grow revenue");
        assert_eq!(ids(&goal.direct_tasks), vec!["gd1"]);
        assert_eq!(goal.project_tasks.len(), 1);
        assert_eq!(goal.project_tasks[0].project_title, "Hiring");
        assert_eq!(ids(&goal.project_tasks[0].tasks), vec!["fh1"]);
        assert_eq!(goal.task_count(), 2);
    }

    #[test]
    fn unresolved_references_get_placeholders() {
        let tasks = vec![
            executing("a").with_placement(HierarchyPlacement::full_hierarchy("p-x", "g-x")),
        ];
        let view = optimize_today_tasks(&tasks, &[], &[]);
        let groups = &view.hierarchy_groups;
        assert_eq!(groups.by_project[0].project_title, "Unresolved project");
        assert_eq!(groups.by_goal[0].goal_title, "Unresolved goal");
        assert_eq!(
            groups.by_goal[0].project_tasks[0].project_title,
            "Unresolved project"
        );
    }

    #[test]
    fn missing_ids_group_under_placeholder() {
        let mut broken = executing("broken");
        broken.hierarchy_type = HierarchyType::ProjectOnly;
        let view = optimize_today_tasks(&[broken], &projects(), &goals());
        let group = &view.hierarchy_groups.by_project[0];
        assert_eq!(group.project_id, None);
        assert_eq!(group.project_title, "Unresolved project");
    }

    #[test]
    fn unknown_type_is_bucketed_but_not_grouped() {
        let mut odd = executing("odd");
        odd.hierarchy_type = HierarchyType::Unknown;
        let view = optimize_today_tasks(&[odd], &[], &[]);
        assert_eq!(ids(&view.today_tasks), vec!["odd"]);
        assert!(view.hierarchy_groups.independent.is_empty());
        assert!(view.hierarchy_groups.by_project.is_empty());
        assert!(view.hierarchy_groups.by_goal.is_empty());
    }

    // ==================== Time analysis ====================

    #[test]
    fn time_analysis_totals() {
        let view = optimize_today_tasks(&five_tasks(), &[], &[]);
        let time = &view.time_analysis;
        assert_eq!(time.total_estimated_minutes, 180.0);
        assert_eq!(time.focused_tasks_minutes, 90.0);
        assert!((time.average_task_minutes - 36.0).abs() < 1e-9);
        assert_eq!(time.recommended_daily_limit, 480);
        assert!(!time.over_capacity);
    }

    #[test]
    fn time_analysis_empty_input() {
        let view = optimize_today_tasks(&[], &[], &[]);
        let time = &view.time_analysis;
        assert_eq!(time.task_count, 0);
        assert_eq!(time.total_estimated_minutes, 0.0);
        assert_eq!(time.average_task_minutes, 0.0);
    }

    #[test]
    fn over_capacity_when_above_limit() {
        let tasks = vec![executing("long").with_estimated_minutes(500)];
        let view = optimize_today_tasks(&tasks, &[], &[]);
        assert!(view.time_analysis.over_capacity);
    }

    #[test]
    fn fractional_estimates_are_summed_exactly() {
        let tasks = vec![
            executing("a").focused().with_estimated_minutes(22.5),
            executing("b").with_estimated_minutes(7.5),
        ];
        let time = optimize_today_tasks(&tasks, &[], &[]).time_analysis;
        assert_eq!(time.total_estimated_minutes, 30.0);
        assert_eq!(time.focused_tasks_minutes, 22.5);
        assert_eq!(time.average_task_minutes, 15.0);
    }

    #[test]
    fn optimization_is_deterministic() {
        let tasks = five_tasks();
        let first = optimize_today_tasks(&tasks, &projects(), &goals());
        let second = optimize_today_tasks(&tasks, &projects(), &goals());
        assert_eq!(first, second);
        assert_eq!(tasks[0].id, TaskId::new("f1"));
    }
}
