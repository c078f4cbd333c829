//! Console output formatter for engine results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use workly_application::{ChangeHierarchyOutput, TaskReport};
use workly_domain::{
    GoalConnection, HierarchyPlacement, HierarchyValidation, Priority, ProjectTaskGroup, TaskId,
    TodayTasksOptimized, WorklyTask,
};

/// Formats engine results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    pub fn format_path(task: &WorklyTask, path: &str) -> String {
        format!("{} {}\n", format!("{}:", task.id).dimmed(), path)
    }

    /// Format the analysis of one task
    pub fn format_report(report: &TaskReport) -> String {
        let mut output = String::new();
        let task = &report.task;
        let analytics = &report.analytics;

        output.push_str(&Self::header(&format!("{} ({})", task.title, task.id)));
        output.push('\n');

        output.push_str(&Self::field("Path:", &report.path));
        output.push_str(&Self::field("Type:", analytics.hierarchy_type.as_str()));
        output.push_str(&Self::field(
            "Stage:",
            &format!("{}, {} priority", task.stage(), task.priority),
        ));
        output.push_str(&Self::field(
            "Independence:",
            &analytics.impact.independence.to_string(),
        ));

        if let Some(project) = &analytics.project {
            output.push_str(&Self::field(
                "Project:",
                &format!(
                    "{}  {}",
                    project.title,
                    Self::percentage(project.contribution_percentage)
                ),
            ));
        }

        if let Some(goal) = &analytics.goal {
            let via = match goal.connection {
                GoalConnection::Direct => "direct",
                GoalConnection::ViaProject => "via project",
            };
            output.push_str(&Self::field(
                "Goal:",
                &format!(
                    "{} ({})  {}",
                    goal.title,
                    via,
                    Self::percentage(goal.contribution_percentage)
                ),
            ));
        }

        if !report.consistency_issues.is_empty() {
            output.push_str(&format!("\n{}\n", "Inconsistent placement:".red().bold()));
            for issue in &report.consistency_issues {
                output.push_str(&format!("  * {}\n", issue));
            }
        }

        if !analytics.recommendations.is_empty() {
            output.push_str(&format!("\n{}\n", "Recommendations:".yellow().bold()));
            for recommendation in analytics.recommendations.iter() {
                output.push_str(&format!("  * {}\n", recommendation));
            }
        }

        output
    }

    pub fn format_reports(reports: &[TaskReport]) -> String {
        if reports.is_empty() {
            return format!("{}\n", "No tasks in workspace.".dimmed());
        }
        reports
            .iter()
            .map(Self::format_report)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn format_validation(
        task_id: &TaskId,
        target: &HierarchyPlacement,
        validation: &HierarchyValidation,
    ) -> String {
        let mut output = String::new();

        let verdict = if validation.is_valid {
            "allowed".green().bold()
        } else {
            "rejected".red().bold()
        };
        output.push_str(&format!(
            "{} -> {}: {}\n",
            task_id,
            Self::describe_placement(target),
            verdict
        ));
        output.push_str(&Self::notes(validation));

        output
    }

    /// Format the today view
    pub fn format_today(view: &TodayTasksOptimized) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Today"));
        output.push('\n');

        output.push_str(&Self::task_section("Focused", &view.focused_tasks));
        output.push_str(&Self::task_section("Urgent", &view.urgent_tasks));
        output.push_str(&Self::task_section("Ready to start", &view.ready_to_start_tasks));
        output.push_str(&Self::task_section("Other", &view.today_tasks));

        let groups = &view.hierarchy_groups;
        output.push_str(&Self::section_header("By hierarchy"));
        if !groups.independent.is_empty() {
            output.push_str(&format!(
                "{} ({})\n",
                "Independent".bold(),
                groups.independent.len()
            ));
        }
        for group in &groups.by_project {
            output.push_str(&Self::project_group_line(group, ""));
        }
        for goal in &groups.by_goal {
            output.push_str(&format!(
                "{} {} ({})\n",
                "Goal".cyan(),
                goal.goal_title.bold(),
                goal.task_count()
            ));
            if !goal.direct_tasks.is_empty() {
                output.push_str(&format!("  direct ({})\n", goal.direct_tasks.len()));
            }
            for group in &goal.project_tasks {
                output.push_str(&Self::project_group_line(group, "  "));
            }
        }

        let time = &view.time_analysis;
        output.push_str(&Self::section_header("Time"));
        let planned = format!(
            "{} / {} min",
            time.total_estimated_minutes, time.recommended_daily_limit
        );
        output.push_str(&Self::field(
            "Planned:",
            &if time.over_capacity {
                format!("{} {}", planned.red().bold(), "(over capacity)".red())
            } else {
                planned.green().to_string()
            },
        ));
        output.push_str(&Self::field(
            "Focused:",
            &format!("{} min", time.focused_tasks_minutes),
        ));
        output.push_str(&Self::field(
            "Average:",
            &format!(
                "{:.0} min over {} tasks",
                time.average_task_minutes, time.task_count
            ),
        ));

        output
    }

    pub fn format_change(result: &ChangeHierarchyOutput) -> String {
        let mut output = String::new();

        let from = Self::describe_placement(&result.before.placement());
        let to = Self::describe_placement(&result.task.placement());
        if result.persisted {
            output.push_str(&format!(
                "{} {}: {} -> {}\n",
                "Moved".green().bold(),
                result.task.id,
                from,
                to
            ));
        } else {
            output.push_str(&format!(
                "{} {}: {} -> {}\n",
                "Would move".yellow().bold(),
                result.task.id,
                from,
                to
            ));
        }
        output.push_str(&Self::notes(&result.validation));

        output
    }

    fn notes(validation: &HierarchyValidation) -> String {
        let mut output = String::new();
        for error in &validation.errors {
            output.push_str(&format!("  {} {}\n", "error:".red().bold(), error));
        }
        for warning in &validation.warnings {
            output.push_str(&format!("  {} {}\n", "warning:".yellow().bold(), warning));
        }
        for suggestion in &validation.suggestions {
            output.push_str(&format!("  {} {}\n", "hint:".cyan(), suggestion));
        }
        output
    }

    fn describe_placement(placement: &HierarchyPlacement) -> String {
        let mut text = placement.hierarchy_type.to_string();
        let ids: Vec<&str> = [
            placement.project_id.as_ref().map(|p| p.as_str()),
            placement.goal_id.as_ref().map(|g| g.as_str()),
        ]
        .into_iter()
        .flatten()
        .collect();
        if !ids.is_empty() {
            text.push_str(&format!(" [{}]", ids.join(", ")));
        }
        text
    }

    fn task_section(title: &str, tasks: &[WorklyTask]) -> String {
        if tasks.is_empty() {
            return String::new();
        }
        let mut output = Self::section_header(&format!("{} ({})", title, tasks.len()));
        for task in tasks {
            output.push_str(&Self::task_line(task));
        }
        output
    }

    fn task_line(task: &WorklyTask) -> String {
        let marker = match task.priority {
            Priority::Urgent => "!!".red().bold(),
            Priority::High => "! ".yellow().bold(),
            _ => "  ".normal(),
        };
        let mut line = format!(
            "{} {} {}",
            marker,
            task.title,
            format!("[{}, {} min]", task.id, task.estimated_minutes).dimmed()
        );
        if let Some(action) = task.next_action.as_deref().filter(|a| !a.trim().is_empty()) {
            line.push_str(&format!("\n     {} {}", "next:".dimmed(), action));
        }
        line.push('\n');
        line
    }

    fn project_group_line(group: &ProjectTaskGroup, indent: &str) -> String {
        format!(
            "{}{} {} ({})\n",
            indent,
            "Project".cyan(),
            group.project_title.bold(),
            group.tasks.len()
        )
    }

    fn percentage(value: f64) -> String {
        format!("{:.2}%", value).bold().to_string()
    }

    fn field(label: &str, value: &str) -> String {
        format!("  {:<14} {}\n", label.cyan(), value)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_path(&self, task: &WorklyTask, path: &str) -> String {
        Self::format_path(task, path)
    }

    fn format_report(&self, report: &TaskReport) -> String {
        Self::format_report(report)
    }

    fn format_reports(&self, reports: &[TaskReport]) -> String {
        Self::format_reports(reports)
    }

    fn format_validation(
        &self,
        task_id: &TaskId,
        target: &HierarchyPlacement,
        validation: &HierarchyValidation,
    ) -> String {
        Self::format_validation(task_id, target, validation)
    }

    fn format_today(&self, view: &TodayTasksOptimized) -> String {
        Self::format_today(view)
    }

    fn format_change(&self, output: &ChangeHierarchyOutput) -> String {
        Self::format_change(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use workly_domain::{CperStage, Goal, HierarchyManager, Project, optimize_today_tasks};

    fn plain() {
        colored::control::set_override(false);
    }

    fn report() -> TaskReport {
        let task = WorklyTask::new("t1", "Draft outline")
            .with_placement(HierarchyPlacement::full_hierarchy("p1", "g1"))
            .with_estimated_minutes(240);
        let project = Project::new("p1", "Book").with_tasks_count(10);
        let goal = Goal::new("g1", "Publish").with_project_count(1);
        let manager = HierarchyManager::default();
        TaskReport {
            path: manager.hierarchy_path(&task, Some(&project), Some(&goal)),
            analytics: manager.analyze_hierarchy(&task, Some(&project), Some(&goal)),
            consistency_issues: task.consistency_issues(),
            task,
        }
    }

    #[test]
    fn test_report_shows_contributions() {
        plain();
        let text = ConsoleFormatter::format_report(&report());
        assert!(text.contains("Publish > Book"));
        assert!(text.contains("full_hierarchy"));
        // 100/10 * 1.0 * 0.5
        assert!(text.contains("5.00%"));
        assert!(text.contains("via project"));
        assert!(!text.contains("Recommendations"));
    }

    #[test]
    fn test_validation_lists_errors() {
        plain();
        let mut validation = HierarchyValidation::valid();
        validation.error("completed tasks are locked");
        let text = ConsoleFormatter::format_validation(
            &TaskId::new("t1"),
            &HierarchyPlacement::project_only("p1"),
            &validation,
        );
        assert!(text.contains("t1 -> project_only [p1]: rejected"));
        assert!(text.contains("error: completed tasks are locked"));
    }

    #[test]
    fn test_today_flags_over_capacity() {
        plain();
        let tasks = vec![
            WorklyTask::new("a", "Long haul")
                .with_stage(CperStage::Executing)
                .with_estimated_minutes(600)
                .scheduled_today()
                .with_next_action("open the doc"),
        ];
        let view = optimize_today_tasks(&tasks, &[], &[]);
        let text = ConsoleFormatter::format_today(&view);
        assert!(text.contains("Ready to start (1)"));
        assert!(text.contains("next: open the doc"));
        assert!(text.contains("over capacity"));
    }
}
