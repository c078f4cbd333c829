//! Output formatter trait

use workly_application::{ChangeHierarchyOutput, TaskReport};
use workly_domain::{
    HierarchyPlacement, HierarchyValidation, OutputFormat, TaskId, TodayTasksOptimized,
    WorklyTask,
};

use super::console::ConsoleFormatter;
use super::json::JsonFormatter;

/// Trait for formatting engine results
pub trait OutputFormatter {
    /// Format a task's breadcrumb path
    fn format_path(&self, task: &WorklyTask, path: &str) -> String;

    /// Format the analysis of one task
    fn format_report(&self, report: &TaskReport) -> String;

    /// Format the analysis of several tasks
    fn format_reports(&self, reports: &[TaskReport]) -> String;

    /// Format the outcome of a validation-only check
    fn format_validation(
        &self,
        task_id: &TaskId,
        target: &HierarchyPlacement,
        validation: &HierarchyValidation,
    ) -> String;

    /// Format the today view
    fn format_today(&self, view: &TodayTasksOptimized) -> String;

    /// Format an accepted hierarchy change
    fn format_change(&self, output: &ChangeHierarchyOutput) -> String;
}

/// Pick the formatter for an output format.
pub fn formatter_for(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(ConsoleFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
