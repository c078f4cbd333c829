//! JSON output formatter
//!
//! Emits the engine's own camelCase shapes, pretty-printed, so the output
//! can be fed back into Workly tooling.

use crate::output::formatter::OutputFormatter;
use serde::Serialize;
use serde_json::json;
use workly_application::{ChangeHierarchyOutput, TaskReport};
use workly_domain::{
    HierarchyPlacement, HierarchyValidation, TaskId, TodayTasksOptimized, WorklyTask,
};

pub struct JsonFormatter;

impl JsonFormatter {
    fn render<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_path(&self, task: &WorklyTask, path: &str) -> String {
        Self::render(&json!({ "taskId": task.id, "path": path }))
    }

    fn format_report(&self, report: &TaskReport) -> String {
        Self::render(report)
    }

    fn format_reports(&self, reports: &[TaskReport]) -> String {
        Self::render(reports)
    }

    fn format_validation(
        &self,
        task_id: &TaskId,
        target: &HierarchyPlacement,
        validation: &HierarchyValidation,
    ) -> String {
        Self::render(&json!({
            "taskId": task_id,
            "target": target,
            "validation": validation,
        }))
    }

    fn format_today(&self, view: &TodayTasksOptimized) -> String {
        Self::render(view)
    }

    fn format_change(&self, output: &ChangeHierarchyOutput) -> String {
        Self::render(output)
    }
}
