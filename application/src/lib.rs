//! Application layer for workly
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    audit_log::{AuditEvent, AuditLog, NoAuditLog},
    task_store::{HierarchyPatch, StoreError, TaskStore},
};
pub use use_cases::analyze_task::{AnalyzeTaskError, AnalyzeTaskUseCase, TaskReport};
pub use use_cases::change_hierarchy::{
    ChangeHierarchyError, ChangeHierarchyInput, ChangeHierarchyOutput, ChangeHierarchyUseCase,
};
pub use use_cases::plan_today::PlanTodayUseCase;
