//! Domain layer for workly
//!
//! This crate contains the hierarchy engine: entities, value objects and
//! the pure functions that analyze them. It performs no I/O and has no
//! dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Hierarchy type
//!
//! Every task is either independent, part of a project, attached directly
//! to a goal, or part of a project that serves a goal
//! ([`HierarchyType`]).
//!
//! ## Analytics
//!
//! - **Contribution**: heuristic share of a project/goal one task completes
//! - **Independence**: how self-contained a task is, from its type alone
//! - **Today view**: focused / urgent / ready / remaining buckets
//!
//! All operations hang off [`HierarchyManager`]; free functions such as
//! [`analyze_hierarchy`] use the default [`HierarchyPolicy`].

pub mod config;
pub mod core;
pub mod hierarchy;
pub mod task;
pub mod today;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{error::DomainError, locale::Locale};
pub use hierarchy::{
    ConsistencyIssue, GoalConnection, GoalContribution, HierarchyAnalytics, HierarchyImpact,
    HierarchyManager, HierarchyPlacement, HierarchyPolicy, HierarchyRecommendations,
    HierarchyType, HierarchyValidation, ProjectContribution, analyze_hierarchy,
    can_change_hierarchy, change_hierarchy, hierarchy_path,
};
pub use task::{
    entities::{CperWorkflow, ExecutionData, Goal, Project, WorklyTask},
    snapshot::WorkspaceSnapshot,
    value_objects::{CperStage, GoalId, Priority, ProjectId, TaskId},
};
pub use today::{
    GoalTaskGroup, HierarchyGroups, ProjectTaskGroup, ReadyToStartMode, TimeAnalysis,
    TodayTasksOptimized, optimize_today_tasks,
};
