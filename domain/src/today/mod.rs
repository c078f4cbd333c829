//! Today view
//!
//! Turns a user's task list into the "today" screen: focused, urgent,
//! ready-to-start and remaining buckets, the same tasks grouped by project
//! and goal, and a time budget summary.

pub mod optimizer;
pub mod value_objects;

pub use optimizer::optimize_today_tasks;
pub use value_objects::{
    GoalTaskGroup, HierarchyGroups, ProjectTaskGroup, ReadyToStartMode, TimeAnalysis,
    TodayTasksOptimized,
};
