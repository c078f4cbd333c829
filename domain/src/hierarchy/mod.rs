//! Hierarchy classification and contribution scoring.
//!
//! A Workly task hangs off the project/goal tree in one of four ways
//! ([`kind::HierarchyType`]). This module formats that position, validates
//! moves within the tree, and estimates how much a task contributes to its
//! parents.
//!
//! ```text
//!   Goal ─────────────┐
//!    │                │
//!    ├── Project      │ goal_direct
//!    │     │          │
//!    │     └── Task   └── Task
//!    │   full_hierarchy
//!    │
//!   Project ── Task (project_only)        Task (independent)
//! ```

pub mod analytics;
pub mod change;
pub mod kind;
pub mod manager;
pub mod path;
pub mod placement;
pub mod policy;
pub mod recommendation;
pub mod validation;

pub use analytics::{
    GoalConnection, GoalContribution, HierarchyAnalytics, HierarchyImpact, ProjectContribution,
    analyze_hierarchy,
};
pub use change::change_hierarchy;
pub use kind::HierarchyType;
pub use manager::HierarchyManager;
pub use path::hierarchy_path;
pub use placement::{ConsistencyIssue, HierarchyPlacement};
pub use policy::HierarchyPolicy;
pub use recommendation::HierarchyRecommendations;
pub use validation::{HierarchyValidation, can_change_hierarchy};
