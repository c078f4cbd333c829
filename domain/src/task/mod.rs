//! Task, project and goal data model.
//!
//! - [`entities::WorklyTask`] — a task with hierarchy, workflow and planning data
//! - [`entities::Project`], [`entities::Goal`] — read-only parents of tasks
//! - [`snapshot::WorkspaceSnapshot`] — tasks, projects and goals fetched together

pub mod entities;
pub mod snapshot;
pub mod value_objects;
