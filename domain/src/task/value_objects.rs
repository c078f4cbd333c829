//! Task domain value objects - immutable identifiers and planning attributes.
//!
//! # Identifiers
//! - [`TaskId`], [`ProjectId`], [`GoalId`] - opaque ids assigned by the task store
//!
//! # Planning
//! - [`Priority`] - task priority and its contribution weight
//! - [`CperStage`] - position in the Capture–Plan–Execute–Review workflow

use serde::{Deserialize, Serialize};

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

opaque_id!(
    /// Unique identifier for a task.
    TaskId
);
opaque_id!(
    /// Unique identifier for a project.
    ProjectId
);
opaque_id!(
    /// Unique identifier for a goal.
    GoalId
);

/// Task priority.
///
/// Besides ordering, each priority carries a weight that scales the
/// task's estimated contribution to its project and goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl Priority {
    /// Multiplier applied to contribution estimates.
    pub fn weight(&self) -> f64 {
        match self {
            Priority::Urgent => 2.0,
            Priority::High => 1.5,
            Priority::Medium => 1.0,
            Priority::Low => 0.7,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "urgent" => Ok(Priority::Urgent),
            _ => Err(format!(
                "Unknown priority: {}. Valid: low, medium, high, urgent",
                s
            )),
        }
    }
}

/// Stage of the CPER (Capture–Plan–Execute–Review) workflow.
///
/// Stages progress linearly; the engine only reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CperStage {
    #[default]
    Captured,
    Planned,
    Executing,
    Completed,
    Reviewed,
}

impl CperStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            CperStage::Captured => "captured",
            CperStage::Planned => "planned",
            CperStage::Executing => "executing",
            CperStage::Completed => "completed",
            CperStage::Reviewed => "reviewed",
        }
    }

    pub fn is_executing(&self) -> bool {
        matches!(self, CperStage::Executing)
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, CperStage::Completed)
    }
}

impl std::fmt::Display for CperStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
