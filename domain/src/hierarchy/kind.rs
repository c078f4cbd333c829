//! Hierarchy type model
//!
//! The closed set of ways a task relates to projects and goals.

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize};

/// How a task is attached to the project/goal tree.
///
/// | Type            | projectId | goalId |
/// |-----------------|-----------|--------|
/// | `Independent`   | -         | -      |
/// | `ProjectOnly`   | set       | -      |
/// | `GoalDirect`    | -         | set    |
/// | `FullHierarchy` | set       | set    |
///
/// `Unknown` absorbs any unrecognized value coming from the task store so
/// that a single malformed record never fails a whole snapshot. It is never
/// produced by [`FromStr`](std::str::FromStr), and a task cannot be moved to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum HierarchyType {
    Independent,
    ProjectOnly,
    GoalDirect,
    FullHierarchy,
    Unknown,
}

impl HierarchyType {
    /// All assignable hierarchy types.
    pub const ALL: [HierarchyType; 4] = [
        HierarchyType::Independent,
        HierarchyType::ProjectOnly,
        HierarchyType::GoalDirect,
        HierarchyType::FullHierarchy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HierarchyType::Independent => "independent",
            HierarchyType::ProjectOnly => "project_only",
            HierarchyType::GoalDirect => "goal_direct",
            HierarchyType::FullHierarchy => "full_hierarchy",
            HierarchyType::Unknown => "unknown",
        }
    }

    /// Whether tasks of this type carry a `projectId`.
    pub fn requires_project(&self) -> bool {
        matches!(self, HierarchyType::ProjectOnly | HierarchyType::FullHierarchy)
    }

    /// Whether tasks of this type carry a `goalId`.
    pub fn requires_goal(&self) -> bool {
        matches!(self, HierarchyType::GoalDirect | HierarchyType::FullHierarchy)
    }

    /// Whether a task may be placed under this type.
    pub fn is_assignable(&self) -> bool {
        !matches!(self, HierarchyType::Unknown)
    }

    pub fn is_independent(&self) -> bool {
        matches!(self, HierarchyType::Independent)
    }

    /// Advisory 0–100 measure of how self-contained a task of this type is.
    pub fn independence_score(&self) -> u8 {
        match self {
            HierarchyType::Independent => 100,
            HierarchyType::ProjectOnly => 30,
            HierarchyType::GoalDirect => 20,
            HierarchyType::FullHierarchy => 0,
            HierarchyType::Unknown => 50,
        }
    }
}

impl<'de> Deserialize<'de> for HierarchyType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.parse().unwrap_or(HierarchyType::Unknown))
    }
}

impl From<HierarchyType> for String {
    fn from(kind: HierarchyType) -> Self {
        kind.as_str().to_string()
    }
}

impl std::fmt::Display for HierarchyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for HierarchyType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "independent" => Ok(HierarchyType::Independent),
            "project_only" | "project" => Ok(HierarchyType::ProjectOnly),
            "goal_direct" | "goal" => Ok(HierarchyType::GoalDirect),
            "full_hierarchy" | "full" => Ok(HierarchyType::FullHierarchy),
            _ => Err(DomainError::UnknownHierarchyType(s.to_string())),
        }
    }
}
