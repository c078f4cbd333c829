//! Domain error types

use crate::task::value_objects::TaskId;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A hierarchy change was blocked by the change validator.
    ///
    /// Carries the validator's error messages joined into one line.
    #[error("Hierarchy change rejected: {0}")]
    Validation(String),

    #[error("Task id mismatch: expected {expected}, got {actual}")]
    TaskMismatch { expected: TaskId, actual: TaskId },

    #[error("Unknown hierarchy type: {0}")]
    UnknownHierarchyType(String),
}

impl DomainError {
    /// Check if this error represents a blocked hierarchy change
    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::Validation(_))
    }
}
