//! Change Hierarchy use case.
//!
//! Validates a move, applies it with the domain executor, and writes the
//! result back through the [`TaskStore`].
//!
//! ```text
//! load snapshot ─▶ can_change_hierarchy ─┬─▶ (verify links) ─▶ change_hierarchy ─▶ update_task
//!                                        └── rejected ─▶ audit
//! ```

use crate::ports::audit_log::{AuditEvent, AuditLog, NoAuditLog};
use crate::ports::task_store::{HierarchyPatch, StoreError, TaskStore};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};
use workly_domain::{
    DomainError, HierarchyManager, HierarchyPlacement, HierarchyValidation, TaskId, WorklyTask,
    WorkspaceSnapshot,
};

/// Errors that can occur while changing a task's hierarchy.
#[derive(Error, Debug)]
pub enum ChangeHierarchyError {
    #[error("Task not found: {0}")]
    TaskNotFound(TaskId),

    #[error("Hierarchy change rejected: {}", .0.error_message())]
    Rejected(HierarchyValidation),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl ChangeHierarchyError {
    /// The validation that blocked the change, if any.
    pub fn validation(&self) -> Option<&HierarchyValidation> {
        match self {
            ChangeHierarchyError::Rejected(validation) => Some(validation),
            _ => None,
        }
    }
}

/// Input for the Change Hierarchy use case.
#[derive(Debug, Clone)]
pub struct ChangeHierarchyInput {
    pub task_id: TaskId,
    pub target: HierarchyPlacement,
    /// Validate and compute the result without writing it.
    pub dry_run: bool,
}

impl ChangeHierarchyInput {
    pub fn new(task_id: impl Into<TaskId>, target: HierarchyPlacement) -> Self {
        Self {
            task_id: task_id.into(),
            target,
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Result of an accepted hierarchy change.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeHierarchyOutput {
    pub before: WorklyTask,
    /// The stored task, or the computed one on a dry run.
    pub task: WorklyTask,
    /// Warnings and suggestions that did not block the change.
    pub validation: HierarchyValidation,
    pub persisted: bool,
}

/// Use case for moving a task within the project/goal tree.
pub struct ChangeHierarchyUseCase {
    store: Arc<dyn TaskStore>,
    audit: Arc<dyn AuditLog>,
    manager: HierarchyManager,
    verify_links: bool,
}

impl ChangeHierarchyUseCase {
    pub fn new(store: Arc<dyn TaskStore>, manager: HierarchyManager) -> Self {
        Self {
            store,
            audit: Arc::new(NoAuditLog),
            manager,
            verify_links: true,
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_audit_log(mut self, audit: Arc<dyn AuditLog>) -> Self {
        self.audit = audit;
        self
    }

    /// Check the target against known projects and goals before applying.
    pub fn with_link_verification(mut self, enabled: bool) -> Self {
        self.verify_links = enabled;
        self
    }

    /// Validate a change without applying it.
    pub async fn validate(
        &self,
        task_id: &TaskId,
        target: &HierarchyPlacement,
    ) -> Result<HierarchyValidation, ChangeHierarchyError> {
        let snapshot = self.store.load_snapshot().await?;
        let task = find_task(&snapshot, task_id)?;
        Ok(self.check(&snapshot, task, target))
    }

    fn check(
        &self,
        snapshot: &WorkspaceSnapshot,
        task: &WorklyTask,
        target: &HierarchyPlacement,
    ) -> HierarchyValidation {
        let validation = self.manager.can_change_hierarchy(task, target);
        if !self.verify_links {
            return validation;
        }
        validation.merge(self.manager.verify_hierarchy_links(
            target,
            &snapshot.projects,
            &snapshot.goals,
        ))
    }

    pub async fn execute(
        &self,
        input: ChangeHierarchyInput,
    ) -> Result<ChangeHierarchyOutput, ChangeHierarchyError> {
        let ChangeHierarchyInput {
            task_id,
            target,
            dry_run,
        } = input;

        info!(
            "Changing hierarchy of {} to {}{}",
            task_id,
            target.hierarchy_type,
            if dry_run { " (dry run)" } else { "" }
        );

        let snapshot = self.store.load_snapshot().await?;
        let before = find_task(&snapshot, &task_id)?.clone();

        let validation = self.check(&snapshot, &before, &target);
        if !validation.is_valid {
            warn!("Rejected change for {}: {}", task_id, validation.error_message());
            self.audit.record(AuditEvent::new(
                "hierarchy_change_rejected",
                json!({
                    "task_id": task_id,
                    "target": target,
                    "errors": validation.errors,
                    "dry_run": dry_run,
                }),
            ));
            return Err(ChangeHierarchyError::Rejected(validation));
        }

        for note in validation.warnings.iter().chain(&validation.suggestions) {
            debug!("{}: {}", task_id, note);
        }

        let updated = self
            .manager
            .change_hierarchy(&task_id, target.clone(), &before)?;

        if dry_run {
            return Ok(ChangeHierarchyOutput {
                before,
                task: updated,
                validation,
                persisted: false,
            });
        }

        let stored = self
            .store
            .update_task(&task_id, HierarchyPatch::from_task(&updated))
            .await?;

        info!(
            "Task {} moved from {} to {}",
            task_id, before.hierarchy_type, stored.hierarchy_type
        );
        self.audit.record(AuditEvent::new(
            "hierarchy_changed",
            json!({
                "task_id": task_id,
                "from": before.placement(),
                "to": target,
                "warnings": validation.warnings,
                "updated_at": stored.updated_at,
            }),
        ));

        Ok(ChangeHierarchyOutput {
            before,
            task: stored,
            validation,
            persisted: true,
        })
    }
}

fn find_task<'a>(
    snapshot: &'a WorkspaceSnapshot,
    task_id: &TaskId,
) -> Result<&'a WorklyTask, ChangeHierarchyError> {
    snapshot
        .task(task_id)
        .ok_or_else(|| ChangeHierarchyError::TaskNotFound(task_id.clone()))
}
