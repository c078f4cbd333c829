//! Plan Today use case.
//!
//! Loads the workspace and builds the today view with the configured
//! [`HierarchyManager`].

use crate::ports::task_store::{StoreError, TaskStore};
use std::sync::Arc;
use tracing::{info, warn};
use workly_domain::{HierarchyManager, TodayTasksOptimized};

#[derive(Clone)]
pub struct PlanTodayUseCase {
    store: Arc<dyn TaskStore>,
    manager: HierarchyManager,
}

impl PlanTodayUseCase {
    pub fn new(store: Arc<dyn TaskStore>, manager: HierarchyManager) -> Self {
        Self { store, manager }
    }

    pub async fn execute(&self) -> Result<TodayTasksOptimized, StoreError> {
        let snapshot = self.store.load_snapshot().await?;
        let view = self
            .manager
            .optimize_today_tasks(&snapshot.tasks, &snapshot.projects, &snapshot.goals);

        let time = &view.time_analysis;
        info!(
            "Today: {} of {} tasks, {} min planned",
            time.task_count,
            snapshot.tasks.len(),
            time.total_estimated_minutes
        );

        // one focused task per user is expected but not enforced
        if view.focused_tasks.len() > 1 {
            warn!("{} tasks are marked as focused", view.focused_tasks.len());
        }
        if time.over_capacity {
            warn!(
                "Planned {} min exceeds the daily limit of {} min",
                time.total_estimated_minutes, time.recommended_daily_limit
            );
        }

        Ok(view)
    }
}
