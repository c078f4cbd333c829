//! Workspace snapshot
//!
//! A consistent set of tasks, projects and goals fetched together. The
//! engine assumes the snapshot is internally consistent and performs no
//! staleness checks.

use super::entities::{Goal, Project, WorklyTask};
use super::value_objects::{GoalId, ProjectId, TaskId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceSnapshot {
    pub tasks: Vec<WorklyTask>,
    pub projects: Vec<Project>,
    pub goals: Vec<Goal>,
}

impl WorkspaceSnapshot {
    pub fn new(tasks: Vec<WorklyTask>, projects: Vec<Project>, goals: Vec<Goal>) -> Self {
        Self {
            tasks,
            projects,
            goals,
        }
    }

    pub fn task(&self, id: &TaskId) -> Option<&WorklyTask> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    pub fn task_mut(&mut self, id: &TaskId) -> Option<&mut WorklyTask> {
        self.tasks.iter_mut().find(|t| &t.id == id)
    }

    pub fn project(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| &p.id == id)
    }

    pub fn goal(&self, id: &GoalId) -> Option<&Goal> {
        self.goals.iter().find(|g| &g.id == id)
    }

    /// The project and goal a task points at, when present in the snapshot.
    pub fn references_of(&self, task: &WorklyTask) -> (Option<&Project>, Option<&Goal>) {
        let project = task.project_id.as_ref().and_then(|id| self.project(id));
        let goal = task.goal_id.as_ref().and_then(|id| self.goal(id));
        (project, goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::placement::HierarchyPlacement;

    fn snapshot() -> WorkspaceSnapshot {
        WorkspaceSnapshot::new(
            vec![
                WorklyTask::new("t1", "a")
                    .with_placement(HierarchyPlacement::full_hierarchy("p1", "g1")),
                WorklyTask::new("t2", "b")
                    .with_placement(HierarchyPlacement::full_hierarchy("p-missing", "g1")),
            ],
            vec![Project::new("p1", "Website")],
            vec![Goal::new("g1", "Grow revenue")],
        )
    }

    #[test]
    fn test_lookup() {
        let snap = snapshot();
        assert!(snap.task(&TaskId::new("t1")).is_some());
        assert!(snap.task(&TaskId::new("t9")).is_none());
        assert_eq!(snap.project(&ProjectId::new("p1")).unwrap().title, "Website");
    }

    #[test]
    fn test_references_resolve_what_exists() {
        let snap = snapshot();
        let (project, goal) = snap.references_of(&snap.tasks[0]);
        assert!(project.is_some());
        assert!(goal.is_some());

        let (project, goal) = snap.references_of(&snap.tasks[1]);
        assert!(project.is_none());
        assert_eq!(goal.unwrap().title, "Grow revenue");
    }

    #[test]
    fn test_deserialize_partial_file() {
        let snap: WorkspaceSnapshot = serde_json::from_str(r#"{"projects": []}"#).unwrap();
        assert!(snap.tasks.is_empty());
        assert!(snap.goals.is_empty());
    }
}
