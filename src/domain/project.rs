//! Projects and their active/completed task buckets.

use serde::{Deserialize, Serialize};

use super::stats::ProjectStats;
use super::task::Task;

/// A named project holding two ordered buckets of tasks.
///
/// Insertion order is preserved within each bucket. A task lives in exactly
/// one bucket, and every task in `completed` has its flag set.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    active: Vec<Task>,
    completed: Vec<Task>,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            active: Vec::new(),
            completed: Vec::new(),
        }
    }

    pub fn active(&self) -> &[Task] {
        &self.active
    }

    pub fn completed(&self) -> &[Task] {
        &self.completed
    }

    /// Active tasks followed by completed tasks.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.active.iter().chain(self.completed.iter())
    }

    pub fn len(&self) -> usize {
        self.active.len() + self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// File a task into the bucket matching its completion flag.
    pub fn insert(&mut self, task: Task) {
        if task.completed {
            self.completed.push(task);
        } else {
            self.active.push(task);
        }
    }

    /// Move an active task to the end of the completed bucket.
    ///
    /// Returns false if no active task has this ID.
    pub fn complete(&mut self, task_id: &str) -> bool {
        let Some(index) = self.active.iter().position(|t| t.id == task_id) else {
            return false;
        };
        let task = self.active.remove(index);
        self.completed.push(task.into_completed());
        true
    }

    /// Find a task in either bucket.
    pub fn find(&self, task_id: &str) -> Option<&Task> {
        self.tasks().find(|t| t.id == task_id)
    }

    pub fn stats(&self) -> ProjectStats {
        let mut stats = ProjectStats::default();
        for task in self.tasks() {
            stats.record(task.priority);
        }
        stats.completed = self.completed.len();
        stats
    }
}

/// A task annotated with the name of the project that owns it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectTask {
    pub project: String,
    #[serde(flatten)]
    pub task: Task,
}

impl ProjectTask {
    pub fn new(project: impl Into<String>, task: Task) -> Self {
        Self {
            project: project.into(),
            task,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::task::{NewTask, Priority};

    fn task(id: &str, data: NewTask) -> Task {
        Task::from_new(id.to_string(), data)
    }

    #[test]
    fn test_insert_files_by_completion_flag() {
        let mut project = Project::new("Home");
        project.insert(task("a", NewTask::new("Dishes")));
        project.insert(task("b", NewTask::new("Laundry").completed(true)));

        assert_eq!(project.active().len(), 1);
        assert_eq!(project.completed().len(), 1);
        assert_eq!(project.active()[0].id, "a");
        assert_eq!(project.completed()[0].id, "b");
    }

    #[test]
    fn test_complete_moves_to_end_of_completed() {
        let mut project = Project::new("Home");
        project.insert(task("a", NewTask::new("One")));
        project.insert(task("b", NewTask::new("Two").completed(true)));
        project.insert(task("c", NewTask::new("Three")));

        assert!(project.complete("a"));

        let active: Vec<_> = project.active().iter().map(|t| t.id.as_str()).collect();
        let completed: Vec<_> = project.completed().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(active, vec!["c"]);
        assert_eq!(completed, vec!["b", "a"]);
        assert!(project.completed().iter().all(|t| t.completed));
    }

    #[test]
    fn test_serialized_buckets_keep_completion_flags() {
        let mut project = Project::new("Home");
        project.insert(task("a", NewTask::new("One")));
        project.insert(task("b", NewTask::new("Two")));
        project.complete("b");

        let value = serde_json::to_value(&project).unwrap();
        assert_eq!(value["name"], "Home");
        assert_eq!(value["active"][0]["completed"], false);
        assert_eq!(value["completed"][0]["id"], "b");
        assert_eq!(value["completed"][0]["completed"], true);
    }

    #[test]
    fn test_complete_only_from_active() {
        let mut project = Project::new("Home");
        project.insert(task("a", NewTask::new("One").completed(true)));

        assert!(!project.complete("a"));
        assert!(!project.complete("missing"));
        assert_eq!(project.len(), 1);
    }

    #[test]
    fn test_tasks_order_is_active_then_completed() {
        let mut project = Project::new("Home");
        project.insert(task("done", NewTask::new("Done").completed(true)));
        project.insert(task("open", NewTask::new("Open")));

        let ids: Vec<_> = project.tasks().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["open", "done"]);
    }

    #[test]
    fn test_stats_counts_both_buckets() {
        let mut project = Project::new("Home");
        project.insert(task("a", NewTask::new("A").priority(Priority::High)));
        project.insert(task("b", NewTask::new("B").priority(Priority::High).completed(true)));
        project.insert(task("c", NewTask::new("C").priority(Priority::Low)));

        let stats = project.stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.high, 2);
        assert_eq!(stats.medium, 0);
        assert_eq!(stats.low, 1);
    }
}
