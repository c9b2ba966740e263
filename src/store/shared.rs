//! Thread-safe handle around a [`TaskStore`].

use chrono::NaiveDateTime;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::config::StoreConfig;
use super::task_store::TaskStore;
use crate::domain::{NewTask, ProjectStats, ProjectTask, Task};

/// Cloneable handle sharing one store between threads.
///
/// Every operation holds a single store-wide lock for its whole duration.
#[derive(Debug, Clone, Default)]
pub struct SharedTaskStore {
    inner: Arc<Mutex<TaskStore>>,
}

impl SharedTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self::from(TaskStore::with_config(config))
    }

    // Every store operation completes its mutation before anything can
    // panic, so a poisoned lock still guards consistent data.
    fn lock(&self) -> MutexGuard<'_, TaskStore> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add_task(&self, project: &str, data: NewTask) -> String {
        self.lock().add_task(project, data)
    }

    pub fn get_tasks(&self, project: &str, completed: Option<bool>) -> Vec<Task> {
        self.lock().get_tasks(project, completed)
    }

    pub fn get_all_tasks_by_priority(&self) -> Vec<ProjectTask> {
        self.lock().get_all_tasks_by_priority()
    }

    pub fn complete_task(&self, project: &str, task_id: &str) -> bool {
        self.lock().complete_task(project, task_id)
    }

    pub fn get_project_stats(&self, project: &str) -> ProjectStats {
        self.lock().get_project_stats(project)
    }

    pub fn get_overdue_tasks(&self) -> Vec<ProjectTask> {
        self.lock().get_overdue_tasks()
    }

    pub fn get_overdue_tasks_at(&self, now: NaiveDateTime) -> Vec<ProjectTask> {
        self.lock().get_overdue_tasks_at(now)
    }

    pub fn get_task(&self, project: &str, task_id: &str) -> Option<Task> {
        self.lock().get_task(project, task_id)
    }

    pub fn project_names(&self) -> Vec<String> {
        self.lock().project_names()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl From<TaskStore> for SharedTaskStore {
    fn from(store: TaskStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }
}
