//! TaskStore implementation: projects of active and completed tasks held in memory.
//!
//! The store owns every project it has seen. Projects are created on first
//! use and kept in first-seen order, which is the order the cross-project
//! views walk them in. Lookups for unknown projects or task IDs never fail;
//! they return an empty list, `false`, or all-zero stats.

use chrono::NaiveDateTime;
use log::{debug, trace};
use std::collections::HashMap;

use super::config::StoreConfig;
use super::overdue::{is_overdue, local_start_of_day, start_of_day};
use super::priority::sort_by_priority;
use crate::domain::{NewTask, Project, ProjectStats, ProjectTask, Task};
use crate::id::IdGenerator;

/// In-memory task store grouping tasks by project.
#[derive(Debug, Default)]
pub struct TaskStore {
    /// Projects in first-seen order
    projects: Vec<Project>,

    /// Project name -> position in `projects`
    index: HashMap<String, usize>,

    ids: IdGenerator,

    config: StoreConfig,
}

impl TaskStore {
    /// Create an empty store with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with custom settings.
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Add a task to a project, creating the project if needed.
    ///
    /// The task lands in the completed bucket when `data.completed` is set,
    /// otherwise in the active bucket. Returns the assigned ID.
    pub fn add_task(&mut self, project: &str, data: NewTask) -> String {
        let id = self.ids.next_id();
        let task = Task::from_new(id.clone(), data);
        debug!(
            "Adding task {} to project '{}' (priority: {}, completed: {})",
            id, project, task.priority, task.completed
        );
        self.project_entry(project).insert(task);
        id
    }

    /// Copy of a project's tasks.
    ///
    /// `Some(true)` returns completed tasks, `Some(false)` active tasks, and
    /// `None` both (active first). Unknown projects yield an empty list.
    pub fn get_tasks(&self, project: &str, completed: Option<bool>) -> Vec<Task> {
        trace!("Listing tasks for '{}' (completed: {:?})", project, completed);
        let Some(project) = self.project(project) else {
            return Vec::new();
        };
        match completed {
            Some(true) => project.completed().to_vec(),
            Some(false) => project.active().to_vec(),
            None => project.tasks().cloned().collect(),
        }
    }

    /// Every task in the store, highest priority first.
    ///
    /// Ties are broken per the configured [`TieBreak`](super::TieBreak), then
    /// by ID ascending.
    pub fn get_all_tasks_by_priority(&self) -> Vec<ProjectTask> {
        let mut tasks: Vec<ProjectTask> = self
            .projects
            .iter()
            .flat_map(|p| p.tasks().map(move |t| ProjectTask::new(p.name.clone(), t.clone())))
            .collect();
        sort_by_priority(&mut tasks, self.config.ordering.tie_break);
        trace!("Priority view holds {} tasks", tasks.len());
        tasks
    }

    /// Move an active task to the end of its project's completed bucket.
    ///
    /// Returns false when the project is unknown or the ID is not active,
    /// including when the task is already completed.
    pub fn complete_task(&mut self, project: &str, task_id: &str) -> bool {
        let Some(&position) = self.index.get(project) else {
            debug!("Cannot complete {}: unknown project '{}'", task_id, project);
            return false;
        };
        let completed = self.projects[position].complete(task_id);
        if completed {
            debug!("Completed task {} in project '{}'", task_id, project);
        } else {
            debug!("Cannot complete {}: not active in project '{}'", task_id, project);
        }
        completed
    }

    /// Counts for a project; all zero if the project is unknown.
    pub fn get_project_stats(&self, project: &str) -> ProjectStats {
        self.project(project).map(Project::stats).unwrap_or_default()
    }

    /// Active tasks due before the start of today (local time), earliest first.
    pub fn get_overdue_tasks(&self) -> Vec<ProjectTask> {
        self.overdue_since(local_start_of_day())
    }

    /// Same as [`get_overdue_tasks`](Self::get_overdue_tasks), with "today"
    /// being the day containing `now`.
    pub fn get_overdue_tasks_at(&self, now: NaiveDateTime) -> Vec<ProjectTask> {
        self.overdue_since(start_of_day(now))
    }

    fn overdue_since(&self, day_start: NaiveDateTime) -> Vec<ProjectTask> {
        let mut overdue: Vec<ProjectTask> = self
            .projects
            .iter()
            .flat_map(|p| {
                p.active()
                    .iter()
                    .filter(move |t| is_overdue(t, day_start))
                    .map(move |t| ProjectTask::new(p.name.clone(), t.clone()))
            })
            .collect();
        overdue.sort_by(|a, b| a.task.due.cmp(&b.task.due).then_with(|| a.task.id.cmp(&b.task.id)));
        trace!("{} tasks overdue before {}", overdue.len(), day_start);
        overdue
    }

    /// Look up a task in either bucket of a project.
    pub fn get_task(&self, project: &str, task_id: &str) -> Option<Task> {
        self.project(project)?.find(task_id).cloned()
    }

    /// Project names in first-seen order.
    pub fn project_names(&self) -> Vec<String> {
        self.projects.iter().map(|p| p.name.clone()).collect()
    }

    /// Number of tasks across all projects.
    pub fn len(&self) -> usize {
        self.projects.iter().map(Project::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn project(&self, name: &str) -> Option<&Project> {
        self.index.get(name).map(|&i| &self.projects[i])
    }

    fn project_entry(&mut self, name: &str) -> &mut Project {
        let position = match self.index.get(name) {
            Some(&i) => i,
            None => {
                debug!("Creating project '{}'", name);
                self.projects.push(Project::new(name));
                let i = self.projects.len() - 1;
                self.index.insert(name.to_string(), i);
                i
            }
        };
        &mut self.projects[position]
    }
}
