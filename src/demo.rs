//! Sample session driving the store's public operations.

use chrono::{Duration, NaiveDateTime};
use log::info;
use serde::Serialize;
use tasktrack::domain::{NewTask, Priority, ProjectStats, ProjectTask, Task};
use tasktrack::store::{StoreConfig, TaskStore};

/// Tasks of one project, split by bucket.
#[derive(Debug, Serialize)]
pub struct ProjectView {
    pub name: String,
    pub active: Vec<Task>,
    pub completed: Vec<Task>,
    pub stats: ProjectStats,
}

/// Everything the demo prints.
#[derive(Debug, Serialize)]
pub struct DemoReport {
    pub now: NaiveDateTime,
    pub tie_break: String,
    pub completed_ids: Vec<String>,
    pub projects: Vec<ProjectView>,
    pub by_priority: Vec<ProjectTask>,
    pub overdue: Vec<ProjectTask>,
}

/// Populate a store with sample projects relative to `now`.
///
/// Returns the (project, ID) pairs the session then completes.
pub fn seed(store: &mut TaskStore, now: NaiveDateTime) -> Vec<(&'static str, String)> {
    let days = Duration::days;

    let hero = store.add_task(
        "Website",
        NewTask::new("Hero copy").priority(Priority::High).due(now + days(1)),
    );
    store.add_task("Website", NewTask::new("Update footer links").priority(Priority::Low));
    store.add_task(
        "Website",
        NewTask::new("Fix contact form").priority(Priority::Medium).due(now - days(3)),
    );

    store.add_task(
        "Mobile App",
        NewTask::new("Push notifications").priority(Priority::High).due(now - days(1)),
    );
    store.add_task(
        "Mobile App",
        NewTask::new("App store screenshots").priority(Priority::Medium).completed(true),
    );

    let newsletter = store.add_task(
        "Marketing",
        NewTask::new("Newsletter draft").priority(Priority::Medium).due(now - days(2)),
    );
    store.add_task("Marketing", NewTask::new("Social calendar").priority(Priority::Low));

    vec![("Website", hero), ("Marketing", newsletter)]
}

/// Run the sample session and collect every view.
///
/// With `min_priority` set, the priority view drops lower-ranked tasks.
pub fn run(config: StoreConfig, now: NaiveDateTime, min_priority: Option<Priority>) -> DemoReport {
    let mut store = TaskStore::with_config(config);
    let tie_break = store.config().ordering.tie_break.to_string();
    let to_complete = seed(&mut store, now);
    info!("Seeded {} tasks across {} projects", store.len(), store.project_names().len());

    let completed_ids = to_complete
        .into_iter()
        .filter(|(project, id)| store.complete_task(project, id))
        .map(|(_, id)| id)
        .collect();

    let projects = store
        .project_names()
        .into_iter()
        .map(|name| ProjectView {
            active: store.get_tasks(&name, Some(false)),
            completed: store.get_tasks(&name, Some(true)),
            stats: store.get_project_stats(&name),
            name,
        })
        .collect();

    DemoReport {
        now,
        tie_break,
        completed_ids,
        projects,
        by_priority: store
            .get_all_tasks_by_priority()
            .into_iter()
            .filter(|pt| min_priority.is_none_or(|min| pt.task.priority.rank() >= min.rank()))
            .collect(),
        overdue: store.get_overdue_tasks_at(now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tasktrack::domain::parse_due;
    use tasktrack::store::TieBreak;

    fn now() -> NaiveDateTime {
        parse_due("2026-10-19 10:00").unwrap()
    }

    #[test]
    fn test_seed_creates_three_projects() {
        let mut store = TaskStore::new();
        let ids = seed(&mut store, now());
        assert_eq!(ids.len(), 2);
        assert_eq!(store.project_names(), vec!["Website", "Mobile App", "Marketing"]);
        assert_eq!(store.len(), 7);
    }

    #[test]
    fn test_run_completes_and_reports() {
        let report = run(StoreConfig::default(), now(), None);
        assert_eq!(report.completed_ids.len(), 2);

        let website = &report.projects[0];
        assert_eq!(website.name, "Website");
        assert_eq!(website.stats.completed, 1);
        assert_eq!(website.completed[0].title, "Hero copy");

        let overdue: Vec<_> = report.overdue.iter().map(|pt| pt.task.title.as_str()).collect();
        assert_eq!(overdue, vec!["Fix contact form", "Push notifications"]);

        assert_eq!(report.by_priority.len(), 7);
        assert_eq!(report.by_priority[0].task.priority, Priority::High);
    }

    #[test]
    fn test_run_filters_priority_view() {
        let report = run(StoreConfig::with_tie_break(TieBreak::Id), now(), Some(Priority::Medium));
        assert_eq!(report.tie_break, "id");
        assert_eq!(report.by_priority.len(), 5);
        assert!(report.by_priority.iter().all(|pt| pt.task.priority != Priority::Low));
        // Other views are unaffected
        assert_eq!(report.projects.iter().map(|p| p.stats.total).sum::<usize>(), 7);
    }
}
