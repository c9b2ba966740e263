//! Task storage for tasktrack.
//!
//! - **TaskStore**: owned, single-threaded store of projects and their tasks
//! - **SharedTaskStore**: `Arc<Mutex<_>>` handle for use across threads
//! - **priority** / **overdue**: the pure ordering and date helpers the
//!   cross-project views are built on
//!
//! # Example
//!
//! ```
//! use tasktrack::domain::{NewTask, Priority};
//! use tasktrack::store::TaskStore;
//!
//! let mut store = TaskStore::new();
//! let id = store.add_task("Website", NewTask::new("Hero copy").priority(Priority::High));
//!
//! assert!(store.complete_task("Website", &id));
//! assert_eq!(store.get_project_stats("Website").completed, 1);
//! ```

mod config;
mod overdue;
mod priority;
mod shared;
mod task_store;

pub use config::{OrderingConfig, StoreConfig, TieBreak};
pub use overdue::{is_overdue, local_start_of_day, start_of_day};
pub use priority::{compare_by_priority, compare_due_undated_last, sort_by_priority};
pub use shared::SharedTaskStore;
pub use task_store::TaskStore;
