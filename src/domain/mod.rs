//! Domain types for tasktrack
//!
//! - Task / NewTask: a stored task and the caller-supplied data it is built from
//! - Priority: low / medium / high
//! - Project: a named pair of active and completed buckets
//! - ProjectTask: a task annotated with its owning project
//! - ProjectStats: per-project counts

pub mod project;
pub mod stats;
pub mod task;

pub use project::{Project, ProjectTask};
pub use stats::ProjectStats;
pub use task::{NewTask, Priority, Task, parse_due};
