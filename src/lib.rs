//! tasktrack - an in-memory task tracker
//!
//! Tasks are grouped by project into active and completed buckets. The
//! [`store::TaskStore`] adds and completes tasks and answers the list,
//! priority, statistics and overdue queries; nothing is persisted.

pub mod domain;
pub mod error;
pub mod id;
pub mod store;

pub use error::{Result, TaskError};
