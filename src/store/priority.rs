//! Ordering for the cross-project priority view.
//!
//! Tasks sort by priority rank descending (high=3, medium=2, low=1). Ties
//! are broken according to [`TieBreak`]; the identifier is always the final
//! key, so the order is total and deterministic.

use chrono::NaiveDateTime;
use std::cmp::Ordering;

use super::config::TieBreak;
use crate::domain::{ProjectTask, Task};

/// Compare two tasks for the priority view.
pub fn compare_by_priority(a: &Task, b: &Task, tie_break: TieBreak) -> Ordering {
    b.priority
        .rank()
        .cmp(&a.priority.rank())
        .then_with(|| match tie_break {
            TieBreak::DueDate => compare_due_undated_last(a.due, b.due),
            TieBreak::Id => Ordering::Equal,
        })
        .then_with(|| a.id.cmp(&b.id))
}

/// Earlier due dates first; a missing due date sorts after any present one.
pub fn compare_due_undated_last(a: Option<NaiveDateTime>, b: Option<NaiveDateTime>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sort annotated tasks in place for the priority view.
pub fn sort_by_priority(tasks: &mut [ProjectTask], tie_break: TieBreak) {
    tasks.sort_by(|a, b| compare_by_priority(&a.task, &b.task, tie_break));
}
