//! Per-project summary counts.

use serde::{Deserialize, Serialize};

use super::task::Priority;

/// Summary of a project's tasks. All zero for an unknown project.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectStats {
    pub total: usize,
    pub completed: usize,
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl ProjectStats {
    /// Count one task of the given priority.
    pub fn record(&mut self, priority: Priority) {
        self.total += 1;
        match priority {
            Priority::Low => self.low += 1,
            Priority::Medium => self.medium += 1,
            Priority::High => self.high += 1,
        }
    }

    pub fn count(&self, priority: Priority) -> usize {
        match priority {
            Priority::Low => self.low,
            Priority::Medium => self.medium,
            Priority::High => self.high,
        }
    }

    pub fn active(&self) -> usize {
        self.total.saturating_sub(self.completed)
    }
}
