//! Task records and priority levels.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{Result, TaskError};

/// Task priority level.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// All levels, highest first.
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Numeric rank used for ordering: high=3, medium=2, low=1.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
        }
    }

    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" | "l" => Ok(Priority::Low),
            "medium" | "med" | "m" => Ok(Priority::Medium),
            "high" | "h" => Ok(Priority::High),
            _ => Err(TaskError::InvalidPriority(s.to_string())),
        }
    }
}

/// A task held by the store.
///
/// The `id` is assigned by the store and never changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub completed: bool,
    pub priority: Priority,
    /// Naive local timestamp; no timezone is attached
    pub due: Option<NaiveDateTime>,
}

impl Task {
    /// Build a stored task from caller-supplied data and an assigned ID.
    pub fn from_new(id: String, data: NewTask) -> Self {
        Self {
            id,
            title: data.title,
            completed: data.completed,
            priority: data.priority,
            due: data.due,
        }
    }

    /// Copy of this task with the completion flag set.
    pub fn into_completed(self) -> Self {
        Self {
            completed: true,
            ..self
        }
    }
}

/// Task data supplied by callers, before an ID is assigned.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NewTask {
    pub title: String,
    pub completed: bool,
    pub priority: Priority,
    pub due: Option<NaiveDateTime>,
}

impl NewTask {
    /// Create an active, medium-priority task with no due date.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn due(mut self, due: NaiveDateTime) -> Self {
        self.due = Some(due);
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

/// Parse a due date.
///
/// Accepts `YYYY-MM-DD HH:MM[:SS]`, `YYYY-MM-DDTHH:MM:SS` or a bare
/// `YYYY-MM-DD`, which means midnight of that day.
pub fn parse_due(input: &str) -> Result<NaiveDateTime> {
    let trimmed = input.trim();
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(parsed);
        }
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| TaskError::InvalidDueDate(input.to_string()))
}
