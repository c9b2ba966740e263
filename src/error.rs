//! Error types for tasktrack
//!
//! The store operations themselves never fail. These errors cover the edges
//! around them: parsing priorities and due dates from user input.

use thiserror::Error;

/// All error types that can occur in tasktrack
#[derive(Debug, Error)]
pub enum TaskError {
    /// Priority string did not name a known level
    #[error("Invalid priority: {0}")]
    InvalidPriority(String),

    /// Due date string could not be parsed
    #[error("Invalid due date: {0}")]
    InvalidDueDate(String),
}

/// Result type alias for tasktrack operations
pub type Result<T> = std::result::Result<T, TaskError>;
