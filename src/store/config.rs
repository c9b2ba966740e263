//! Store-level settings.

use serde::{Deserialize, Serialize};

/// How tasks of equal priority are ordered in the priority view.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Earliest due date first, undated tasks after dated ones, then by ID
    #[default]
    DueDate,
    /// By ID only
    Id,
}

impl TieBreak {
    pub fn as_str(&self) -> &'static str {
        match self {
            TieBreak::DueDate => "due_date",
            TieBreak::Id => "id",
        }
    }
}

impl std::fmt::Display for TieBreak {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OrderingConfig {
    pub tie_break: TieBreak,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StoreConfig {
    pub ordering: OrderingConfig,
}

impl StoreConfig {
    pub fn with_tie_break(tie_break: TieBreak) -> Self {
        Self {
            ordering: OrderingConfig { tie_break },
        }
    }
}
