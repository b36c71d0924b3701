use crate::models::timestamp::Timestamp;

use serde::{Deserialize, Serialize};

pub type TaskId = i64;

/// Client-side copy of a task record. The collaborator owns the real one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub completed: bool,

    // Audit
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Task {
    /// Case-insensitive substring match on title and description.
    ///
    /// An empty query matches every task.
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }

        let needle = query.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&needle))
    }
}
