use crate::TaskId;

use serde::{Deserialize, Serialize};

/// Acknowledgement returned by create, update and delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationAck {
    pub task_id: TaskId,
    /// `created`, `updated` or `deleted`
    pub status: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}
