use crate::Task;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskList {
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub status_filter: Option<String>,
    #[serde(default)]
    pub sort_order: Option<String>,
}

impl TaskList {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            total: tasks.len(),
            tasks,
            status_filter: None,
            sort_order: None,
        }
    }
}
