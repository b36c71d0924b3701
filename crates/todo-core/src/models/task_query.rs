use crate::{TaskFilter, TaskSort};

/// Query parameters for `list_tasks`. `None` leaves the choice to the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskQuery {
    pub status: Option<TaskFilter>,
    pub sort: Option<TaskSort>,
}

impl TaskQuery {
    pub fn sorted(sort: Option<TaskSort>) -> Self {
        Self { status: None, sort }
    }

    /// Rendered as `key=value` pairs in a stable order
    pub fn params(&self) -> Vec<(&'static str, &'static str)> {
        let mut params = vec![];
        if let Some(status) = self.status {
            params.push(("status", status.as_str()));
        }
        if let Some(sort) = self.sort {
            params.push(("sort", sort.as_str()));
        }
        params
    }
}
