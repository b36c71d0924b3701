use crate::TaskFilter;

/// Screens the client can navigate between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Register,
    Tasks,
    PendingTasks,
    CompletedTasks,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Tasks => "/dashboard/tasks",
            Self::PendingTasks => "/dashboard/tasks/pending",
            Self::CompletedTasks => "/dashboard/tasks/completed",
        }
    }

    /// Dashboard routes are only reachable with a stored token
    pub fn requires_session(&self) -> bool {
        matches!(
            self,
            Self::Tasks | Self::PendingTasks | Self::CompletedTasks
        )
    }

    pub fn for_filter(filter: TaskFilter) -> Self {
        match filter {
            TaskFilter::All => Self::Tasks,
            TaskFilter::Pending => Self::PendingTasks,
            TaskFilter::Completed => Self::CompletedTasks,
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}
