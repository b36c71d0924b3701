use crate::{
    ApiResponse, CoreError, FieldLimits, MutationAck, Result as CoreErrorResult, Task, TaskApi,
    TaskDraft, TaskFilter, TaskId, TaskPatch, TaskQuery, TaskSort,
    tasks::{load_state::LoadState, task_counts::TaskCounts},
    validation::validate_task_fields,
};

use log::{debug, error, warn};

/// State behind one dashboard list (all, pending or completed).
///
/// The loaded collection is a disposable cache: every mutation, successful or
/// not, is followed by a full reload that replaces it wholesale. Operations take
/// `&mut self`, so a view never has two calls in flight.
pub struct TaskListView<'a> {
    api: &'a dyn TaskApi,
    filter: TaskFilter,
    sort: Option<TaskSort>,
    limits: FieldLimits,

    tasks: Vec<Task>,
    state: LoadState,
    search_query: String,
    delete_confirm: Option<TaskId>,
    last_error: Option<String>,
}

impl<'a> TaskListView<'a> {
    pub fn new(api: &'a dyn TaskApi, filter: TaskFilter) -> Self {
        Self {
            api,
            filter,
            sort: None,
            limits: FieldLimits::default(),
            tasks: Vec::new(),
            state: LoadState::Loading,
            search_query: String::new(),
            delete_confirm: None,
            last_error: None,
        }
    }

    pub fn with_limits(mut self, limits: FieldLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_sort(mut self, sort: Option<TaskSort>) -> Self {
        self.sort = sort;
        self
    }

    // =========================================================================
    // Remote Operations
    // =========================================================================

    /// Fetch the full collection and replace the local copy.
    ///
    /// On failure the previous list stays on screen; the reason is logged and
    /// kept in [`last_error`](Self::last_error). Returns whether the list was
    /// replaced.
    pub async fn load(&mut self) -> bool {
        self.state = LoadState::Loading;

        let replaced = match self.api.list_tasks(&TaskQuery::sorted(self.sort)).await {
            Ok(ApiResponse {
                success: true,
                data: Some(list),
                ..
            }) => {
                debug!("Loaded {} tasks", list.tasks.len());
                self.tasks = list.tasks;
                self.last_error = None;
                true
            }
            Ok(response) => {
                let message = response
                    .error_message()
                    .unwrap_or("Failed to load tasks")
                    .to_string();
                warn!("Failed to load tasks: {message}");
                self.last_error = Some(message);
                false
            }
            Err(e) => {
                error!("Failed to load tasks: {e}");
                self.last_error = Some(e.user_message("Failed to load tasks"));
                false
            }
        };

        self.state = LoadState::Idle;
        replaced
    }

    /// Create a task, then reload regardless of the outcome.
    ///
    /// A blank or oversized title is rejected before any remote call.
    pub async fn create(
        &mut self,
        title: &str,
        description: &str,
    ) -> CoreErrorResult<MutationAck> {
        validate_task_fields(title, description, &self.limits)?;

        let draft = TaskDraft::new(title, description);
        let result = self.api.create_task(&draft).await;
        self.load().await;

        Self::settle("create task", result)
    }

    /// Flip `completed` on the server, then reload.
    pub async fn toggle_complete(&mut self, task: &Task) -> CoreErrorResult<MutationAck> {
        let patch = TaskPatch::completed(!task.completed);
        let result = self.api.update_task(task.id, &patch).await;
        self.load().await;

        Self::settle("update task", result)
    }

    /// Toggle a task from the loaded set by id
    pub async fn toggle_by_id(&mut self, id: TaskId) -> CoreErrorResult<MutationAck> {
        let task = self
            .task(id)
            .cloned()
            .ok_or_else(|| CoreError::rejected(format!("Task {id} is not loaded")))?;
        self.toggle_complete(&task).await
    }

    /// Replace title and description, then reload.
    pub async fn edit(
        &mut self,
        id: TaskId,
        title: &str,
        description: &str,
    ) -> CoreErrorResult<MutationAck> {
        validate_task_fields(title, description, &self.limits)?;

        let draft = TaskDraft::new(title, description);
        let patch = TaskPatch {
            title: Some(draft.title),
            description: Some(draft.description.unwrap_or_default()),
            completed: None,
        };
        let result = self.api.update_task(id, &patch).await;
        self.load().await;

        Self::settle("update task", result)
    }

    /// Delete, reload, then leave the confirmation state.
    pub async fn delete(&mut self, id: TaskId) -> CoreErrorResult<MutationAck> {
        let result = self.api.delete_task(id).await;
        self.load().await;
        self.delete_confirm = None;

        Self::settle("delete task", result)
    }

    fn settle(
        action: &str,
        result: CoreErrorResult<ApiResponse<MutationAck>>,
    ) -> CoreErrorResult<MutationAck> {
        let outcome = result.and_then(ApiResponse::into_result);
        if let Err(ref e) = outcome {
            match e {
                CoreError::Rejected { .. } => warn!("Failed to {action}: {e}"),
                _ => error!("Failed to {action}: {e}"),
            }
        }
        outcome
    }

    // =========================================================================
    // Local Operations
    // =========================================================================

    /// Apply a search query and return what is now visible. Never touches the
    /// remote collaborator.
    pub fn search(&mut self, query: &str) -> Vec<&Task> {
        self.search_query = query.to_string();
        self.visible()
    }

    /// Loaded tasks passing the search query, then the view's filter
    pub fn visible(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.matches(&self.search_query))
            .filter(|task| self.filter.includes(task))
            .collect()
    }

    pub fn request_delete(&mut self, id: TaskId) {
        self.delete_confirm = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.delete_confirm = None;
    }

    pub fn is_confirming_delete(&self, id: TaskId) -> bool {
        self.delete_confirm == Some(id)
    }

    pub fn confirming_delete(&self) -> Option<TaskId> {
        self.delete_confirm
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn filter(&self) -> TaskFilter {
        self.filter
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    /// Reason the most recent reload failed, cleared by the next success
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn counts(&self) -> TaskCounts {
        TaskCounts::from_tasks(&self.tasks)
    }
}
