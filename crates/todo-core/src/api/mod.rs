//! Capability interface to the remote task service.
//!
//! A call resolves to `Ok(ApiResponse)` whenever the service answered, even if
//! it answered `success: false`. `Err` is reserved for transport failures.

use crate::{
    ApiResponse, MutationAck, Result as CoreErrorResult, Task, TaskDraft, TaskId, TaskList,
    TaskPatch, TaskQuery, TokenData, UserProfile,
};

use async_trait::async_trait;

#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, email: &str, password: &str)
    -> CoreErrorResult<ApiResponse<TokenData>>;

    async fn register(
        &self,
        email: &str,
        name: &str,
        password: &str,
    ) -> CoreErrorResult<ApiResponse<TokenData>>;

    async fn current_user(&self) -> CoreErrorResult<ApiResponse<UserProfile>>;
}

#[async_trait]
pub trait TaskApi: Send + Sync {
    async fn list_tasks(&self, query: &TaskQuery) -> CoreErrorResult<ApiResponse<TaskList>>;

    async fn get_task(&self, id: TaskId) -> CoreErrorResult<ApiResponse<Task>>;

    async fn create_task(&self, draft: &TaskDraft) -> CoreErrorResult<ApiResponse<MutationAck>>;

    async fn update_task(
        &self,
        id: TaskId,
        patch: &TaskPatch,
    ) -> CoreErrorResult<ApiResponse<MutationAck>>;

    async fn delete_task(&self, id: TaskId) -> CoreErrorResult<ApiResponse<MutationAck>>;
}
