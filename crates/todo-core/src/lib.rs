pub mod api;
pub mod auth;
pub mod error;
pub mod models;
pub mod session;
pub mod tasks;
pub mod validation;

#[cfg(test)]
mod tests;

pub use api::{AuthApi, TaskApi};
pub use auth::{
    AuthOutcome, GENERIC_ERROR_MESSAGE, LOGIN_FAILED_MESSAGE, LoginForm,
    REGISTRATION_FAILED_MESSAGE, RegisterForm, submit_login, submit_register,
};
pub use error::{CoreError, Result};
pub use models::api_response::{ApiErrorBody, ApiResponse};
pub use models::health_status::HealthStatus;
pub use models::mutation_ack::MutationAck;
pub use models::task::{Task, TaskId};
pub use models::task_draft::TaskDraft;
pub use models::task_filter::TaskFilter;
pub use models::task_list::TaskList;
pub use models::task_patch::TaskPatch;
pub use models::task_query::TaskQuery;
pub use models::task_sort::TaskSort;
pub use models::timestamp::Timestamp;
pub use models::token_data::TokenData;
pub use models::user_profile::UserProfile;
pub use session::{
    AUTH_TOKEN_KEY, MemorySessionStore, REMEMBER_ME_KEY, REMEMBERED_EMAIL_KEY, Route, Session,
    SessionStore,
};
pub use tasks::{LoadState, TaskCounts, TaskListView};
pub use validation::{FieldError, FieldLimits, PasswordStrength};
