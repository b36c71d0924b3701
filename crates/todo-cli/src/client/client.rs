use crate::CliClientResult;

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as ReqwestClient, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use todo_core::{
    ApiResponse, AuthApi, HealthStatus, MutationAck, Result as CoreErrorResult, Task, TaskApi,
    TaskDraft, TaskId, TaskList, TaskPatch, TaskQuery, TokenData, UserProfile,
};

/// HTTP client for the task service REST API
pub struct Client {
    pub base_url: String,
    pub token: Option<String>,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000")
    /// * `token` - Optional access token sent as `Authorization: Bearer`
    pub fn new(base_url: &str, token: Option<&str>) -> Self {
        Self::from_parts(base_url, token, ReqwestClient::new())
    }

    /// Create a client whose requests give up after `timeout` (None = never)
    pub fn with_timeout(
        base_url: &str,
        token: Option<&str>,
        timeout: Option<Duration>,
    ) -> CliClientResult<Self> {
        let mut builder = ReqwestClient::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self::from_parts(base_url, token, builder.build()?))
    }

    fn from_parts(base_url: &str, token: Option<&str>, client: ReqwestClient) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token
                .filter(|t| !t.trim().is_empty())
                .map(String::from),
            client,
        }
    }

    /// Build a request with the bearer token, if any
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        if let Some(ref token) = self.token {
            req = req.bearer_auth(token);
        }

        req
    }

    /// Execute request and wrap the answer in the response envelope.
    ///
    /// Any non-2xx answer becomes `success: false` with the server's message.
    /// Only a failed exchange or an undecodable success body is an `Err`.
    async fn execute<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> CliClientResult<ApiResponse<T>> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            let data: T = serde_json::from_str(&body)?;
            return Ok(ApiResponse::ok(data));
        }

        let message = Self::error_message(&body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        });
        debug!("Request failed with {}: {}", status.as_u16(), message);

        Ok(ApiResponse::failure_with_code(
            status.as_u16().to_string(),
            message,
        ))
    }

    /// Pull a readable message out of an error body.
    ///
    /// Understands `{"detail": "..."}`, `{"detail": [{"msg": ...}]}` and
    /// `{"error": {"message": ...}}`.
    pub(crate) fn error_message(body: &str) -> Option<String> {
        let value: Value = serde_json::from_str(body).ok()?;

        let message = match value.get("detail") {
            Some(Value::String(detail)) => Some(detail.clone()),
            Some(Value::Array(items)) => {
                let messages: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .collect();
                (!messages.is_empty()).then(|| messages.join("; "))
            }
            _ => value
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(Value::as_str)
                .map(String::from),
        };

        message.filter(|m| !m.trim().is_empty())
    }

    // =========================================================================
    // Service Operations
    // =========================================================================

    /// Liveness probe; needs no token
    pub async fn health(&self) -> CliClientResult<ApiResponse<HealthStatus>> {
        let req = self.request(Method::GET, "/health");
        self.execute(req).await
    }
}

// =========================================================================
// Auth Operations
// =========================================================================

#[async_trait]
impl AuthApi for Client {
    async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> CoreErrorResult<ApiResponse<TokenData>> {
        #[derive(Serialize)]
        struct LoginRequest<'a> {
            email: &'a str,
            password: &'a str,
        }

        let body = LoginRequest { email, password };
        let req = self.request(Method::POST, "/api/auth/login").json(&body);
        Ok(self.execute(req).await?)
    }

    async fn register(
        &self,
        email: &str,
        name: &str,
        password: &str,
    ) -> CoreErrorResult<ApiResponse<TokenData>> {
        #[derive(Serialize)]
        struct RegisterRequest<'a> {
            email: &'a str,
            name: &'a str,
            password: &'a str,
        }

        let body = RegisterRequest {
            email,
            name,
            password,
        };
        let req = self.request(Method::POST, "/api/auth/register").json(&body);
        Ok(self.execute(req).await?)
    }

    async fn current_user(&self) -> CoreErrorResult<ApiResponse<UserProfile>> {
        let req = self.request(Method::GET, "/api/auth/me");
        Ok(self.execute(req).await?)
    }
}

// =========================================================================
// Task Operations
// =========================================================================

#[async_trait]
impl TaskApi for Client {
    async fn list_tasks(&self, query: &TaskQuery) -> CoreErrorResult<ApiResponse<TaskList>> {
        let params = query
            .params()
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&");

        let path = if params.is_empty() {
            String::from("/api/tasks")
        } else {
            format!("/api/tasks?{params}")
        };

        let req = self.request(Method::GET, &path);
        Ok(self.execute(req).await?)
    }

    async fn get_task(&self, id: TaskId) -> CoreErrorResult<ApiResponse<Task>> {
        let req = self.request(Method::GET, &format!("/api/tasks/{id}"));
        Ok(self.execute(req).await?)
    }

    async fn create_task(&self, draft: &TaskDraft) -> CoreErrorResult<ApiResponse<MutationAck>> {
        let req = self.request(Method::POST, "/api/tasks").json(draft);
        Ok(self.execute(req).await?)
    }

    async fn update_task(
        &self,
        id: TaskId,
        patch: &TaskPatch,
    ) -> CoreErrorResult<ApiResponse<MutationAck>> {
        let req = self
            .request(Method::PATCH, &format!("/api/tasks/{id}"))
            .json(patch);
        Ok(self.execute(req).await?)
    }

    async fn delete_task(&self, id: TaskId) -> CoreErrorResult<ApiResponse<MutationAck>> {
        let req = self.request(Method::DELETE, &format!("/api/tasks/{id}"));
        Ok(self.execute(req).await?)
    }
}
