use crate::{CoreError, Result as CoreErrorResult};

use serde::{Deserialize, Serialize};

/// Structured error carried by a failed response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub message: String,
}

/// `{success, data, error}` envelope every collaborator call resolves to.
///
/// Transport failures never reach this type; they surface as
/// [`CoreError::Transport`] from the capability call itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorBody>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure<S: Into<String>>(message: S) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiErrorBody {
                code: None,
                message: message.into(),
            }),
        }
    }

    pub fn failure_with_code<C: Into<String>, S: Into<String>>(code: C, message: S) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiErrorBody {
                code: Some(code.into()),
                message: message.into(),
            }),
        }
    }

    /// Server-supplied message, ignoring blank ones
    pub fn error_message(&self) -> Option<&str> {
        self.error
            .as_ref()
            .map(|e| e.message.as_str())
            .filter(|m| !m.trim().is_empty())
    }

    /// Collapse the envelope: data on success, [`CoreError::Rejected`] otherwise.
    #[track_caller]
    pub fn into_result(self) -> CoreErrorResult<T> {
        match self {
            ApiResponse {
                success: true,
                data: Some(data),
                ..
            } => Ok(data),
            other => Err(CoreError::rejected(
                other.error_message().unwrap_or("Request failed"),
            )),
        }
    }
}
