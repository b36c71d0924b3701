use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Server-side ordering of the task collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskSort {
    /// Newest first
    #[default]
    Created,
    Title,
    /// Pending before completed
    Completed,
}

impl TaskSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Title => "title",
            Self::Completed => "completed",
        }
    }
}

impl FromStr for TaskSort {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "created" => Ok(Self::Created),
            "title" => Ok(Self::Title),
            "completed" => Ok(Self::Completed),
            _ => Err(CoreError::InvalidTaskSort {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for TaskSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
