use crate::validation::FieldError;

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    /// Local field validation failed; no remote call was made
    #[error("Validation error: {reason} {location}")]
    Validation {
        reason: FieldError,
        location: ErrorLocation,
    },

    /// The collaborator answered with `success: false`
    #[error("Request rejected: {message} {location}")]
    Rejected {
        message: String,
        location: ErrorLocation,
    },

    /// The collaborator could not be reached or answered with garbage
    #[error("Transport error: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
    },

    #[error("Authentication succeeded without an access token {location}")]
    MissingToken { location: ErrorLocation },

    #[error("Session storage error: {message} {location}")]
    Storage {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid task filter: {value} {location}")]
    InvalidTaskFilter {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid task sort: {value} {location}")]
    InvalidTaskSort {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn validation(reason: FieldError) -> Self {
        CoreError::Validation {
            reason,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn rejected<S: Into<String>>(message: S) -> Self {
        CoreError::Rejected {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn transport<S: Into<String>>(message: S) -> Self {
        CoreError::Transport {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_token() -> Self {
        CoreError::MissingToken {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn storage<S: Into<String>>(message: S) -> Self {
        CoreError::Storage {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Text suitable for showing inline next to a form or list.
    ///
    /// Validation and rejection messages are passed through verbatim, anything
    /// else collapses to `fallback` so transport details never reach the user.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            CoreError::Validation { reason, .. } => reason.to_string(),
            CoreError::Rejected { message, .. } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
