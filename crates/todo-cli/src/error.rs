use crate::ClientError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;
use todo_config::ConfigError;
use todo_core::{CoreError, GENERIC_ERROR_MESSAGE};

#[derive(Error, Debug)]
pub enum CliError {
    /// A message meant for the user as-is
    #[error("{message} {location}")]
    Command {
        message: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Failed to initialize logger: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn command<S: Into<String>>(message: S) -> Self {
        CliError::Command {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        CliError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Text to print on stderr; details stay in the log
    pub fn user_message(&self) -> String {
        match self {
            CliError::Command { message, .. } => message.clone(),
            CliError::Core(e) => e.user_message(GENERIC_ERROR_MESSAGE),
            CliError::Client(_) => String::from(GENERIC_ERROR_MESSAGE),
            CliError::Config(e) => e.to_string(),
            CliError::Logger { message, .. } => message.clone(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
