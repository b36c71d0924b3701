use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;
use todo_core::CoreError;

/// Failures that leave the client without an `ApiResponse` to hand back.
///
/// A server that answers with a non-2xx status is not one of these; that
/// becomes `ApiResponse { success: false }`.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Connection refused, timed out, or the body could not be read
    #[error("Task service unreachable: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    /// A 2xx body that does not match the expected shape
    #[error("Unexpected response body: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

/// The view layer only sees these as transport failures
impl From<ClientError> for CoreError {
    #[track_caller]
    fn from(err: ClientError) -> Self {
        CoreError::transport(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
