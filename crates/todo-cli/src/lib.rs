//! todo-cli library
//!
//! HTTP implementation of the task service capabilities plus the command
//! runner behind the `todo` binary, exported for integration tests.

pub mod auth_commands;
pub mod cli;
pub mod client;
pub mod commands;
pub mod error;
pub mod logger;
pub mod runner;
pub mod task_commands;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use client::{CliClientResult, Client, ClientError};
pub use error::{CliError, Result as CliResult};
pub use runner::run;
