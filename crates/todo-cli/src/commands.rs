use crate::{auth_commands::AuthCommands, task_commands::TaskCommands};

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in, sign up and session management
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },

    /// Task operations (requires a session)
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },

    /// Check that the service is up
    Health,
}
