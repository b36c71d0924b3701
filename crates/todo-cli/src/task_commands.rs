use clap::Subcommand;
use todo_core::TaskId;

#[derive(Subcommand, Debug)]
pub enum TaskCommands {
    /// List tasks
    List {
        /// Which tasks to show
        #[arg(long, default_value = "all", value_parser = ["all", "pending", "completed"])]
        view: String,

        /// Case-insensitive match on title and description
        #[arg(long)]
        search: Option<String>,

        /// Server-side ordering
        #[arg(long, value_parser = ["created", "title", "completed"])]
        sort: Option<String>,
    },

    /// Show one task
    Show { id: TaskId },

    /// Create a task
    Create {
        #[arg(long)]
        title: String,

        #[arg(long)]
        description: Option<String>,
    },

    /// Edit a task's title and/or description
    Update {
        id: TaskId,

        #[arg(long)]
        title: Option<String>,

        /// Pass an empty string to clear it
        #[arg(long)]
        description: Option<String>,
    },

    /// Flip a task between pending and completed
    Toggle { id: TaskId },

    /// Delete a task
    Delete {
        id: TaskId,

        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}
