use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "todo")]
#[command(about = "Command-line client for the task dashboard service")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL (defaults to api.base_url from config.toml)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
