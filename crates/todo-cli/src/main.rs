//! todo - task dashboard CLI
//!
//! Signs in against the task service and manages the signed-in user's tasks.
//! Output is JSON on stdout; logs and errors go to stderr.
//!
//! # Examples
//!
//! ```bash
//! # Sign in and remember the email
//! todo auth login --email ada@example.com --password hunter22 --remember-me
//!
//! # Pending tasks mentioning "milk"
//! todo task list --view pending --search milk --pretty
//!
//! # Mark task 3 as done
//! todo task toggle 3
//! ```

use todo_cli::{Cli, CliResult, logger, run};

use std::process::ExitCode;

use clap::Parser;
use log::debug;
use serde_json::Value;
use todo_config::{Config, FileSessionStore};
use todo_core::Session;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let pretty = cli.pretty;

    match start(cli).await {
        Ok(value) => {
            let output = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            debug!("{e}");
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

/// Load config, install the logger, open the stored session, then dispatch.
async fn start(cli: Cli) -> CliResult<Value> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    let mut session = Session::open(FileSessionStore::open(&config)?);

    run(cli, &config, &mut session).await
}
