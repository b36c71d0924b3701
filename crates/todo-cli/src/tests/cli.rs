use crate::{
    Cli, auth_commands::AuthCommands, commands::Commands, task_commands::TaskCommands,
};

use clap::Parser;

#[test]
fn given_list_with_flags_when_parsed_then_fields_set() {
    let cli = Cli::try_parse_from([
        "todo", "task", "list", "--view", "pending", "--search", "milk", "--sort", "title",
        "--pretty",
    ])
    .unwrap();

    assert!(cli.pretty);
    match cli.command {
        Commands::Task {
            action: TaskCommands::List { view, search, sort },
        } => {
            assert_eq!(view, "pending");
            assert_eq!(search.as_deref(), Some("milk"));
            assert_eq!(sort.as_deref(), Some("title"));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn given_list_without_view_when_parsed_then_defaults_to_all() {
    let cli = Cli::try_parse_from(["todo", "task", "list"]).unwrap();

    match cli.command {
        Commands::Task {
            action: TaskCommands::List { view, .. },
        } => assert_eq!(view, "all"),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn given_unknown_view_when_parsed_then_error() {
    let result = Cli::try_parse_from(["todo", "task", "list", "--view", "archived"]);

    assert!(result.is_err());
}

#[test]
fn given_remember_me_and_forget_when_parsed_then_error() {
    let result = Cli::try_parse_from([
        "todo",
        "auth",
        "login",
        "--password",
        "secret123",
        "--remember-me",
        "--forget",
    ]);

    assert!(result.is_err());
}

#[test]
fn given_global_server_after_subcommand_when_parsed_then_set() {
    let cli = Cli::try_parse_from(["todo", "auth", "status", "--server", "http://10.0.0.2:8000"])
        .unwrap();

    assert_eq!(cli.server.as_deref(), Some("http://10.0.0.2:8000"));
    assert!(matches!(
        cli.command,
        Commands::Auth {
            action: AuthCommands::Status
        }
    ));
}
