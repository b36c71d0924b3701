//! Command dispatch.
//!
//! Every command resolves to a JSON value for stdout or a [`CliError`] whose
//! [`user_message`](CliError::user_message) goes to stderr.

use crate::{
    CliError, CliResult, Client, ClientError, auth_commands::AuthCommands, cli::Cli,
    commands::Commands, task_commands::TaskCommands,
};

use log::{debug, warn};
use serde::Serialize;
use serde_json::{Value, json};
use todo_config::Config;
use todo_core::{
    AuthApi, AuthOutcome, FieldLimits, LoginForm, RegisterForm, Route, Session, SessionStore,
    TaskApi, TaskFilter, TaskListView, TaskSort, submit_login, submit_register,
};

const NOT_SIGNED_IN_MESSAGE: &str = "Not signed in. Run `todo auth login` first.";

/// Run one parsed command against the service named by `--server` or config.
pub async fn run<S: SessionStore>(
    cli: Cli,
    config: &Config,
    session: &mut Session<S>,
) -> CliResult<Value> {
    let base_url = cli.server.unwrap_or_else(|| config.api.base_url.clone());
    let token = session.token();
    let client = Client::with_timeout(&base_url, token.as_deref(), config.api.timeout())?;
    let limits = config.validation.limits();

    match cli.command {
        Commands::Auth { action } => run_auth(action, &client, session, &limits).await,
        Commands::Task { action } => run_task(action, &client, session, limits).await,
        Commands::Health => health(&client).await,
    }
}

// =========================================================================
// Auth Commands
// =========================================================================

async fn run_auth<S: SessionStore>(
    action: AuthCommands,
    client: &Client,
    session: &mut Session<S>,
    limits: &FieldLimits,
) -> CliResult<Value> {
    match action {
        AuthCommands::Login {
            email,
            password,
            remember_me,
            forget,
        } => {
            let mut form = LoginForm::prefilled(session);
            if let Some(email) = email {
                form.email = email;
            }
            form.password = password;
            form.remember_me = (form.remember_me || remember_me) && !forget;

            let outcome = submit_login(client, session, &form).await;

            if outcome.is_authenticated()
                && !form.remember_me
                && let Err(e) = session.forget()
            {
                warn!("Could not clear remembered email: {e}");
            }

            authenticated(outcome)
        }

        AuthCommands::Register {
            name,
            email,
            password,
            confirm_password,
        } => {
            let form = RegisterForm::new(&name, &email, &password, &confirm_password);
            debug!("Password strength: {}", form.password_strength().label());

            authenticated(submit_register(client, session, &form, limits).await)
        }

        AuthCommands::Logout => {
            let redirect = session.logout()?;
            Ok(json!({ "authenticated": false, "redirect": redirect.path() }))
        }

        AuthCommands::Status => Ok(json!({
            "authenticated": session.is_authenticated(),
            "remembered_email": session.remembered_email(),
            "server": client.base_url,
        })),

        AuthCommands::Whoami => {
            if !session.is_authenticated() {
                return Err(CliError::command(NOT_SIGNED_IN_MESSAGE));
            }

            let profile = client.current_user().await?.into_result()?;
            to_value(&profile)
        }
    }
}

fn authenticated(outcome: AuthOutcome) -> CliResult<Value> {
    match outcome {
        AuthOutcome::Authenticated { redirect } => {
            Ok(json!({ "authenticated": true, "redirect": redirect.path() }))
        }
        AuthOutcome::Failed { message } => Err(CliError::command(message)),
    }
}

// =========================================================================
// Task Commands
// =========================================================================

async fn run_task<S: SessionStore>(
    action: TaskCommands,
    client: &Client,
    session: &Session<S>,
    limits: FieldLimits,
) -> CliResult<Value> {
    let filter = match action {
        TaskCommands::List { ref view, .. } => view.parse::<TaskFilter>()?,
        _ => TaskFilter::All,
    };

    let route = Route::for_filter(filter);
    if session.guard(route) != route {
        return Err(CliError::command(NOT_SIGNED_IN_MESSAGE));
    }

    let mut view = TaskListView::new(client, filter).with_limits(limits);

    match action {
        TaskCommands::List { search, sort, .. } => {
            let sort = sort.as_deref().map(str::parse::<TaskSort>).transpose()?;
            let mut view = view.with_sort(sort);
            load(&mut view).await?;

            if let Some(query) = search {
                view.search(&query);
            }

            Ok(json!({
                "view": view.filter().as_str(),
                "search": view.search_query(),
                "counts": view.counts(),
                "tasks": view.visible(),
            }))
        }

        TaskCommands::Show { id } => {
            let task = client.get_task(id).await?.into_result()?;
            to_value(&task)
        }

        TaskCommands::Create { title, description } => {
            let ack = view
                .create(&title, description.as_deref().unwrap_or_default())
                .await?;
            Ok(json!({ "ack": ack, "counts": view.counts() }))
        }

        TaskCommands::Update {
            id,
            title,
            description,
        } => {
            if title.is_none() && description.is_none() {
                return Err(CliError::command(
                    "Nothing to update. Pass --title and/or --description.",
                ));
            }

            load(&mut view).await?;
            let current = view
                .task(id)
                .cloned()
                .ok_or_else(|| CliError::command(format!("Task {id} not found")))?;

            let title = title.unwrap_or(current.title);
            let description =
                description.unwrap_or_else(|| current.description.unwrap_or_default());

            let ack = view.edit(id, &title, &description).await?;
            Ok(json!({ "ack": ack, "task": view.task(id) }))
        }

        TaskCommands::Toggle { id } => {
            load(&mut view).await?;
            let ack = view.toggle_by_id(id).await?;
            Ok(json!({ "ack": ack, "task": view.task(id) }))
        }

        TaskCommands::Delete { id, yes } => {
            view.request_delete(id);
            if !yes {
                view.cancel_delete();
                return Err(CliError::command(format!(
                    "Deleting task {id} cannot be undone. Pass --yes to confirm."
                )));
            }

            let ack = view.delete(id).await?;
            Ok(json!({ "ack": ack, "counts": view.counts() }))
        }
    }
}

/// Initial load; unlike a reload after a mutation there is nothing to fall back to
async fn load(view: &mut TaskListView<'_>) -> CliResult<()> {
    if view.load().await {
        return Ok(());
    }

    Err(CliError::command(
        view.last_error().unwrap_or("Failed to load tasks"),
    ))
}

// =========================================================================
// Service Commands
// =========================================================================

async fn health(client: &Client) -> CliResult<Value> {
    let status = client.health().await?.into_result()?;

    if !status.is_healthy() {
        return Err(CliError::command(format!(
            "Service at {} reports status '{}'",
            client.base_url, status.status
        )));
    }

    to_value(&status)
}

fn to_value<T: Serialize>(value: &T) -> CliResult<Value> {
    Ok(serde_json::to_value(value).map_err(ClientError::from)?)
}
