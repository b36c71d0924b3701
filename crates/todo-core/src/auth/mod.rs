pub mod auth_outcome;
pub mod login_form;
pub mod register_form;

pub use auth_outcome::AuthOutcome;
pub use login_form::LoginForm;
pub use register_form::RegisterForm;

use crate::{
    ApiResponse, AuthApi, CoreError, FieldLimits, Result as CoreErrorResult, Route, Session,
    SessionStore, TokenData,
};

use log::{debug, error, warn};

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please try again.";
pub const REGISTRATION_FAILED_MESSAGE: &str = "Registration failed. Please try again.";
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

/// Validate, call `login` once, and record the session on success.
pub async fn submit_login<A, S>(
    api: &A,
    session: &mut Session<S>,
    form: &LoginForm,
) -> AuthOutcome
where
    A: AuthApi + ?Sized,
    S: SessionStore,
{
    if let Err(e) = form.validate() {
        debug!("Login form rejected locally: {e}");
        return AuthOutcome::failed(e.user_message(GENERIC_ERROR_MESSAGE));
    }

    let response = api.login(&form.email, &form.password).await;

    let outcome = complete(response, session, LOGIN_FAILED_MESSAGE);

    if outcome.is_ok()
        && form.remember_me
        && let Err(e) = session.remember(&form.email)
    {
        warn!("Could not persist remember-me preference: {e}");
    }

    into_outcome(outcome, LOGIN_FAILED_MESSAGE)
}

/// Validate, call `register` once, and record the session on success.
pub async fn submit_register<A, S>(
    api: &A,
    session: &mut Session<S>,
    form: &RegisterForm,
    limits: &FieldLimits,
) -> AuthOutcome
where
    A: AuthApi + ?Sized,
    S: SessionStore,
{
    if let Err(e) = form.validate(limits) {
        debug!("Registration form rejected locally: {e}");
        return AuthOutcome::failed(e.user_message(GENERIC_ERROR_MESSAGE));
    }

    let response = api
        .register(&form.email, form.name.trim(), &form.password)
        .await;

    into_outcome(
        complete(response, session, REGISTRATION_FAILED_MESSAGE),
        REGISTRATION_FAILED_MESSAGE,
    )
}

/// A response only counts as success if it carries a non-blank token.
fn complete<S: SessionStore>(
    response: CoreErrorResult<ApiResponse<TokenData>>,
    session: &mut Session<S>,
    fallback: &str,
) -> CoreErrorResult<Route> {
    let response = response?;

    if !response.success {
        return Err(CoreError::rejected(
            response.error_message().unwrap_or(fallback),
        ));
    }

    let token = response
        .data
        .as_ref()
        .and_then(TokenData::token)
        .ok_or_else(CoreError::missing_token)?;

    session.begin(token)?;
    Ok(Route::Tasks)
}

fn into_outcome(result: CoreErrorResult<Route>, fallback: &str) -> AuthOutcome {
    match result {
        Ok(redirect) => AuthOutcome::Authenticated { redirect },
        Err(e @ CoreError::Rejected { .. }) => {
            warn!("Authentication rejected: {e}");
            AuthOutcome::failed(e.user_message(fallback))
        }
        Err(e @ CoreError::MissingToken { .. }) => {
            warn!("{e}");
            AuthOutcome::failed(fallback)
        }
        Err(e) => {
            error!("Authentication failed: {e}");
            AuthOutcome::failed(GENERIC_ERROR_MESSAGE)
        }
    }
}
