pub mod route;
pub mod session_store;

pub use route::Route;
pub use session_store::{
    AUTH_TOKEN_KEY, MemorySessionStore, REMEMBER_ME_KEY, REMEMBERED_EMAIL_KEY, SessionStore,
};

use crate::Result as CoreErrorResult;

use log::{debug, info};

/// Credential lifecycle on top of a [`SessionStore`].
///
/// Opened once at start-up, written by a successful login/registration and
/// cleared by [`Session::logout`]. Tokens are never refreshed.
#[derive(Debug)]
pub struct Session<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> Session<S> {
    pub fn open(store: S) -> Self {
        Self { store }
    }

    /// The stored access token, ignoring blank values
    pub fn token(&self) -> Option<String> {
        self.store
            .get(AUTH_TOKEN_KEY)
            .filter(|token| !token.trim().is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn begin(&mut self, token: &str) -> CoreErrorResult<()> {
        self.store.set(AUTH_TOKEN_KEY, token)?;
        info!("Session started");
        Ok(())
    }

    /// Persist the "remember me" choice along with the email to pre-fill
    pub fn remember(&mut self, email: &str) -> CoreErrorResult<()> {
        self.store.set(REMEMBER_ME_KEY, "true")?;
        self.store.set(REMEMBERED_EMAIL_KEY, email)?;
        debug!("Remembering login email");
        Ok(())
    }

    pub fn forget(&mut self) -> CoreErrorResult<()> {
        self.store.remove(REMEMBER_ME_KEY)?;
        self.store.remove(REMEMBERED_EMAIL_KEY)
    }

    /// Email to pre-fill on the login form, only when "remember me" is set
    pub fn remembered_email(&self) -> Option<String> {
        match self.store.get(REMEMBER_ME_KEY).as_deref() {
            Some("true") => self.store.get(REMEMBERED_EMAIL_KEY),
            _ => None,
        }
    }

    /// Drop the token and return to the landing page.
    ///
    /// The remember-me entries survive a logout.
    pub fn logout(&mut self) -> CoreErrorResult<Route> {
        self.store.remove(AUTH_TOKEN_KEY)?;
        info!("Session ended");
        Ok(Route::Home)
    }

    /// Where a request for `route` actually lands
    pub fn guard(&self, route: Route) -> Route {
        if route.requires_session() && !self.is_authenticated() {
            debug!("No session token, redirecting {} to login", route);
            return Route::Login;
        }
        route
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
