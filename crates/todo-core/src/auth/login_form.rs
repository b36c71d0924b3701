use crate::{CoreError, FieldError, Result as CoreErrorResult, Session, SessionStore};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

impl LoginForm {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
            remember_me: false,
        }
    }

    /// Empty form with the remembered email filled in, if any
    pub fn prefilled<S: SessionStore>(session: &Session<S>) -> Self {
        match session.remembered_email() {
            Some(email) => Self {
                email,
                password: String::new(),
                remember_me: true,
            },
            None => Self::default(),
        }
    }

    /// Email required, then password required
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.email.is_empty() {
            return Err(CoreError::validation(FieldError::EmailRequired));
        }
        if self.password.is_empty() {
            return Err(CoreError::validation(FieldError::PasswordRequired));
        }
        Ok(())
    }
}
