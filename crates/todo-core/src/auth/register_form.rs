use crate::{
    CoreError, FieldError, FieldLimits, PasswordStrength, Result as CoreErrorResult,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn new(name: &str, email: &str, password: &str, confirm_password: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm_password.to_string(),
        }
    }

    /// First failing check wins:
    /// name → email → password present → password length → confirmation.
    #[track_caller]
    pub fn validate(&self, limits: &FieldLimits) -> CoreErrorResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::validation(FieldError::NameRequired));
        }
        if self.email.is_empty() {
            return Err(CoreError::validation(FieldError::EmailRequired));
        }
        if self.password.is_empty() {
            return Err(CoreError::validation(FieldError::PasswordRequired));
        }
        if self.password.chars().count() < limits.min_password_length {
            return Err(CoreError::validation(FieldError::PasswordTooShort {
                min: limits.min_password_length,
            }));
        }
        if self.password != self.confirm_password {
            return Err(CoreError::validation(FieldError::PasswordMismatch));
        }
        Ok(())
    }

    pub fn password_strength(&self) -> PasswordStrength {
        PasswordStrength::assess(&self.password)
    }
}
