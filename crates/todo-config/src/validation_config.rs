use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;
use todo_core::FieldLimits;
use todo_core::validation::field_limits::{
    DEFAULT_MAX_DESCRIPTION_LENGTH, DEFAULT_MAX_TITLE_LENGTH, DEFAULT_MIN_PASSWORD_LENGTH,
};

// Validation constraints
pub const MIN_TITLE_LENGTH: usize = 1;
pub const MAX_TITLE_LENGTH: usize = 500;

pub const MIN_DESCRIPTION_LENGTH: usize = 0;
pub const MAX_DESCRIPTION_LENGTH: usize = 10000;

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Client-side form limits.
///
/// The server enforces its own rules; these only stop obviously bad input
/// before a round trip.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Maximum length for task titles
    pub max_title_length: usize,
    /// Maximum length for task descriptions
    pub max_description_length: usize,
    /// Minimum password length on registration
    pub min_password_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            max_description_length: DEFAULT_MAX_DESCRIPTION_LENGTH,
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_title_length < MIN_TITLE_LENGTH || self.max_title_length > MAX_TITLE_LENGTH {
            return Err(ConfigError::validation(format!(
                "validation.max_title_length must be {}-{}, got {}",
                MIN_TITLE_LENGTH, MAX_TITLE_LENGTH, self.max_title_length
            )));
        }

        if self.max_description_length < MIN_DESCRIPTION_LENGTH
            || self.max_description_length > MAX_DESCRIPTION_LENGTH
        {
            return Err(ConfigError::validation(format!(
                "validation.max_description_length must be {}-{}, got {}",
                MIN_DESCRIPTION_LENGTH, MAX_DESCRIPTION_LENGTH, self.max_description_length
            )));
        }

        if self.min_password_length < MIN_PASSWORD_LENGTH
            || self.min_password_length > MAX_PASSWORD_LENGTH
        {
            return Err(ConfigError::validation(format!(
                "validation.min_password_length must be {}-{}, got {}",
                MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH, self.min_password_length
            )));
        }

        Ok(())
    }

    pub fn limits(&self) -> FieldLimits {
        FieldLimits {
            max_title_length: self.max_title_length,
            max_description_length: self.max_description_length,
            min_password_length: self.min_password_length,
        }
    }
}
