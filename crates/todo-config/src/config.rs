use crate::{
    ApiConfig, CONFIG_DIR_ENV, CONFIG_DIR_NAME, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    LoggingConfig, SessionConfig, ValidationConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub logging: LoggingConfig,
    pub validation: ValidationConfig,
    pub session: SessionConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Resolve the config directory (TODO_CONFIG_DIR, else the platform
    ///    config dir + `todo-dash`)
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply TODO_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: TODO_CONFIG_DIR env var > <platform config dir>/todo-dash
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.api.validate()?;
        self.validation.validate()?;
        self.session.validate()?;

        if let Some(ref file) = self.logging.file
            && file.trim().is_empty()
        {
            return Err(ConfigError::config("logging.file cannot be empty"));
        }

        Ok(())
    }

    /// Absolute path to the session file
    pub fn session_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.session.file))
    }

    /// Absolute path to the log file, if file logging is configured
    pub fn log_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref file) => {
                let path = Path::new(file);
                if path.is_absolute() {
                    Ok(Some(path.to_path_buf()))
                } else {
                    Ok(Some(Self::config_dir()?.join(path)))
                }
            }
            None => Ok(None),
        }
    }

    /// Log configuration summary (never logs the session contents).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  api: {} (timeout {})",
            self.api.base_url,
            match self.api.timeout_secs {
                0 => String::from("none"),
                secs => format!("{secs}s"),
            }
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
        info!(
            "  validation: title={}, desc={}, password>={}",
            self.validation.max_title_length,
            self.validation.max_description_length,
            self.validation.min_password_length
        );
        info!("  session: {}", self.session.file);
    }

    fn apply_env_overrides(&mut self) {
        // Api
        Self::apply_env_string("TODO_API_BASE_URL", &mut self.api.base_url);
        Self::apply_env_parse("TODO_API_TIMEOUT_SECS", &mut self.api.timeout_secs);

        // Logging
        Self::apply_env_parse("TODO_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("TODO_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("TODO_LOG_FILE", &mut self.logging.file);

        // Validation
        Self::apply_env_parse(
            "TODO_VALIDATION_MAX_TITLE_LENGTH",
            &mut self.validation.max_title_length,
        );
        Self::apply_env_parse(
            "TODO_VALIDATION_MAX_DESCRIPTION_LENGTH",
            &mut self.validation.max_description_length,
        );
        Self::apply_env_parse(
            "TODO_VALIDATION_MIN_PASSWORD_LENGTH",
            &mut self.validation.min_password_length,
        );

        // Session
        Self::apply_env_string("TODO_SESSION_FILE", &mut self.session.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
