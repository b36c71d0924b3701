mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod session_config;
mod session_file;
mod validation_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;
pub use session_file::FileSessionStore;
pub use validation_config::ValidationConfig;

const CONFIG_DIR_ENV: &str = "TODO_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = "todo-dash";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const MAX_TIMEOUT_SECS: u64 = 600;
const DEFAULT_SESSION_FILENAME: &str = "session.json";
const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
