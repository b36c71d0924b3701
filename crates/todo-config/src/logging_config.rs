use crate::LogLevel;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Colored level names on stderr (ignored when logging to a file)
    pub colored: bool,
    /// Append to this file instead of stderr. Relative paths resolve
    /// against the config directory.
    pub file: Option<String>,
}
