//! File-backed session storage.
//!
//! File location: `<config_dir>/session.json` (configurable via `session.file`).
//! The file is a flat JSON object of string keys to string values, rewritten
//! in full on every change. A missing or unreadable file is an empty session;
//! the next change overwrites it.

use crate::{Config, ConfigError, ConfigErrorResult};

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use todo_core::{Result as CoreErrorResult, SessionStore};

#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileSessionStore {
    /// Open the session file named by the loaded config.
    pub fn open(config: &Config) -> ConfigErrorResult<Self> {
        Self::open_at(config.session_path()?)
    }

    /// Open a session file at an explicit path (for tests).
    pub fn open_at(path: PathBuf) -> ConfigErrorResult<Self> {
        let entries = if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
                path: path.clone(),
                source: e,
            })?;

            match serde_json::from_str(&content) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(
                        "Ignoring unreadable session file {}: {e}",
                        path.display()
                    );
                    BTreeMap::new()
                }
            }
        } else {
            BTreeMap::new()
        };

        debug!("Opened session file {}", path.display());
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(path: &Path) -> ConfigErrorResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
            && !dir.exists()
        {
            std::fs::create_dir_all(dir).map_err(|e| ConfigError::Io {
                path: dir.to_path_buf(),
                source: e,
            })?;
        }
        Ok(())
    }

    /// Write `entries` to disk; callers commit them to memory only on success.
    fn flush(&self, entries: &BTreeMap<String, String>) -> ConfigErrorResult<()> {
        if entries.is_empty() {
            if self.path.exists() {
                std::fs::remove_file(&self.path).map_err(|e| ConfigError::Io {
                    path: self.path.clone(),
                    source: e,
                })?;
            }
            return Ok(());
        }

        Self::ensure_parent_dir(&self.path)?;

        let content = serde_json::to_string_pretty(entries)
            .map_err(|e| ConfigError::session(format!("Failed to serialize session: {e}")))?;

        std::fs::write(&self.path, content).map_err(|e| ConfigError::Io {
            path: self.path.clone(),
            source: e,
        })?;

        Self::restrict_permissions(&self.path)
    }

    /// The file holds a bearer token; keep it owner-only.
    #[cfg(unix)]
    fn restrict_permissions(path: &Path) -> ConfigErrorResult<()> {
        use std::os::unix::fs::PermissionsExt;

        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600)).map_err(|e| {
            ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            }
        })
    }

    #[cfg(not(unix))]
    fn restrict_permissions(_path: &Path) -> ConfigErrorResult<()> {
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> CoreErrorResult<()> {
        let mut entries = self.entries.clone();
        entries.insert(key.to_string(), value.to_string());

        self.flush(&entries)?;
        self.entries = entries;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> CoreErrorResult<()> {
        if !self.entries.contains_key(key) {
            return Ok(());
        }

        let mut entries = self.entries.clone();
        entries.remove(key);

        self.flush(&entries)?;
        self.entries = entries;
        Ok(())
    }
}
