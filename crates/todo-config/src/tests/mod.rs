mod api_config;
mod validation;

use crate::{CONFIG_DIR_ENV, CONFIG_FILENAME};

use std::env;
use std::path::PathBuf;

use tempfile::TempDir;

/// Sets or clears one environment variable and puts the old value back on drop.
///
/// Config tests touch process-wide state, so every test using this is `#[serial]`.
pub(crate) struct EnvGuard {
    key: &'static str,
    previous: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        let previous = env::var(key).ok();
        // SAFETY: callers are #[serial], no other thread reads the environment
        unsafe { env::set_var(key, value) };
        Self { key, previous }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        let previous = env::var(key).ok();
        // SAFETY: see `set`
        unsafe { env::remove_var(key) };
        Self { key, previous }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // SAFETY: see `set`
        unsafe {
            match self.previous.take() {
                Some(value) => env::set_var(self.key, value),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Fresh config directory with TODO_CONFIG_DIR pointing at it
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set(CONFIG_DIR_ENV, temp.path().to_str().unwrap());
    (temp, guard)
}

pub(crate) fn write_config(dir: &TempDir, contents: &str) {
    std::fs::write(dir.path().join(CONFIG_FILENAME), contents).unwrap();
}

/// A session path whose parent is a regular file, so every write fails
pub(crate) fn unwritable_session_path(dir: &TempDir) -> PathBuf {
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();
    blocker.join("sub").join("session.json")
}
