use crate::Result as CoreErrorResult;

use std::collections::BTreeMap;

pub const AUTH_TOKEN_KEY: &str = "auth_token";
pub const REMEMBER_ME_KEY: &str = "remember_me";
pub const REMEMBERED_EMAIL_KEY: &str = "remembered_email";

/// Persisted key-value storage backing a [`Session`](crate::Session).
pub trait SessionStore: Send {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> CoreErrorResult<()>;

    /// Removing a missing key is not an error
    fn remove(&mut self, key: &str) -> CoreErrorResult<()>;
}

/// Process-local store; nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    entries: BTreeMap<String, String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> CoreErrorResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> CoreErrorResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}
