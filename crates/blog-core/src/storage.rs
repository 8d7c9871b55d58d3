//! Capabilities the theme store depends on.
//!
//! Durable storage and the system dark-mode signal are injected rather than
//! read from the environment, so the store can run against in-memory fakes.

use scc::HashMap;

use crate::error::Result;

/// Key-value storage for the persisted theme choice.
pub trait PreferenceStorage: Send + Sync {
    /// Read the value stored at `key`. `Ok(None)` means nothing is recorded.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` at `key`, replacing any prior value.
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// Source of the system-level dark-mode preference.
pub trait SystemPreference: Send + Sync {
    /// `Some(true)` if the system prefers dark, `Some(false)` if it prefers
    /// light, `None` if no signal is available.
    fn prefers_dark(&self) -> Option<bool>;
}

/// Session-only storage. Values are lost with the process.
#[derive(Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage that already holds one entry.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::new();
        storage.entries.upsert(key.into(), value.into());
        storage
    }
}

impl PreferenceStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read(key, |_, v| v.clone()))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.entries.upsert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: PreferenceStorage + ?Sized> PreferenceStorage for std::sync::Arc<S> {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }
}

/// A system preference with a fixed answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedPreference(pub Option<bool>);

impl FixedPreference {
    pub const NONE: Self = Self(None);
    pub const DARK: Self = Self(Some(true));
    pub const LIGHT: Self = Self(Some(false));
}

impl SystemPreference for FixedPreference {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }
}
