//! Key/value storage for user preferences.
//!
//! Stores are best-effort: callers log failures and carry on with in-memory
//! state, so implementations report errors instead of hiding them.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::Context;

use super::config_base_dir;

/// String-valued preference storage.
pub(crate) trait PreferenceStore: Send + Sync {
    /// Returns the stored value, or `None` when `key` was never written.
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Arc<T> {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        (**self).set(key, value)
    }
}

/// Returns the path to `~/.config/bizrecovery/preferences.ron`.
pub(crate) fn default_preferences_path() -> Option<PathBuf> {
    config_base_dir().map(|base| base.join("bizrecovery").join("preferences.ron"))
}

/// Preferences kept as a RON map in a single file.
#[derive(Debug)]
pub(crate) struct RonFileStore {
    path: PathBuf,
}

impl RonFileStore {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> anyhow::Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        ron::from_str(&contents).with_context(|| format!("parsing {}", self.path.display()))
    }
}

impl PreferenceStore for RonFileStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.read_map()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        // A corrupted file is replaced rather than blocking the write.
        let mut map = self.read_map().unwrap_or_default();
        map.insert(key.to_string(), value.to_string());

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        }
        let pretty = ron::ser::PrettyConfig::default();
        let serialized = ron::ser::to_string_pretty(&map, pretty)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }
}

/// Process-local store, used for `--store memory` and in tests.
#[derive(Debug, Default)]
pub(crate) struct MemoryStore {
    values: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Starts with `key` already set to `value`.
    #[cfg_attr(not(test), allow(dead_code))]
    pub(crate) fn seeded(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut values) = store.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let values = self
            .values
            .lock()
            .map_err(|_| anyhow::anyhow!("preference lock poisoned"))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| anyhow::anyhow!("preference lock poisoned"))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config_store.rs"]
mod tests;
