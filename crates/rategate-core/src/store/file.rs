//! TOML-file settings backend.
//!
//! Settings are stored as a flat key-value table, e.g.:
//!
//! ```toml
//! rate_limiting_enabled = "true"
//! rate_limiting_seconds = "10"
//! ```
//!
//! Every write serialises the whole table, so a batched [`set_all`] lands as
//! one unit and readers never observe a torn configuration.
//!
//! [`set_all`]: super::SettingsBackend::set_all

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult};

use super::SettingsBackend;

/// File-backed settings storage.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Creates a backend over the TOML file at `path`.
    ///
    /// The file does not need to exist yet; it is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this backend reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the full table. A missing file is an empty table.
    fn read_entries(&self) -> ConfigResult<BTreeMap<String, String>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Writes the full table, creating parent directories if needed.
    fn write_entries(&self, entries: &BTreeMap<String, String>) -> ConfigResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(entries).map_err(|e| ConfigError::Parse(e.to_string()))?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl SettingsBackend for FileBackend {
    /// Reads never fail: an unreadable or malformed file is logged and
    /// treated as empty, so `ConfigStore::load` still yields defaults.
    fn get(&self, key: &str) -> Option<String> {
        match self.read_entries() {
            Ok(mut entries) => entries.remove(key),
            Err(e) => {
                tracing::warn!("failed to read settings file {:?}: {e}", self.path);
                None
            }
        }
    }

    /// Writes refuse to proceed over a malformed file rather than clobber it.
    fn set(&self, key: &str, value: &str) -> ConfigResult<()> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn set_all(&self, new_entries: &[(&str, String)]) -> ConfigResult<()> {
        let mut entries = self.read_entries()?;
        for (key, value) in new_entries {
            entries.insert((*key).to_string(), value.clone());
        }
        self.write_entries(&entries)
    }
}
