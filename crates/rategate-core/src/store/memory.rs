//! In-memory settings backend.

use dashmap::DashMap;

use crate::error::ConfigResult;

use super::SettingsBackend;

/// Process-local backend backed by a concurrent map.
///
/// The default choice for tests and for hosts that persist settings through
/// their own mechanism and only need a live copy.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: DashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the backend holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SettingsBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    fn set(&self, key: &str, value: &str) -> ConfigResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
