//! The configuration store: persistence port, untyped save input, and the
//! [`ConfigStore`] mediating all reads and writes.
//!
//! The store is interface-polymorphic over persistence: anything implementing
//! [`SettingsBackend`] works — the in-memory [`MemoryBackend`] for tests and
//! embedded use, the TOML-file [`FileBackend`] for standalone deployments, or
//! a host-provided adapter over its own options storage.

pub mod file;
pub mod memory;

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::config::{
    default_max_requests, default_window_seconds, RateLimitConfig, RateLimitOptions,
};
use crate::error::ConfigResult;
use crate::schema::fields;

pub use file::FileBackend;
pub use memory::MemoryBackend;

/// Stable keys under which the four settings are persisted.
///
/// These are a contract with any backend that pre-populates or inspects the
/// underlying storage; do not rename.
pub mod keys {
    pub const ENABLED: &str = "rate_limiting_enabled";
    pub const SECONDS: &str = "rate_limiting_seconds";
    pub const LIMIT: &str = "rate_limiting_limit";
    pub const PROXY_SUPPORT: &str = "rate_limiting_proxy_support";
}

/// Key-value persistence port.
///
/// Implementations must be cheap to call: the enforcement engine reads the
/// store on its hot path. `Send + Sync` so one store can be shared
/// process-wide behind an [`Arc`].
pub trait SettingsBackend: Send + Sync {
    /// Returns the stored value for `key`, or `None` if absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`.
    fn set(&self, key: &str, value: &str) -> ConfigResult<()>;

    /// Stores a batch of entries as one unit.
    ///
    /// The default implementation loops over [`set`](Self::set); backends
    /// that can write atomically should override it so readers never observe
    /// a partially-updated configuration.
    fn set_all(&self, entries: &[(&str, String)]) -> ConfigResult<()> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }
}

/// Untyped form-style input for [`ConfigStore::update`].
///
/// Checkbox semantics are presence-based: a boolean field is `true` iff its
/// key appears here, regardless of the submitted value. Absence means
/// `false`, not "unchanged".
#[derive(Debug, Clone, Default)]
pub struct SettingsInput {
    values: BTreeMap<String, String>,
}

impl SettingsInput {
    /// Creates an empty input (every checkbox off, every number defaulted).
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Returns a new input with `id` set to `value`.
    #[must_use]
    pub fn with_field(mut self, id: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(id.into(), value.into());
        self
    }

    /// Returns a new input with `id` present, as a checked checkbox submits.
    #[must_use]
    pub fn with_flag(self, id: impl Into<String>) -> Self {
        self.with_field(id, "on")
    }

    /// Whether `id` was submitted at all.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.values.contains_key(id)
    }

    /// The submitted value for `id`, if present.
    #[must_use]
    pub fn value(&self, id: &str) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SettingsInput {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Mediates all reads and writes of the rate-limit configuration.
///
/// `load` never fails: absent or structurally invalid stored values are
/// silently replaced by the documented defaults. Authorization of writes is
/// the caller's concern — see the `rategate-admin` crate.
#[derive(Clone)]
pub struct ConfigStore {
    backend: Arc<dyn SettingsBackend>,
}

impl ConfigStore {
    pub fn new(backend: Arc<dyn SettingsBackend>) -> Self {
        Self { backend }
    }

    /// Returns the current configuration, substituting defaults for any
    /// field that is absent or invalid.
    pub fn load(&self) -> RateLimitConfig {
        let defaults = RateLimitConfig::default();
        RateLimitConfig {
            enabled: self.read_bool(keys::ENABLED, defaults.enabled),
            window_seconds: self.read_count(keys::SECONDS, defaults.window_seconds),
            max_requests: self.read_count(keys::LIMIT, defaults.max_requests),
            trust_proxy_headers: self.read_bool(keys::PROXY_SUPPORT, defaults.trust_proxy_headers),
        }
    }

    /// Read-only alias of [`load`](Self::load) for external consumers.
    ///
    /// Always reads the backend afresh — no caching.
    pub fn snapshot(&self) -> RateLimitConfig {
        self.load()
    }

    /// The current configuration in the fixed engine-facing shape.
    pub fn options(&self) -> RateLimitOptions {
        self.snapshot().into()
    }

    /// Computes the new configuration from untyped form input, persists all
    /// four fields as one unit, and returns it.
    ///
    /// Booleans follow checkbox presence semantics; integers fall back to
    /// their defaults when absent, empty, non-numeric, or below 1.
    ///
    /// # Errors
    ///
    /// Only if the backend rejects the write. Malformed input is never an
    /// error.
    pub fn update(&self, input: &SettingsInput) -> ConfigResult<RateLimitConfig> {
        let config = RateLimitConfig {
            enabled: input.contains(fields::ENABLED),
            window_seconds: count_or_default(input, fields::SECONDS, default_window_seconds()),
            max_requests: count_or_default(input, fields::LIMIT, default_max_requests()),
            trust_proxy_headers: input.contains(fields::PROXY_SUPPORT),
        };

        self.backend.set_all(&[
            (keys::ENABLED, config.enabled.to_string()),
            (keys::SECONDS, config.window_seconds.to_string()),
            (keys::LIMIT, config.max_requests.to_string()),
            (keys::PROXY_SUPPORT, config.trust_proxy_headers.to_string()),
        ])?;

        tracing::debug!(
            enabled = config.enabled,
            seconds = config.window_seconds,
            limit = config.max_requests,
            proxy_support = config.trust_proxy_headers,
            "rate-limit configuration updated"
        );
        Ok(config)
    }

    fn read_bool(&self, key: &str, default: bool) -> bool {
        match self.backend.get(key).as_deref() {
            Some("true") => true,
            Some("false") => false,
            Some(other) => {
                tracing::debug!("stored value {other:?} for {key} is not a boolean, using default");
                default
            }
            None => default,
        }
    }

    fn read_count(&self, key: &str, default: u64) -> u64 {
        match self.backend.get(key) {
            Some(raw) => parse_count(&raw).unwrap_or_else(|| {
                tracing::debug!("stored value {raw:?} for {key} is not a count, using default");
                default
            }),
            None => default,
        }
    }
}

/// Parses a positive integer from form/storage text.
///
/// Empty (after trimming), non-numeric, and zero values are all rejected —
/// the window and limit are always `>= 1`.
fn parse_count(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<u64>() {
        Ok(n) if n >= 1 => Some(n),
        _ => None,
    }
}

fn count_or_default(input: &SettingsInput, id: &str, default: u64) -> u64 {
    match input.value(id) {
        Some(raw) => parse_count(raw).unwrap_or_else(|| {
            tracing::debug!("submitted value {raw:?} for {id} is not a count, using default");
            default
        }),
        None => default,
    }
}
