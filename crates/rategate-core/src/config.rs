//! The rate-limit settings model and its engine-facing snapshot shape.
//!
//! [`RateLimitConfig`] is what the store reads and writes; every field has a
//! documented default so a fresh (or partially populated) backend always
//! yields a usable configuration. [`RateLimitOptions`] is the fixed shape
//! handed to the enforcement engine — its field names are a contract.

use serde::{Deserialize, Serialize};

/// The four rate-limiting settings.
///
/// Integer fields are always `>= 1`; the store enforces this by falling back
/// to the defaults below whenever input is absent or malformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Whether enforcement should occur at all.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Duration of the rate-limiting window, in seconds.
    #[serde(default = "default_window_seconds")]
    pub window_seconds: u64,
    /// Maximum requests allowed per window.
    #[serde(default = "default_max_requests")]
    pub max_requests: u64,
    /// Whether to derive client identity from forwarded-for style headers
    /// set by a reverse proxy, rather than from the direct connection.
    #[serde(default)]
    pub trust_proxy_headers: bool,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            window_seconds: default_window_seconds(),
            max_requests: default_max_requests(),
            trust_proxy_headers: false,
        }
    }
}

pub(crate) fn default_enabled() -> bool {
    true
}

pub(crate) fn default_window_seconds() -> u64 {
    10
}

pub(crate) fn default_max_requests() -> u64 {
    25
}

/// Snapshot shape consumed by the external rate-limiting engine.
///
/// Field names and types are part of the contract other code depends on and
/// must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitOptions {
    pub enabled: bool,
    pub proxy_support: bool,
    pub limit: u64,
    pub seconds: u64,
}

impl From<RateLimitConfig> for RateLimitOptions {
    fn from(config: RateLimitConfig) -> Self {
        Self {
            enabled: config.enabled,
            proxy_support: config.trust_proxy_headers,
            limit: config.max_requests,
            seconds: config.window_seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = RateLimitConfig::default();

        assert!(config.enabled);
        assert_eq!(config.window_seconds, 10);
        assert_eq!(config.max_requests, 25);
        assert!(!config.trust_proxy_headers);
    }

    #[test]
    fn options_from_config_maps_fields() {
        let config = RateLimitConfig {
            enabled: false,
            window_seconds: 60,
            max_requests: 100,
            trust_proxy_headers: true,
        };

        let options = RateLimitOptions::from(config);
        assert!(!options.enabled);
        assert!(options.proxy_support);
        assert_eq!(options.limit, 100);
        assert_eq!(options.seconds, 60);
    }

    #[test]
    fn options_serialize_with_contract_field_names() {
        let options = RateLimitOptions::from(RateLimitConfig::default());
        let json = serde_json::to_value(&options).unwrap();

        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 4);
        assert_eq!(object["enabled"], true);
        assert_eq!(object["proxy_support"], false);
        assert_eq!(object["limit"], 25);
        assert_eq!(object["seconds"], 10);
    }

    #[test]
    fn config_deserializes_missing_fields_to_defaults() {
        let config: RateLimitConfig = toml::from_str("").unwrap();
        assert_eq!(config, RateLimitConfig::default());
    }

    #[test]
    fn config_deserializes_partial_fields() {
        let config: RateLimitConfig = toml::from_str("window_seconds = 30").unwrap();
        assert_eq!(config.window_seconds, 30);
        assert!(config.enabled);
        assert_eq!(config.max_requests, 25);
    }

    #[test]
    fn config_is_clone_and_debug() {
        let config = RateLimitConfig::default();
        let cloned = config.clone();
        assert_eq!(cloned, config);
        let debug = format!("{:?}", config);
        assert!(debug.contains("RateLimitConfig"));
    }
}
