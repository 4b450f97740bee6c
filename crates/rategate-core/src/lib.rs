//! RateGate core library — host-agnostic rate-limit configuration.
//!
//! `rategate-core` holds and validates the settings a rate-limiting
//! enforcement engine consumes: an enable flag, the window duration, the
//! per-window request limit, and whether to trust proxy headers. It is
//! intentionally decoupled from any host framework so the same store can sit
//! behind an admin panel, a config file, or a test harness.
//!
//! # Modules
//!
//! - [`config`] — The [`RateLimitConfig`] model and the fixed
//!   [`RateLimitOptions`] snapshot shape handed to the engine.
//! - [`store`] — The [`ConfigStore`] and its pluggable persistence port
//!   ([`SettingsBackend`], with in-memory and TOML-file backends).
//! - [`schema`] — Settings-form descriptors for host admin UIs.
//! - [`error`] — Unified error type ([`ConfigError`]) and result alias
//!   ([`ConfigResult`]).

pub mod config;
pub mod error;
pub mod schema;
pub mod store;

pub use config::{RateLimitConfig, RateLimitOptions};
pub use error::{ConfigError, ConfigResult};
pub use schema::{
    FieldDescriptor, FieldKind, SettingsRegistry, SettingsSection, RATE_LIMITING_SECTION,
};
pub use store::{ConfigStore, FileBackend, MemoryBackend, SettingsBackend, SettingsInput};
