//! Error types for `rategate-core`.
//!
//! All fallible operations in the core library return [`ConfigResult<T>`],
//! which is an alias for `Result<T, ConfigError>`.
//!
//! Note that malformed *values* are not errors: the store resolves them by
//! substituting documented defaults. Errors here are persistence failures.

/// Unified error type for all core operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A persisted settings file could not be parsed.
    #[error("settings parse error: {0}")]
    Parse(String),

    /// The backend rejected a write.
    #[error("settings persist error: {0}")]
    Persist(String),

    /// An I/O error from the underlying storage.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout `rategate-core`.
pub type ConfigResult<T> = Result<T, ConfigError>;
