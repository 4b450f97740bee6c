//! Error types for `rategate-admin`.

use rategate_core::ConfigError;

/// Errors surfaced by the settings panel.
#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    /// The anti-forgery token was missing, expired, or already used.
    ///
    /// Fatal to the request: the save is aborted before any write.
    #[error("could not verify request")]
    Forgery,

    /// The requested settings section is not contributed by this panel.
    #[error("unknown settings section: {0}")]
    UnknownSection(String),

    /// The underlying configuration store failed.
    #[error(transparent)]
    Store(#[from] ConfigError),
}

/// Convenience alias used throughout `rategate-admin`.
pub type AdminResult<T> = Result<T, AdminError>;
