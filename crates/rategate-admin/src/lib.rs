//! RateGate admin glue — the settings panel a host embeds.
//!
//! `rategate-admin` connects a host's admin surface to the configuration
//! store in `rategate-core`: it contributes the settings section, hands out
//! the form schema, guards every save behind a one-time anti-forgery token,
//! and exposes the always-fresh snapshot the rate-limiting engine consumes.
//!
//! # Modules
//!
//! - [`panel`] — [`SettingsPanel`], the composition root.
//! - [`token`] — [`FormTokenStore`], one-time anti-forgery tokens.
//! - [`error`] — [`AdminError`] and [`AdminResult`].

pub mod error;
pub mod panel;
pub mod token;

pub use error::{AdminError, AdminResult};
pub use panel::SettingsPanel;
pub use token::FormTokenStore;
