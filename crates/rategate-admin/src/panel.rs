//! The settings panel — the composition root a host embeds.
//!
//! A host with an event/hook dispatcher would wire five extension points to
//! this component: startup registration, settings-tab contribution, field
//! listing, save, and the engine's config filter. Each of those is a plain
//! method here — the host calls [`SettingsPanel`] directly, and the panel is
//! the only place that knows about both the store and the token check.

use std::sync::Arc;

use rategate_core::{
    ConfigStore, FieldDescriptor, RateLimitConfig, RateLimitOptions, SettingsBackend,
    SettingsInput, SettingsRegistry, SettingsSection,
};

use crate::error::{AdminError, AdminResult};
use crate::token::FormTokenStore;

/// How long an issued form token stays valid, in seconds.
const DEFAULT_TOKEN_TTL_SECONDS: u64 = 12 * 60 * 60;

/// Mediates the host admin UI and the configuration store.
pub struct SettingsPanel {
    store: ConfigStore,
    registry: SettingsRegistry,
    tokens: FormTokenStore,
}

impl SettingsPanel {
    /// Wires a panel over `backend` with the default token lifetime.
    ///
    /// This is the startup registration step: construct one panel and share
    /// it for the life of the process.
    pub fn new(backend: Arc<dyn SettingsBackend>) -> Self {
        Self::with_token_ttl(backend, DEFAULT_TOKEN_TTL_SECONDS)
    }

    /// Wires a panel with an explicit token lifetime.
    pub fn with_token_ttl(backend: Arc<dyn SettingsBackend>, token_ttl_seconds: u64) -> Self {
        Self {
            store: ConfigStore::new(backend),
            registry: SettingsRegistry::new(),
            tokens: FormTokenStore::new(token_ttl_seconds),
        }
    }

    /// The settings sections this panel contributes to the host UI.
    pub fn sections(&self) -> &[SettingsSection] {
        self.registry.sections()
    }

    /// Field descriptors for the active section, for form rendering.
    ///
    /// # Errors
    ///
    /// [`AdminError::UnknownSection`] if `section_id` is not contributed here.
    pub fn fields(&self, section_id: &str) -> AdminResult<&[FieldDescriptor]> {
        self.registry
            .find_section(section_id)
            .map(|section| section.fields.as_slice())
            .ok_or_else(|| AdminError::UnknownSection(section_id.to_string()))
    }

    /// Issues the anti-forgery token to embed in a rendered form.
    pub fn form_token(&self) -> String {
        self.tokens.issue()
    }

    /// Handles a form submission for `section_id`.
    ///
    /// The anti-forgery token is verified before the store is touched; on
    /// failure the request is aborted with [`AdminError::Forgery`] and no
    /// write happens. On success the store computes, persists, and returns
    /// the new configuration. An unknown section does not consume the token.
    pub fn save(
        &self,
        section_id: &str,
        input: &SettingsInput,
        token: &str,
    ) -> AdminResult<RateLimitConfig> {
        self.fields(section_id)?;
        if !self.tokens.consume(token) {
            tracing::warn!("settings save rejected: invalid anti-forgery token");
            return Err(AdminError::Forgery);
        }

        let config = self.store.update(input)?;
        tracing::debug!(section = section_id, "settings saved");
        Ok(config)
    }

    /// Current configuration in the engine-facing shape.
    ///
    /// Reads the store afresh on every call, so the engine always sees the
    /// latest saved values.
    pub fn rate_limit_options(&self) -> RateLimitOptions {
        self.store.options()
    }

    /// Read-only access to the underlying store.
    pub fn store(&self) -> &ConfigStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rategate_core::schema::{fields, RATE_LIMITING_SECTION};
    use rategate_core::{FileBackend, MemoryBackend};
    use tempfile::TempDir;

    fn memory_panel() -> SettingsPanel {
        SettingsPanel::new(Arc::new(MemoryBackend::new()))
    }

    // --- sections / fields ---

    #[test]
    fn panel_contributes_rate_limiting_section() {
        let panel = memory_panel();
        let sections = panel.sections();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].id, RATE_LIMITING_SECTION);
    }

    #[test]
    fn fields_lists_form_schema_for_active_section() {
        let panel = memory_panel();
        let descriptors = panel.fields(RATE_LIMITING_SECTION).unwrap();
        let ids: Vec<&str> = descriptors.iter().map(|f| f.id).collect();
        assert_eq!(
            ids,
            vec![
                fields::ENABLED,
                fields::SECONDS,
                fields::LIMIT,
                fields::PROXY_SUPPORT
            ]
        );
    }

    #[test]
    fn fields_unknown_section_errors() {
        let panel = memory_panel();
        let err = panel.fields("shipping").unwrap_err();
        assert!(matches!(err, AdminError::UnknownSection(_)));
    }

    // --- save ---

    #[test]
    fn save_with_valid_token_persists_config() {
        let panel = memory_panel();
        let token = panel.form_token();
        let input = SettingsInput::new()
            .with_flag(fields::ENABLED)
            .with_field(fields::SECONDS, "30")
            .with_field(fields::LIMIT, "5")
            .with_flag(fields::PROXY_SUPPORT);

        let config = panel.save(RATE_LIMITING_SECTION, &input, &token).unwrap();
        assert!(config.enabled);
        assert_eq!(config.window_seconds, 30);
        assert_eq!(config.max_requests, 5);
        assert!(config.trust_proxy_headers);

        assert_eq!(panel.store().load(), config);
    }

    #[test]
    fn save_without_valid_token_writes_nothing() {
        let panel = memory_panel();
        let before = panel.store().load();

        let input = SettingsInput::new().with_field(fields::SECONDS, "30");
        let err = panel
            .save(RATE_LIMITING_SECTION, &input, "forged-token")
            .unwrap_err();

        assert!(matches!(err, AdminError::Forgery));
        assert_eq!(panel.store().load(), before);
    }

    #[test]
    fn save_token_is_single_use() {
        let panel = memory_panel();
        let token = panel.form_token();
        let input = SettingsInput::new().with_flag(fields::ENABLED);

        panel.save(RATE_LIMITING_SECTION, &input, &token).unwrap();
        let err = panel
            .save(RATE_LIMITING_SECTION, &input, &token)
            .unwrap_err();
        assert!(matches!(err, AdminError::Forgery));
    }

    #[test]
    fn save_unknown_section_errors_without_write() {
        let panel = memory_panel();
        let before = panel.store().load();
        let token = panel.form_token();

        let input = SettingsInput::new().with_field(fields::SECONDS, "30");
        let err = panel.save("shipping", &input, &token).unwrap_err();

        assert!(matches!(err, AdminError::UnknownSection(_)));
        assert_eq!(panel.store().load(), before);

        // The token was not consumed by the failed attempt.
        let config = panel.save(RATE_LIMITING_SECTION, &input, &token).unwrap();
        assert_eq!(config.window_seconds, 30);
    }

    // --- rate_limit_options ---

    #[test]
    fn options_default_before_any_save() {
        let panel = memory_panel();
        let options = panel.rate_limit_options();
        assert!(options.enabled);
        assert!(!options.proxy_support);
        assert_eq!(options.limit, 25);
        assert_eq!(options.seconds, 10);
    }

    #[test]
    fn options_reflect_latest_save() {
        let panel = memory_panel();
        let token = panel.form_token();
        let input = SettingsInput::new()
            .with_field(fields::SECONDS, "60")
            .with_field(fields::LIMIT, "100");
        panel.save(RATE_LIMITING_SECTION, &input, &token).unwrap();

        let options = panel.rate_limit_options();
        assert!(!options.enabled);
        assert_eq!(options.seconds, 60);
        assert_eq!(options.limit, 100);
    }

    #[test]
    fn options_serialize_with_contract_field_names() {
        let panel = memory_panel();
        let json = serde_json::to_value(panel.rate_limit_options()).unwrap();
        let object = json.as_object().unwrap();
        assert!(object.contains_key("enabled"));
        assert!(object.contains_key("proxy_support"));
        assert!(object.contains_key("limit"));
        assert!(object.contains_key("seconds"));
    }

    // --- end to end over a file backend ---

    #[test]
    fn save_round_trips_through_file_backend() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("rategate.toml");

        let panel = SettingsPanel::new(Arc::new(FileBackend::new(&path)));
        let token = panel.form_token();
        let input = SettingsInput::new()
            .with_flag(fields::ENABLED)
            .with_field(fields::SECONDS, "45");
        panel.save(RATE_LIMITING_SECTION, &input, &token).unwrap();

        // A second panel over the same file sees the saved values.
        let reloaded = SettingsPanel::new(Arc::new(FileBackend::new(&path)));
        let options = reloaded.rate_limit_options();
        assert!(options.enabled);
        assert_eq!(options.seconds, 45);
        assert_eq!(options.limit, 25);
    }
}
