//! Settings-form schema for host admin UIs.
//!
//! Hosts that render a configuration form ask [`SettingsRegistry`] for the
//! available sections and their field descriptors instead of hard-coding
//! them. Field ids double as the keys of the untyped save input
//! ([`SettingsInput`](crate::store::SettingsInput)).

/// Stable field ids, as submitted by a settings form.
pub mod fields {
    /// Checkbox toggling enforcement on or off.
    pub const ENABLED: &str = "enabled";
    /// Number input for the window duration in seconds.
    pub const SECONDS: &str = "seconds";
    /// Number input for the per-window request limit.
    pub const LIMIT: &str = "limit";
    /// Checkbox toggling trust in forwarded-for style headers.
    pub const PROXY_SUPPORT: &str = "proxy_support";
}

/// The id of the rate-limiting settings section.
pub const RATE_LIMITING_SECTION: &str = "rate_limiting";

/// How a field should be rendered and submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Submitted by presence: the key appears in the input iff checked.
    Checkbox,
    /// Submitted as a decimal string.
    Number,
}

/// Metadata for a single settings field.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    /// Stable identifier used as the form input key (e.g. `"seconds"`).
    pub id: &'static str,
    /// Human-readable name shown next to the control.
    pub label: &'static str,
    /// Short help text shown under the control.
    pub description: &'static str,
    pub kind: FieldKind,
    /// Pre-filled value for number fields; checkboxes have none.
    pub default_value: Option<&'static str>,
}

/// A titled group of fields contributed to the host settings UI.
#[derive(Debug, Clone)]
pub struct SettingsSection {
    pub id: &'static str,
    pub title: &'static str,
    pub fields: Vec<FieldDescriptor>,
}

/// Registry of every settings section this component contributes.
#[derive(Debug, Clone)]
pub struct SettingsRegistry {
    sections: Vec<SettingsSection>,
}

impl SettingsRegistry {
    /// Builds the registry containing the rate-limiting section.
    pub fn new() -> Self {
        let sections = vec![SettingsSection {
            id: RATE_LIMITING_SECTION,
            title: "Rate Limiting",
            fields: vec![
                FieldDescriptor {
                    id: fields::ENABLED,
                    label: "Enable",
                    description: "Enable the rate limiting feature.",
                    kind: FieldKind::Checkbox,
                    default_value: None,
                },
                FieldDescriptor {
                    id: fields::SECONDS,
                    label: "Seconds",
                    description: "Time in seconds before rate limits are reset.",
                    kind: FieldKind::Number,
                    default_value: Some("10"),
                },
                FieldDescriptor {
                    id: fields::LIMIT,
                    label: "Limit",
                    description: "Amount of max requests allowed for the defined timeframe.",
                    kind: FieldKind::Number,
                    default_value: Some("25"),
                },
                FieldDescriptor {
                    id: fields::PROXY_SUPPORT,
                    label: "Enable basic proxy support",
                    description: "Enable this only if the service runs behind a reverse \
                                  proxy, cache system, etc.",
                    kind: FieldKind::Checkbox,
                    default_value: None,
                },
            ],
        }];
        Self { sections }
    }

    /// Returns all contributed sections.
    pub fn sections(&self) -> &[SettingsSection] {
        &self.sections
    }

    /// Finds a section by its string id.
    pub fn find_section(&self, id: &str) -> Option<&SettingsSection> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Finds a field descriptor by section and field id.
    pub fn find_field(&self, section_id: &str, field_id: &str) -> Option<&FieldDescriptor> {
        self.find_section(section_id)?
            .fields
            .iter()
            .find(|f| f.id == field_id)
    }
}

impl Default for SettingsRegistry {
    fn default() -> Self {
        Self::new()
    }
}
