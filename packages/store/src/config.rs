//! # Panel configuration: `admin-panel.toml`
//!
//! Defines the TOML configuration the web binary embeds at build time
//! (filename: [`PanelConfig::filename`] = `"admin-panel.toml"`).
//!
//! ## Structure
//!
//! ```toml
//! [display]
//! currency_symbol = "$"     # prefix for revenue figures
//!
//! [debug]
//! persist_events = true     # mirror debug events into local storage
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`PanelConfig`] | Top-level config with builder helpers and TOML (de)serialisation. |
//! | [`DisplayConfig`] | Display section: the currency symbol used on the dashboard. |
//! | [`DebugConfig`] | Debug section: whether recorded debug events are written to local storage. |
//!
//! Every field has a default, so a missing or empty file equals [`PanelConfig::default`].

use serde::{Deserialize, Serialize};

/// Errors raised while reading the panel configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid admin-panel.toml: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration stored in `admin-panel.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub debug: DebugConfig,
}

/// Display configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Prefix for monetary values on the dashboard.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

/// Debug channel configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Write each recorded debug event to local storage. When false, events only live
    /// in the in-memory log for the current page.
    #[serde(default = "default_persist_events")]
    pub persist_events: bool,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_persist_events() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            persist_events: default_persist_events(),
        }
    }
}

impl PanelConfig {
    /// Builder method to set the currency symbol.
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.display.currency_symbol = symbol.into();
        self
    }

    /// Builder method to toggle persistence of debug events.
    pub fn with_persist_events(mut self, persist: bool) -> Self {
        self.debug.persist_events = persist;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "admin-panel.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = PanelConfig::from_toml("").unwrap();
        assert_eq!(config, PanelConfig::default());
        assert_eq!(config.display.currency_symbol, "$");
        assert!(config.debug.persist_events);
    }

    #[test]
    fn test_partial_sections() {
        let config = PanelConfig::from_toml("[display]\ncurrency_symbol = \"€\"\n").unwrap();
        assert_eq!(config.display.currency_symbol, "€");
        assert!(config.debug.persist_events);

        let config = PanelConfig::from_toml("[debug]\npersist_events = false\n").unwrap();
        assert_eq!(config.display.currency_symbol, "$");
        assert!(!config.debug.persist_events);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let err = PanelConfig::from_toml("[display\n").unwrap_err();
        assert!(err.to_string().starts_with("invalid admin-panel.toml"));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = PanelConfig::default()
            .with_currency_symbol("£")
            .with_persist_events(false);
        let text = config.to_toml().unwrap();
        assert_eq!(PanelConfig::from_toml(&text).unwrap(), config);
    }
}
