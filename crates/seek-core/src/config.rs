//! Search input configuration
//!
//! Stored as JSON. Every field has a default, so an empty object (or no file
//! at all) yields the stock `ctrl+K` setup.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::shortcut::Shortcut;

pub const DEFAULT_PLACEHOLDER: &str = "Search...";
pub const DEFAULT_SHORTCUT: &str = "ctrl+K";
pub const DEFAULT_ACTIVATION_HOTKEY: &str = "ctrl+shift+K";

/// Theme mode options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light theme
    Light,
    /// Dark theme
    Dark,
    /// Follow system preference
    #[default]
    System,
}

/// User-facing configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Text shown while the field is empty
    pub placeholder: String,
    /// In-window shortcut, e.g. `ctrl+K`
    pub shortcut: String,
    /// Suppress the default key action when the shortcut fires
    pub prevent_default: bool,
    /// OS-wide hotkey that raises the window; `null` disables it
    pub activation_hotkey: Option<String>,
    pub theme: ThemeMode,
    /// Delay before a typed query is run
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            shortcut: DEFAULT_SHORTCUT.to_string(),
            prevent_default: true,
            activation_hotkey: Some(DEFAULT_ACTIVATION_HOTKEY.to_string()),
            theme: ThemeMode::System,
            debounce_ms: 250,
        }
    }
}

impl SearchConfig {
    /// Parse and validate a JSON document
    pub fn from_json(payload: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(payload)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(payload) => {
                tracing::debug!("Loading config from {}", path.display());
                Self::from_json(&payload)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Reject values that have no sensible fallback.
    ///
    /// Shortcuts are not checked here: a bad `shortcut` falls back to the
    /// default in [`Self::parsed_shortcut`] and a bad `activation_hotkey` is
    /// reported when it is registered, so the rest of the file still applies.
    pub fn validate(&self) -> Result<()> {
        if self.placeholder.chars().any(char::is_control) {
            return Err(Error::InvalidConfig(
                "placeholder must not contain control characters".to_string(),
            ));
        }
        Ok(())
    }

    /// Parsed in-window shortcut, falling back to the default on bad input
    #[must_use]
    pub fn parsed_shortcut(&self) -> Shortcut {
        Shortcut::parse(&self.shortcut).unwrap_or_else(|e| {
            tracing::warn!("{e}; falling back to {DEFAULT_SHORTCUT}");
            default_shortcut()
        })
    }
}

/// The stock `ctrl+K` shortcut
#[must_use]
pub fn default_shortcut() -> Shortcut {
    DEFAULT_SHORTCUT
        .parse()
        .unwrap_or_else(|_| unreachable!("default shortcut is valid"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_match_stock_search_box() {
        let config = SearchConfig::default();
        assert_eq!(config.placeholder, "Search...");
        assert_eq!(config.parsed_shortcut().hint(), "CTRL+K");
        assert!(config.prevent_default);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = SearchConfig::from_json(r#"{"placeholder": "Find...", "theme": "dark"}"#)
            .unwrap();
        assert_eq!(config.placeholder, "Find...");
        assert_eq!(config.theme, ThemeMode::Dark);
        assert_eq!(config.shortcut, DEFAULT_SHORTCUT);
        assert_eq!(config.debounce_ms, 250);
    }

    #[test]
    fn rejects_unknown_fields_and_bad_values() {
        assert!(matches!(
            SearchConfig::from_json(r#"{"placeholdr": "typo"}"#),
            Err(Error::Serialization(_))
        ));
        assert!(matches!(
            SearchConfig::from_json(r#"{"placeholder": "line\nbreak"}"#),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn null_activation_hotkey_disables_it() {
        let config = SearchConfig::from_json(r#"{"activation_hotkey": null}"#).unwrap();
        assert_eq!(config.activation_hotkey, None);
    }

    #[test]
    fn bad_shortcut_falls_back_to_default() {
        let config = SearchConfig {
            shortcut: "ctrl+a+b".to_string(),
            ..SearchConfig::default()
        };
        assert_eq!(config.parsed_shortcut(), default_shortcut());
    }

    #[test]
    fn bad_shortcut_keeps_rest_of_file() {
        let config = SearchConfig::from_json(
            r#"{"placeholder": "Find notes", "shortcut": "ctrl+", "debounce_ms": 0}"#,
        )
        .unwrap();

        assert_eq!(config.placeholder, "Find notes");
        assert_eq!(config.debounce_ms, 0);
        assert_eq!(config.parsed_shortcut(), default_shortcut());
    }

    #[test]
    fn bad_activation_hotkey_keeps_rest_of_file() {
        let config =
            SearchConfig::from_json(r#"{"theme": "dark", "activation_hotkey": "shift+"}"#)
                .unwrap();

        assert_eq!(config.theme, ThemeMode::Dark);
        assert_eq!(config.activation_hotkey.as_deref(), Some("shift+"));
    }

    #[test]
    fn load_from_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = SearchConfig::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, SearchConfig::default());
    }

    #[test]
    fn load_from_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"shortcut": "mod+/", "debounce_ms": 0}}"#).unwrap();

        let config = SearchConfig::load_from(file.path()).unwrap();
        assert_eq!(config.parsed_shortcut().key(), "/");
        assert_eq!(config.debounce_ms, 0);
    }
}
