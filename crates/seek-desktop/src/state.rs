//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use std::sync::Arc;

use dioxus::prelude::*;
use seek_core::config::SearchConfig;
use seek_core::index::SearchIndex;
use seek_core::Shortcut;

use crate::theme::ResolvedTheme;

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded configuration
    pub config: Signal<SearchConfig>,
    /// Resolved theme (light/dark based on config and system preference)
    pub theme: Signal<ResolvedTheme>,
    /// Current search text, shared by every search box
    pub query: Signal<String>,
    /// Entries the search page looks through
    pub index: Signal<Arc<SearchIndex>>,
}

impl AppState {
    /// In-window search shortcut
    #[must_use]
    pub fn shortcut(&self) -> Shortcut {
        self.config.read().parsed_shortcut()
    }
}
