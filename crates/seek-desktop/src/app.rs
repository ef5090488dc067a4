//! Main application component

use std::sync::Arc;

use dioxus::prelude::*;
use seek_core::config::SearchConfig;
use seek_core::index::SearchIndex;

use crate::components::SEARCH_FIELD_CSS;
use crate::routes::Route;
use crate::state::AppState;
use crate::theme::resolve_theme;

const ENTRIES_JSON: &str = include_str!("../data/entries.json");

const APP_CSS: &str = r"
body { margin: 0; }
.nav-link { color: inherit; text-decoration: none; }
";

/// Parse the bundled entries; an unreadable bundle leaves search empty
pub fn load_index() -> SearchIndex {
    SearchIndex::from_json(ENTRIES_JSON).unwrap_or_else(|e| {
        tracing::error!("Failed to load search entries: {}", e);
        SearchIndex::default()
    })
}

/// Root application component
#[component]
pub fn App() -> Element {
    let loaded = use_context::<SearchConfig>();

    let config = use_signal(|| loaded.clone());
    let theme = use_signal(|| resolve_theme(loaded.theme));
    let query = use_signal(String::new);
    let index = use_signal(|| {
        let index = load_index();
        tracing::info!("Loaded {} search entries", index.len());
        Arc::new(index)
    });

    use_context_provider(|| AppState {
        config,
        theme,
        query,
        index,
    });

    rsx! {
        style { {APP_CSS} }
        style { {SEARCH_FIELD_CSS} }
        Router::<Route> {}
    }
}
