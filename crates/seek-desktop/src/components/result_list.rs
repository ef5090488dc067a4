//! Search result list

use dioxus::prelude::*;
use seek_core::index::Entry;

use crate::state::AppState;

/// Entries found for the current query
#[component]
pub fn ResultList(entries: Vec<Entry>, query: String) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    if query.trim().is_empty() {
        return rsx! {
            p { style: "color: {colors.text_muted};", "Type to search." }
        };
    }

    rsx! {
        if entries.is_empty() {
            p {
                style: "color: {colors.text_muted};",
                "No results for \"{query}\""
            }
        } else {
            ul {
                class: "result-list",
                style: "list-style: none; margin: 0; padding: 0;",
                for entry in entries {
                    li {
                        key: "{entry.title}",
                        style: "padding: 10px 0; border-bottom: 1px solid {colors.border};",
                        div { style: "font-weight: 600;", "{entry.title}" }
                        div { style: "font-size: 13px; color: {colors.text_muted};", "{entry.summary}" }
                    }
                }
            }
        }
    }
}
