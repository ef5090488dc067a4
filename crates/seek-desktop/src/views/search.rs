//! Search view - the dedicated search page

use std::time::Duration;

use dioxus::prelude::*;

use crate::components::{ResultList, SearchInput};
use crate::state::AppState;

const MAX_RESULTS: usize = 20;

/// Search page: field on top, debounced results below
#[component]
pub fn Search() -> Element {
    let mut state = use_context::<AppState>();
    let debounce = Duration::from_millis(state.config.read().debounce_ms);

    let results = use_resource(move || async move {
        let query = (state.query)();
        let index = state.index.read().clone();
        if !query.trim().is_empty() {
            tokio::time::sleep(debounce).await;
        }
        let found = index.search(&query, MAX_RESULTS);
        tracing::debug!(query = %query, results = found.len(), "Search finished");
        found
    });

    let is_loading = !results.finished();
    let query = state.query.read().clone();

    rsx! {
        div {
            class: "search-page",
            style: "display: flex; flex-direction: column; gap: 16px;",

            SearchInput {
                value: query.clone(),
                on_change: move |next| state.query.set(next),
                is_loading,
                auto_focus: true,
            }

            {
                match &*results.read() {
                    Some(entries) => rsx! {
                        ResultList { entries: entries.clone(), query }
                    },
                    None => rsx! {},
                }
            }
        }
    }
}
