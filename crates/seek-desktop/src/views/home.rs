//! Home view - landing page

use dioxus::prelude::*;

use crate::components::SearchInput;
use crate::state::AppState;

/// Landing page with a compact search box
#[component]
pub fn Home() -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let hint = state.shortcut().hint();

    rsx! {
        div {
            class: "home",
            style: "display: flex; flex-direction: column; gap: 16px;",

            SearchInput {
                value: state.query.read().clone(),
                on_change: move |query| state.query.set(query),
                class: "home-search",
            }

            h2 { style: "margin: 0;", "Seek" }
            p {
                style: "color: {colors.text_muted};",
                "Press {hint} from anywhere in this window to open search."
            }
        }
    }
}
