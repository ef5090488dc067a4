//! Routes and the window shell

use std::time::Duration;

use dioxus::desktop::window;
use dioxus::prelude::*;

use crate::components::{HotkeyRegistry, HotkeyScope};
use crate::hotkey::{activation_enabled, take_activation_request};
use crate::state::AppState;
use crate::views::{Home, Search};

/// Path of the dedicated search page
pub const SEARCH_ROUTE: &str = "/search";

const ACTIVATION_POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Routable, Clone, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/search")]
        Search {},
}

/// Layout shared by every page: theme, navigation, and the shortcut scope
#[component]
fn Shell() -> Element {
    let state = use_context::<AppState>();
    let theme = (state.theme)();
    let colors = theme.palette();

    rsx! {
        HotkeyScope {
            div {
                class: "shell",
                "data-theme": theme.as_attr(),
                style: "
                    min-height: 100vh;
                    font-family: system-ui, -apple-system, sans-serif;
                    font-size: 14px;
                    background: {colors.bg_primary};
                    color: {colors.text_primary};
                ",

                nav {
                    style: "
                        display: flex;
                        gap: 16px;
                        padding: 12px 16px;
                        border-bottom: 1px solid {colors.border};
                        color: {colors.accent};
                    ",
                    Link { to: Route::Home {}, class: "nav-link", "Home" }
                    Link { to: Route::Search {}, class: "nav-link", "Search" }
                }

                main {
                    style: "padding: 16px; max-width: 720px; margin: 0 auto;",
                    Outlet::<Route> {}
                }
            }

            ActivationListener {}
        }
    }
}

/// Raises the window and runs the search shortcut when the OS-wide
/// activation hotkey fires
#[component]
fn ActivationListener() -> Element {
    let registry = use_context::<HotkeyRegistry>();
    let state = use_context::<AppState>();

    use_future(move || {
        let registry = registry.clone();
        async move {
            if !activation_enabled() {
                return;
            }
            loop {
                if take_activation_request() {
                    let desktop = window();
                    desktop.set_visible(true);
                    desktop.set_focus();

                    let fired = registry.trigger(&state.shortcut());
                    tracing::info!(handlers = fired, "Window activated from hotkey");
                }
                tokio::time::sleep(ACTIVATION_POLL_INTERVAL).await;
            }
        }
    });

    rsx! {}
}
