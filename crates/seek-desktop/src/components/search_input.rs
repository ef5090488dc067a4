//! Search input with quick-access shortcut

use std::rc::Rc;

use dioxus::prelude::*;
use seek_core::hotkeys::HotkeyOptions;
use seek_core::search_box::{Navigate, RequestFocus};
use seek_core::slot::ElementSlot;
use seek_core::SearchBoxBehavior;

use super::hotkey_scope::use_hotkey;
use super::SearchField;
use crate::routes::{Route, SEARCH_ROUTE};
use crate::state::AppState;

/// Mounted `<input>` of one search box
#[derive(Clone)]
struct FocusHandle(Rc<MountedData>);

impl RequestFocus for FocusHandle {
    fn request_focus(&self) {
        let element = self.0.clone();
        spawn(async move {
            if let Err(e) = element.set_focus(true).await {
                tracing::warn!("Failed to focus search field: {:?}", e);
            }
        });
    }
}

struct RouterNavigator(Navigator);

impl Navigate for RouterNavigator {
    fn push(&mut self, route: &str) {
        match route.parse::<Route>() {
            Ok(target) => {
                self.0.push(target);
            }
            Err(e) => tracing::error!("Cannot navigate to {}: {}", route, e),
        }
    }
}

/// Search box bound to the window shortcut.
///
/// The shortcut opens the search page, or focuses this field when the search
/// page is already showing. The text is owned by the caller.
#[component]
pub fn SearchInput(
    value: String,
    on_change: EventHandler<String>,
    #[props(default)] is_loading: bool,
    #[props(default)] is_disabled: bool,
    #[props(default)] auto_focus: bool,
    #[props(into)] placeholder: Option<String>,
    #[props(default, into)] class: String,
) -> Element {
    let state = use_context::<AppState>();
    let (shortcut, prevent_default, default_placeholder) = {
        let config = state.config.read();
        (
            config.parsed_shortcut(),
            config.prevent_default,
            config.placeholder.clone(),
        )
    };

    let current_path = use_route::<Route>().to_string();
    let behavior = SearchBoxBehavior::new(SEARCH_ROUTE).disabled(is_disabled);
    let mut slot = use_signal(ElementSlot::<FocusHandle>::new);

    let on_shortcut = use_callback({
        let behavior = behavior.clone();
        move |()| {
            let mut router = RouterNavigator(navigator());
            let slot = slot.read();
            behavior.activate(&current_path, &mut router, &*slot);
        }
    });
    use_hotkey(shortcut.clone(), HotkeyOptions { prevent_default }, on_shortcut);

    use_drop(move || {
        if let Ok(mut slot) = slot.try_write() {
            slot.unmount();
        }
    });

    rsx! {
        SearchField {
            value,
            on_change: move |next: String| {
                behavior.forward_edit(next, |value| on_change.call(value));
            },
            is_loading,
            is_disabled,
            auto_focus,
            placeholder: placeholder.unwrap_or(default_placeholder),
            class,
            hint: shortcut.hint(),
            on_mounted: move |element: Rc<MountedData>| {
                slot.write().mount(FocusHandle(element));
            },
        }
    }
}
