//! Search field rendering
//!
//! Pure view of the search box: everything it shows comes from props. The
//! shortcut and routing live in [`super::SearchInput`].

use std::rc::Rc;

use dioxus::prelude::*;
use seek_core::adornment::Adornment;
use seek_core::classes::merge_classes;
use seek_core::config::DEFAULT_PLACEHOLDER;

use crate::state::AppState;
use crate::theme::ResolvedTheme;

/// Stylesheet for the field; loaded once by the app root
pub const SEARCH_FIELD_CSS: &str = r"
@keyframes search-field-spin { to { transform: rotate(360deg); } }
.search-field__spinner {
    width: 12px;
    height: 12px;
    border: 2px solid currentColor;
    border-right-color: transparent;
    border-radius: 50%;
    animation: search-field-spin 0.75s linear infinite;
}
@media (max-width: 767px) {
    .search-field__hint { display: none; }
}
";

/// Controlled search input with a leading icon/spinner and a shortcut hint
#[component]
pub fn SearchField(
    value: String,
    on_change: EventHandler<String>,
    #[props(default)] is_loading: bool,
    #[props(default)] is_disabled: bool,
    #[props(default)] auto_focus: bool,
    #[props(default = DEFAULT_PLACEHOLDER.to_string(), into)] placeholder: String,
    #[props(default, into)] class: String,
    #[props(into)] hint: Option<String>,
    on_mounted: Option<EventHandler<Rc<MountedData>>>,
) -> Element {
    let colors = try_use_context::<AppState>()
        .map_or(ResolvedTheme::Light, |state| (state.theme)())
        .palette();
    let class = merge_classes([Some(class.as_str()), Some("search-field")]);
    let opacity = if is_disabled { "0.5" } else { "1" };

    rsx! {
        div {
            class: "{class}",
            style: "
                display: flex;
                align-items: center;
                gap: 8px;
                width: 100%;
                box-sizing: border-box;
                padding: 8px 12px;
                border: 1px solid {colors.border};
                border-radius: 10px;
                background: {colors.bg_secondary};
                color: {colors.text_primary};
                opacity: {opacity};
            ",

            span {
                class: "search-field__adornment",
                aria_hidden: "true",
                style: "display: flex; flex-shrink: 0; pointer-events: none; color: {colors.text_muted};",
                {
                    match Adornment::for_loading(is_loading) {
                        Adornment::Spinner => rsx! {
                            span { class: "search-field__spinner", role: "status" }
                        },
                        Adornment::SearchIcon => rsx! { SearchIcon {} },
                    }
                }
            }

            input {
                r#type: "search",
                autocomplete: "off",
                aria_label: "Search",
                autofocus: auto_focus && !is_disabled,
                disabled: is_disabled,
                placeholder: "{placeholder}",
                value: "{value}",
                style: "
                    flex: 1;
                    min-width: 0;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: inherit;
                    font-size: 14px;
                ",
                oninput: move |evt: FormEvent| {
                    if !is_disabled {
                        on_change.call(evt.value());
                    }
                },
                onmounted: move |evt: MountedEvent| {
                    if let Some(handler) = on_mounted {
                        handler.call(evt.data());
                    }
                },
            }

            if let Some(hint) = hint {
                kbd {
                    class: "search-field__hint",
                    style: "
                        padding: 2px 6px;
                        border-radius: 4px;
                        font-size: 11px;
                        background: {colors.kbd_bg};
                        color: {colors.text_muted};
                    ",
                    "{hint}"
                }
            }
        }
    }
}

/// Magnifying glass
#[component]
fn SearchIcon() -> Element {
    rsx! {
        svg {
            class: "search-field__icon",
            width: "14",
            height: "14",
            view_box: "0 0 512 512",
            fill: "currentColor",
            path { d: "M505 442.7L405.3 343c-4.5-4.5-10.6-7-17-7H372c27.6-35.3 44-79.7 44-128C416 93.1 322.9 0 208 0S0 93.1 0 208s93.1 208 208 208c48.3 0 92.7-16.4 128-44v16.3c0 6.4 2.5 12.5 7 17l99.7 99.7c9.4 9.4 24.6 9.4 33.9 0l28.3-28.3c9.4-9.4 9.4-24.6.1-34zM208 336c-70.7 0-128-57.2-128-128 0-70.7 57.2-128 128-128 70.7 0 128 57.2 128 128 0 70.7-57.2 128-128 128z" }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use dioxus::dioxus_core::Mutation;

    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn idle_field_shows_icon_and_value() {
        let html = render(|| {
            rsx! {
                SearchField { value: "rust", on_change: move |_| {}, hint: "CTRL+K" }
            }
        });

        assert!(html.contains("search-field__icon"));
        assert!(!html.contains("search-field__spinner"));
        assert!(html.contains("rust"));
        assert!(html.contains("CTRL+K"));
        assert!(html.contains("Search..."));
        assert!(!html.contains("disabled"));
    }

    #[test]
    fn loading_field_shows_spinner_instead_of_icon() {
        let html = render(|| {
            rsx! {
                SearchField { value: "", on_change: move |_| {}, is_loading: true }
            }
        });

        assert!(html.contains("search-field__spinner"));
        assert!(!html.contains("search-field__icon"));
    }

    #[test]
    fn disabled_field_renders_disabled_input() {
        let html = render(|| {
            rsx! {
                SearchField { value: "", on_change: move |_| {}, is_disabled: true, auto_focus: true }
            }
        });

        assert!(html.contains("disabled"));
        assert!(!html.contains("autofocus"));
    }

    #[test]
    fn caller_class_comes_before_base_class() {
        let html = render(|| {
            rsx! {
                SearchField {
                    value: "",
                    on_change: move |_| {},
                    class: "header-search",
                    placeholder: "Find notes",
                }
            }
        });

        assert!(html.contains("header-search search-field"));
        assert!(html.contains("Find notes"));
        assert!(!html.contains("search-field__hint"));
    }

    thread_local! {
        static CONTROLLED_VALUE: RefCell<Option<Signal<String>>> = const { RefCell::new(None) };
    }

    fn controlled() -> Element {
        let value = use_signal(|| "first query".to_string());
        use_hook(|| CONTROLLED_VALUE.with(|slot| *slot.borrow_mut() = Some(value)));

        rsx! {
            SearchField { value: value(), on_change: move |_| {} }
        }
    }

    #[test]
    fn new_value_updates_field_in_place() {
        let mut dom = VirtualDom::new(controlled);
        dom.rebuild_in_place();
        assert!(dioxus_ssr::render(&dom).contains("first query"));

        let mut value = CONTROLLED_VALUE
            .with(|slot| *slot.borrow())
            .expect("signal stored on first render");
        dom.in_runtime(|| value.set("second query".to_string()));
        dom.mark_dirty(ScopeId::APP);
        let mutations = dom.render_immediate_to_vec();

        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("second query"));
        assert!(!html.contains("first query"));

        // The existing input is patched, nothing is recreated
        assert!(mutations.edits.iter().any(|edit| matches!(
            edit,
            Mutation::SetAttribute { name, .. } if name.to_string() == "value"
        )));
        assert!(!mutations.edits.iter().any(|edit| matches!(
            edit,
            Mutation::LoadTemplate { .. } | Mutation::ReplaceWith { .. }
        )));
    }
}
