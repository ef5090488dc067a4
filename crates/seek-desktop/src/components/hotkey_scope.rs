//! Window-wide keyboard shortcuts
//!
//! `HotkeyScope` wraps the whole window and owns the shortcut table.
//! Components register into it with [`use_hotkey`]. Key presses bubbling up
//! from inside the scope are matched by its own `onkeydown`; presses that
//! land outside it (on `<body>` when nothing has focus) are forwarded by a
//! document-level listener, so the table sees every key press in the window.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::document;
use dioxus::prelude::*;
use seek_core::hotkeys::{BindingId, Dispatch, HotkeyOptions, HotkeyTable};
use seek_core::shortcut::Modifiers;
use seek_core::{KeyPress, Shortcut};
use serde::Deserialize;

/// Shared shortcut table, provided as context by [`HotkeyScope`]
#[derive(Clone, Default)]
pub struct HotkeyRegistry(Rc<RefCell<HotkeyTable<Callback<()>>>>);

impl HotkeyRegistry {
    fn register(
        &self,
        shortcut: Shortcut,
        options: HotkeyOptions,
        handler: Callback<()>,
    ) -> BindingId {
        self.0.borrow_mut().register(shortcut, options, handler)
    }

    fn rebind(
        &self,
        id: BindingId,
        shortcut: Shortcut,
        options: HotkeyOptions,
        handler: Callback<()>,
    ) {
        self.0.borrow_mut().rebind(id, shortcut, options, handler);
    }

    fn unregister(&self, id: BindingId) {
        self.0.borrow_mut().unregister(id);
    }

    fn dispatch(&self, press: &KeyPress) -> Dispatch<Callback<()>> {
        self.0.borrow().dispatch(press)
    }

    /// Run the handlers matching `press`.
    ///
    /// Returns whether the key's default action should be suppressed.
    fn run(&self, press: &KeyPress) -> bool {
        let dispatch = self.dispatch(press);
        if dispatch.is_empty() {
            return false;
        }

        tracing::debug!(key = %press.key, handlers = dispatch.handlers.len(), "Shortcut matched");
        for handler in &dispatch.handlers {
            handler.call(());
        }
        dispatch.prevent_default
    }

    /// Run every handler bound to `shortcut` as if it had been pressed.
    ///
    /// Returns the number of handlers run.
    pub fn trigger(&self, shortcut: &Shortcut) -> usize {
        let handlers = self.0.borrow().handlers_for(shortcut);
        for handler in &handlers {
            handler.call(());
        }
        handlers.len()
    }
}

/// Convert a Dioxus keyboard event into a framework-neutral key press
pub fn key_press(data: &KeyboardData) -> KeyPress {
    let held = data.modifiers();
    KeyPress::new(
        data.key().to_string(),
        data.code().to_string(),
        Modifiers {
            ctrl: held.ctrl(),
            alt: held.alt(),
            shift: held.shift(),
            meta: held.meta(),
        },
    )
}

/// Marker attribute on the scope element, used by the document listener
const SCOPE_ATTR: &str = "data-hotkey-scope";

/// Forwards `keydown` events the scope element cannot see. Events from inside
/// the scope are left to its own handler so they are not matched twice.
const DOCUMENT_KEYDOWN_SCRIPT: &str = r#"
document.addEventListener("keydown", (event) => {
    const scope = document.querySelector("[data-hotkey-scope]");
    if (scope && scope.contains(event.target)) {
        return;
    }
    dioxus.send({
        key: event.key,
        code: event.code,
        ctrlKey: event.ctrlKey,
        altKey: event.altKey,
        shiftKey: event.shiftKey,
        metaKey: event.metaKey,
    });
});
await new Promise(() => {});
"#;

/// Key press as reported by the document listener
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DocumentKeyDown {
    key: String,
    code: String,
    ctrl_key: bool,
    alt_key: bool,
    shift_key: bool,
    meta_key: bool,
}

impl From<DocumentKeyDown> for KeyPress {
    fn from(event: DocumentKeyDown) -> Self {
        Self::new(
            event.key,
            event.code,
            Modifiers {
                ctrl: event.ctrl_key,
                alt: event.alt_key,
                shift: event.shift_key,
                meta: event.meta_key,
            },
        )
    }
}

/// Bind `handler` to `shortcut` for as long as the calling component lives.
///
/// The binding is refreshed on every render, so the handler always sees the
/// latest props and route.
pub fn use_hotkey(shortcut: Shortcut, options: HotkeyOptions, handler: Callback<()>) {
    let registry = use_context::<HotkeyRegistry>();

    let id = use_hook(|| registry.register(shortcut.clone(), options, handler));
    registry.rebind(id, shortcut, options, handler);

    use_drop(move || registry.unregister(id));
}

/// Root element that listens for shortcuts across the window
#[component]
pub fn HotkeyScope(children: Element) -> Element {
    let registry = use_context_provider(HotkeyRegistry::default);

    use_future({
        let registry = registry.clone();
        move || {
            let registry = registry.clone();
            async move {
                let mut listener = document::eval(DOCUMENT_KEYDOWN_SCRIPT);
                loop {
                    match listener.recv::<DocumentKeyDown>().await {
                        Ok(event) => {
                            // Too late to prevent the default action here
                            registry.run(&event.into());
                        }
                        Err(e) => {
                            tracing::warn!("Document key listener stopped: {e}");
                            break;
                        }
                    }
                }
            }
        }
    });

    let onkeydown = move |evt: Event<KeyboardData>| {
        if registry.run(&key_press(&evt)) {
            evt.prevent_default();
        }
    };

    rsx! {
        div {
            class: "hotkey-scope",
            "data-hotkey-scope": "true",
            tabindex: "-1",
            style: "outline: none; min-height: 100vh;",
            onkeydown,
            {children}
        }
    }
}
