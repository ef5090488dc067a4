//! Window-wide shortcut table
//!
//! Components register a handler for a shortcut and get a [`BindingId`] back.
//! The window's key listener asks the table which handlers a key press
//! triggers. Handlers are returned by value so the caller can release any
//! borrow of the table before running them.

use crate::shortcut::{KeyPress, Shortcut};

/// Identifies one registration in a [`HotkeyTable`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BindingId(u64);

/// Per-binding options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotkeyOptions {
    /// Suppress the host's default action for the key press
    pub prevent_default: bool,
}

impl Default for HotkeyOptions {
    fn default() -> Self {
        Self {
            prevent_default: true,
        }
    }
}

#[derive(Debug)]
struct Binding<H> {
    id: BindingId,
    shortcut: Shortcut,
    options: HotkeyOptions,
    handler: H,
}

/// Handlers triggered by a single key press
#[derive(Debug)]
pub struct Dispatch<H> {
    pub handlers: Vec<H>,
    pub prevent_default: bool,
}

impl<H> Dispatch<H> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

/// Registered shortcuts, in registration order
#[derive(Debug)]
pub struct HotkeyTable<H> {
    bindings: Vec<Binding<H>>,
    next_id: u64,
}

impl<H> Default for HotkeyTable<H> {
    fn default() -> Self {
        Self {
            bindings: Vec::new(),
            next_id: 0,
        }
    }
}

impl<H: Clone> HotkeyTable<H> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        shortcut: Shortcut,
        options: HotkeyOptions,
        handler: H,
    ) -> BindingId {
        let id = BindingId(self.next_id);
        self.next_id += 1;
        tracing::debug!(%shortcut, id = id.0, "Registered shortcut");
        self.bindings.push(Binding {
            id,
            shortcut,
            options,
            handler,
        });
        id
    }

    /// Replace shortcut, options and handler of an existing binding.
    ///
    /// Returns `false` if the binding was already removed.
    pub fn rebind(
        &mut self,
        id: BindingId,
        shortcut: Shortcut,
        options: HotkeyOptions,
        handler: H,
    ) -> bool {
        let Some(binding) = self.bindings.iter_mut().find(|b| b.id == id) else {
            return false;
        };
        if binding.shortcut != shortcut {
            tracing::debug!(from = %binding.shortcut, to = %shortcut, "Shortcut rebound");
        }
        binding.shortcut = shortcut;
        binding.options = options;
        binding.handler = handler;
        true
    }

    pub fn unregister(&mut self, id: BindingId) -> bool {
        let before = self.bindings.len();
        self.bindings.retain(|b| b.id != id);
        let removed = self.bindings.len() != before;
        if removed {
            tracing::debug!(id = id.0, "Unregistered shortcut");
        }
        removed
    }

    /// Handlers whose shortcut matches the key press
    #[must_use]
    pub fn dispatch(&self, press: &KeyPress) -> Dispatch<H> {
        let mut dispatch = Dispatch {
            handlers: Vec::new(),
            prevent_default: false,
        };
        for binding in self.bindings.iter().filter(|b| b.shortcut.matches(press)) {
            dispatch.prevent_default |= binding.options.prevent_default;
            dispatch.handlers.push(binding.handler.clone());
        }
        dispatch
    }

    /// Handlers bound to exactly this shortcut, for triggering from outside
    /// the window (e.g. an OS-level hotkey)
    #[must_use]
    pub fn handlers_for(&self, shortcut: &Shortcut) -> Vec<H> {
        self.bindings
            .iter()
            .filter(|b| &b.shortcut == shortcut)
            .map(|b| b.handler.clone())
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
