//! OS-wide activation hotkey
//!
//! Raises the window from any application. The `global-hotkey` callback runs
//! off the UI thread, so it only sets [`ACTIVATION_REQUESTED`]; the app polls
//! the flag and does the rest.

use std::sync::atomic::{AtomicBool, Ordering};

use global_hotkey::{hotkey::HotKey, GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState};
use seek_core::Shortcut;

use crate::error::DesktopError;

/// Set when the activation hotkey was pressed; cleared by the UI poller
pub static ACTIVATION_REQUESTED: AtomicBool = AtomicBool::new(false);

/// Set once the activation hotkey is registered with the OS
static ACTIVATION_ENABLED: AtomicBool = AtomicBool::new(false);

/// Translate a shortcut into `global-hotkey`'s accelerator syntax
pub fn to_accelerator(shortcut: &Shortcut) -> String {
    let modifiers = shortcut.modifiers();
    let mut tokens: Vec<String> = Vec::with_capacity(5);

    if shortcut.uses_platform_mod() {
        tokens.push("CmdOrCtrl".to_string());
    }
    if modifiers.ctrl {
        tokens.push("Control".to_string());
    }
    if modifiers.alt {
        tokens.push("Alt".to_string());
    }
    if modifiers.shift {
        tokens.push("Shift".to_string());
    }
    if modifiers.meta {
        tokens.push("Super".to_string());
    }

    let key = match shortcut.key() {
        "space" => "Space".to_string(),
        "escape" => "Escape".to_string(),
        "enter" => "Enter".to_string(),
        other => other.to_uppercase(),
    };
    tokens.push(key);
    tokens.join("+")
}

/// Keeps the OS registration alive; dropping it unregisters the hotkey
pub struct ActivationHotkey {
    _manager: GlobalHotKeyManager,
}

impl ActivationHotkey {
    /// Register the hotkey and install the event handler.
    ///
    /// Must be called on the main thread before the window is launched.
    pub fn register(shortcut: &Shortcut) -> Result<Self, DesktopError> {
        let accelerator = to_accelerator(shortcut);
        let hotkey: HotKey = accelerator.parse()?;

        let manager = GlobalHotKeyManager::new()?;
        manager.register(hotkey)?;

        let id = hotkey.id();
        GlobalHotKeyEvent::set_event_handler(Some(move |event: GlobalHotKeyEvent| {
            if event.id == id && event.state == HotKeyState::Pressed {
                tracing::debug!("Activation hotkey pressed");
                ACTIVATION_REQUESTED.store(true, Ordering::SeqCst);
            }
        }));

        ACTIVATION_ENABLED.store(true, Ordering::SeqCst);
        tracing::info!("Registered activation hotkey: {}", shortcut.hint());
        Ok(Self { _manager: manager })
    }
}

pub fn activation_enabled() -> bool {
    ACTIVATION_ENABLED.load(Ordering::SeqCst)
}

/// Take a pending activation request, if any
pub fn take_activation_request() -> bool {
    ACTIVATION_REQUESTED.swap(false, Ordering::SeqCst)
}
