//! Error types for the desktop app

use thiserror::Error;

/// Errors raised while wiring the desktop shell
#[derive(Error, Debug)]
pub enum DesktopError {
    /// OS hotkey manager or registration failure
    #[error("Hotkey error: {0}")]
    Hotkey(#[from] global_hotkey::Error),

    /// Hotkey string rejected by the OS hotkey parser
    #[error("Invalid activation hotkey: {0}")]
    HotkeyParse(#[from] global_hotkey::hotkey::HotKeyParseError),

    /// Configuration or index problem from seek-core
    #[error(transparent)]
    Core(#[from] seek_core::Error),
}
