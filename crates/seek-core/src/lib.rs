//! seek-core - Core library for Seek
//!
//! Framework-independent pieces of the search input: the shortcut grammar,
//! the window-wide shortcut table, the search-box decision logic, and the
//! configuration model. The desktop crate renders these with Dioxus.

pub mod adornment;
pub mod classes;
pub mod config;
pub mod error;
pub mod hotkeys;
pub mod index;
pub mod search_box;
pub mod shortcut;
pub mod slot;

pub use error::{Error, Result};
pub use search_box::{SearchBoxBehavior, ShortcutOutcome};
pub use shortcut::{KeyPress, Shortcut};
