//! UI Components
//!
//! Reusable UI components for the desktop application.

mod hotkey_scope;
mod result_list;
mod search_field;
mod search_input;

pub use hotkey_scope::{HotkeyRegistry, HotkeyScope};
pub use result_list::ResultList;
pub use search_field::{SearchField, SEARCH_FIELD_CSS};
pub use search_input::SearchInput;
