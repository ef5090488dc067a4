//! Keyboard shortcut grammar and matching
//!
//! Shortcuts are written as `+`-separated tokens, e.g. `ctrl+K` or
//! `mod+shift+p`. Parsing is case-insensitive. Matching is exact: a modifier
//! that is not part of the shortcut must not be held.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Modifier state of a shortcut or a key press
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[allow(clippy::struct_excessive_bools)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

/// A parsed key combination
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shortcut {
    modifiers: Modifiers,
    /// `mod` token: ctrl or meta, whichever the platform uses
    platform_mod: bool,
    key: String,
}

/// A key event, independent of the UI framework that produced it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyPress {
    /// Logical key value (`"k"`, `"Enter"`, `" "`)
    pub key: String,
    /// Physical key code (`"KeyK"`, `"Digit1"`)
    pub code: String,
    pub modifiers: Modifiers,
}

impl KeyPress {
    pub fn new(key: impl Into<String>, code: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            code: code.into(),
            modifiers,
        }
    }
}

impl Shortcut {
    /// Parse a shortcut such as `ctrl+K`
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = |reason: &str| Error::InvalidShortcut {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        if input.trim().is_empty() {
            return Err(invalid("shortcut is empty"));
        }

        let mut modifiers = Modifiers::default();
        let mut platform_mod = false;
        let mut key: Option<String> = None;

        for token in input.split('+') {
            let token = token.trim().to_lowercase();
            match token.as_str() {
                "" => return Err(invalid("empty token")),
                "ctrl" | "control" => modifiers.ctrl = true,
                "alt" | "option" => modifiers.alt = true,
                "shift" => modifiers.shift = true,
                "meta" | "cmd" | "super" => modifiers.meta = true,
                "mod" => platform_mod = true,
                _ => {
                    if key.is_some() {
                        return Err(invalid("more than one non-modifier key"));
                    }
                    key = Some(normalize_key_name(&token));
                }
            }
        }

        let key = key.ok_or_else(|| invalid("missing key"))?;
        Ok(Self {
            modifiers,
            platform_mod,
            key,
        })
    }

    /// Normalized key token (lowercase)
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub const fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Whether the shortcut uses the `mod` token
    #[must_use]
    pub const fn uses_platform_mod(&self) -> bool {
        self.platform_mod
    }

    /// Whether the key press triggers this shortcut
    #[must_use]
    pub fn matches(&self, press: &KeyPress) -> bool {
        let held = press.modifiers;

        if self.modifiers.alt != held.alt || self.modifiers.shift != held.shift {
            return false;
        }

        if self.platform_mod {
            if !held.ctrl && !held.meta {
                return false;
            }
        } else if self.modifiers.ctrl != held.ctrl || self.modifiers.meta != held.meta {
            return false;
        }

        let pressed_key = normalize_key_name(&press.key.to_lowercase());
        pressed_key == self.key || code_key_name(&press.code) == self.key
    }

    /// Upper-cased label for keyboard hints, e.g. `CTRL+K`
    #[must_use]
    pub fn hint(&self) -> String {
        let mac = cfg!(target_os = "macos");
        let mut parts = Vec::with_capacity(5);
        if self.platform_mod {
            parts.push(if mac { "CMD" } else { "CTRL" });
        }
        // `mod` already names the platform key
        if self.modifiers.ctrl && !(self.platform_mod && !mac) {
            parts.push("CTRL");
        }
        if self.modifiers.alt {
            parts.push("ALT");
        }
        if self.modifiers.shift {
            parts.push("SHIFT");
        }
        if self.modifiers.meta && !(self.platform_mod && mac) {
            parts.push("META");
        }

        let key = self.key.to_uppercase();
        let mut hint = parts.join("+");
        if !hint.is_empty() {
            hint.push('+');
        }
        hint.push_str(&key);
        hint
    }
}

impl FromStr for Shortcut {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tokens = Vec::with_capacity(5);
        if self.platform_mod {
            tokens.push("mod");
        }
        if self.modifiers.ctrl {
            tokens.push("ctrl");
        }
        if self.modifiers.alt {
            tokens.push("alt");
        }
        if self.modifiers.shift {
            tokens.push("shift");
        }
        if self.modifiers.meta {
            tokens.push("meta");
        }
        tokens.push(&self.key);
        write!(f, "{}", tokens.join("+"))
    }
}

fn normalize_key_name(lowercase: &str) -> String {
    match lowercase {
        " " => "space".to_string(),
        "esc" => "escape".to_string(),
        "return" => "enter".to_string(),
        other => other.to_string(),
    }
}

/// `KeyK` -> `k`, `Digit1` -> `1`, anything else lowercased
fn code_key_name(code: &str) -> String {
    let stripped = code
        .strip_prefix("Key")
        .or_else(|| code.strip_prefix("Digit"))
        .unwrap_or(code);
    stripped.to_lowercase()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn ctrl() -> Modifiers {
        Modifiers {
            ctrl: true,
            ..Modifiers::default()
        }
    }

    #[test]
    fn parses_modifiers_case_insensitively() {
        let shortcut = Shortcut::parse("Ctrl + Shift + k").unwrap();
        assert_eq!(shortcut.key(), "k");
        assert_eq!(
            shortcut.modifiers(),
            Modifiers {
                ctrl: true,
                shift: true,
                ..Modifiers::default()
            }
        );
        assert_eq!(shortcut.to_string(), "ctrl+shift+k");
    }

    #[test]
    fn rejects_malformed_shortcuts() {
        for input in ["", "   ", "ctrl+", "ctrl+shift", "ctrl+a+b", "+k"] {
            assert!(
                matches!(
                    Shortcut::parse(input),
                    Err(Error::InvalidShortcut { .. })
                ),
                "expected error for {input:?}"
            );
        }
    }

    #[test]
    fn matches_by_logical_key_or_physical_code() {
        let shortcut: Shortcut = "ctrl+K".parse().unwrap();
        assert!(shortcut.matches(&KeyPress::new("k", "KeyK", ctrl())));
        assert!(shortcut.matches(&KeyPress::new("K", "KeyK", ctrl())));
        // Non-latin layouts still report the physical code
        assert!(shortcut.matches(&KeyPress::new("л", "KeyK", ctrl())));
    }

    #[test]
    fn modifier_matching_is_exact() {
        let shortcut = Shortcut::parse("ctrl+k").unwrap();
        assert!(!shortcut.matches(&KeyPress::new("k", "KeyK", Modifiers::default())));

        let with_shift = Modifiers {
            shift: true,
            ..ctrl()
        };
        assert!(!shortcut.matches(&KeyPress::new("k", "KeyK", with_shift)));

        let meta_only = Modifiers {
            meta: true,
            ..Modifiers::default()
        };
        assert!(!shortcut.matches(&KeyPress::new("k", "KeyK", meta_only)));
    }

    #[test]
    fn platform_mod_accepts_ctrl_or_meta() {
        let shortcut = Shortcut::parse("mod+k").unwrap();
        let meta_only = Modifiers {
            meta: true,
            ..Modifiers::default()
        };
        assert!(shortcut.matches(&KeyPress::new("k", "KeyK", ctrl())));
        assert!(shortcut.matches(&KeyPress::new("k", "KeyK", meta_only)));
        assert!(!shortcut.matches(&KeyPress::new("k", "KeyK", Modifiers::default())));
    }

    #[test]
    fn space_and_escape_aliases() {
        let space = Shortcut::parse("alt+space").unwrap();
        let alt = Modifiers {
            alt: true,
            ..Modifiers::default()
        };
        assert!(space.matches(&KeyPress::new(" ", "Space", alt)));

        let escape = Shortcut::parse("esc").unwrap();
        assert!(escape.matches(&KeyPress::new("Escape", "Escape", Modifiers::default())));
    }

    #[test]
    fn hint_is_upper_cased() {
        assert_eq!(Shortcut::parse("ctrl+K").unwrap().hint(), "CTRL+K");
        assert_eq!(Shortcut::parse("shift+alt+/").unwrap().hint(), "ALT+SHIFT+/");
        assert_eq!(Shortcut::parse("f1").unwrap().hint(), "F1");
    }

    #[test]
    fn platform_mod_hint_names_each_key_once() {
        let with_ctrl = Shortcut::parse("mod+ctrl+k").unwrap().hint();
        let with_meta = Shortcut::parse("mod+meta+k").unwrap().hint();
        if cfg!(target_os = "macos") {
            assert_eq!(with_ctrl, "CMD+CTRL+K");
            assert_eq!(with_meta, "CMD+K");
        } else {
            assert_eq!(with_ctrl, "CTRL+K");
            assert_eq!(with_meta, "CTRL+META+K");
        }
    }
}
