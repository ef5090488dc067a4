//! Search-box behavior, independent of rendering
//!
//! The search box is a controlled input: it never stores the text, it only
//! forwards edits. Its shortcut either opens the search page or focuses the
//! field when the search page is already showing.

use crate::slot::ElementSlot;

/// Router side of the shortcut
pub trait Navigate {
    fn push(&mut self, route: &str);
}

/// Element that can take keyboard focus
pub trait RequestFocus {
    fn request_focus(&self);
}

/// What a shortcut press resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortcutOutcome {
    /// Open the search page
    Navigate(String),
    /// Already on the search page; focus the field
    Focus,
    /// Already on the search page but the field cannot take focus
    Ignore,
}

/// Decision logic shared by every rendering of the search box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBoxBehavior {
    search_route: String,
    is_disabled: bool,
}

impl SearchBoxBehavior {
    pub fn new(search_route: impl Into<String>) -> Self {
        Self {
            search_route: search_route.into(),
            is_disabled: false,
        }
    }

    #[must_use]
    pub const fn disabled(mut self, is_disabled: bool) -> Self {
        self.is_disabled = is_disabled;
        self
    }

    #[must_use]
    pub fn search_route(&self) -> &str {
        &self.search_route
    }

    /// Exact comparison; `/search/` and `/search?q=` are other pages
    #[must_use]
    pub fn is_search_page(&self, current_path: &str) -> bool {
        current_path == self.search_route
    }

    #[must_use]
    pub const fn accepts_focus(&self) -> bool {
        !self.is_disabled
    }

    /// Resolve a shortcut press against the page currently shown
    #[must_use]
    pub fn on_shortcut(&self, current_path: &str) -> ShortcutOutcome {
        if !self.is_search_page(current_path) {
            ShortcutOutcome::Navigate(self.search_route.clone())
        } else if self.accepts_focus() {
            ShortcutOutcome::Focus
        } else {
            ShortcutOutcome::Ignore
        }
    }

    /// Resolve and carry out a shortcut press.
    ///
    /// Focus is requested only if the element is mounted.
    pub fn activate<N, F>(
        &self,
        current_path: &str,
        navigator: &mut N,
        slot: &ElementSlot<F>,
    ) -> ShortcutOutcome
    where
        N: Navigate + ?Sized,
        F: RequestFocus,
    {
        let outcome = self.on_shortcut(current_path);
        match &outcome {
            ShortcutOutcome::Navigate(route) => {
                tracing::debug!(from = current_path, to = %route, "Search shortcut: navigating");
                navigator.push(route);
            }
            ShortcutOutcome::Focus => match slot.get() {
                Some(element) => element.request_focus(),
                None => tracing::debug!("Search shortcut: field not mounted, nothing to focus"),
            },
            ShortcutOutcome::Ignore => {
                tracing::debug!("Search shortcut: field disabled, ignoring");
            }
        }
        outcome
    }

    /// Pass a user edit to the caller's change handler.
    ///
    /// Returns `false` without calling the handler when disabled.
    pub fn forward_edit(&self, new_value: String, on_change: impl FnOnce(String)) -> bool {
        if self.is_disabled {
            return false;
        }
        on_change(new_value);
        true
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Default)]
    struct RecordingNavigator {
        pushed: Vec<String>,
    }

    impl Navigate for RecordingNavigator {
        fn push(&mut self, route: &str) {
            self.pushed.push(route.to_string());
        }
    }

    #[derive(Default)]
    struct FakeElement {
        focus_requests: Cell<u32>,
    }

    impl RequestFocus for FakeElement {
        fn request_focus(&self) {
            self.focus_requests.set(self.focus_requests.get() + 1);
        }
    }

    fn mounted() -> ElementSlot<FakeElement> {
        let mut slot = ElementSlot::new();
        slot.mount(FakeElement::default());
        slot
    }

    #[test]
    fn shortcut_off_search_page_navigates_once() {
        let behavior = SearchBoxBehavior::new("/search");
        let mut navigator = RecordingNavigator::default();
        let slot = mounted();

        let outcome = behavior.activate("/", &mut navigator, &slot);

        assert_eq!(outcome, ShortcutOutcome::Navigate("/search".to_string()));
        assert_eq!(navigator.pushed, vec!["/search".to_string()]);
        assert_eq!(slot.get().unwrap().focus_requests.get(), 0);
    }

    #[test]
    fn shortcut_on_search_page_focuses_without_navigating() {
        let behavior = SearchBoxBehavior::new("/search");
        let mut navigator = RecordingNavigator::default();
        let slot = mounted();

        let outcome = behavior.activate("/search", &mut navigator, &slot);

        assert_eq!(outcome, ShortcutOutcome::Focus);
        assert!(navigator.pushed.is_empty());
        assert_eq!(slot.get().unwrap().focus_requests.get(), 1);
    }

    #[test]
    fn unmounted_field_is_not_focused() {
        let behavior = SearchBoxBehavior::new("/search");
        let mut navigator = RecordingNavigator::default();
        let slot: ElementSlot<FakeElement> = ElementSlot::new();

        assert_eq!(
            behavior.activate("/search", &mut navigator, &slot),
            ShortcutOutcome::Focus
        );
        assert!(navigator.pushed.is_empty());
    }

    #[test]
    fn page_comparison_is_exact() {
        let behavior = SearchBoxBehavior::new("/search");
        assert!(behavior.is_search_page("/search"));
        assert!(!behavior.is_search_page("/search/"));
        assert!(!behavior.is_search_page("/searches"));
        assert_eq!(
            behavior.on_shortcut("/search/"),
            ShortcutOutcome::Navigate("/search".to_string())
        );
    }

    #[test]
    fn disabled_field_refuses_focus_but_still_navigates() {
        let behavior = SearchBoxBehavior::new("/search").disabled(true);
        let mut navigator = RecordingNavigator::default();
        let slot = mounted();

        assert_eq!(
            behavior.activate("/search", &mut navigator, &slot),
            ShortcutOutcome::Ignore
        );
        assert_eq!(slot.get().unwrap().focus_requests.get(), 0);

        assert_eq!(
            behavior.activate("/", &mut navigator, &slot),
            ShortcutOutcome::Navigate("/search".to_string())
        );
        assert_eq!(navigator.pushed.len(), 1);
    }

    #[test]
    fn edit_reaches_handler_exactly_once() {
        let behavior = SearchBoxBehavior::new("/search");
        let mut received = Vec::new();

        let forwarded = behavior.forward_edit("ru".to_string(), |value| received.push(value));

        assert!(forwarded);
        assert_eq!(received, vec!["ru".to_string()]);
    }

    #[test]
    fn disabled_field_drops_edits() {
        let behavior = SearchBoxBehavior::new("/search").disabled(true);
        let mut calls = 0;

        assert!(!behavior.forward_edit("x".to_string(), |_| calls += 1));
        assert_eq!(calls, 0);
    }
}
