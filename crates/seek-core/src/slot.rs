//! Handle to a mounted UI element

/// Exclusively-owned, nullable handle to an element.
///
/// Holds a value only between `mount` and `unmount`; callers use it for
/// imperative requests such as focus and never share it across instances.
#[derive(Debug)]
pub struct ElementSlot<T> {
    element: Option<T>,
}

impl<T> Default for ElementSlot<T> {
    fn default() -> Self {
        Self { element: None }
    }
}

impl<T> ElementSlot<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self { element: None }
    }

    /// Record the freshly mounted element, replacing any previous one
    pub fn mount(&mut self, element: T) {
        self.element = Some(element);
    }

    /// Forget the element once it leaves the tree
    pub fn unmount(&mut self) -> Option<T> {
        self.element.take()
    }

    #[must_use]
    pub const fn get(&self) -> Option<&T> {
        self.element.as_ref()
    }

    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.element.is_some()
    }
}

impl<T: Clone> ElementSlot<T> {
    /// Clone of the current element, for use after the borrow ends
    #[must_use]
    pub fn cloned(&self) -> Option<T> {
        self.element.clone()
    }
}
