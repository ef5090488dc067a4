//! Leading adornment of the search field

/// What sits at the start of the search field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adornment {
    /// Magnifying glass shown while idle
    SearchIcon,
    /// Spinner shown while results are pending
    Spinner,
}

impl Adornment {
    #[must_use]
    pub const fn for_loading(is_loading: bool) -> Self {
        if is_loading {
            Self::Spinner
        } else {
            Self::SearchIcon
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_swaps_icon_for_spinner() {
        assert_eq!(Adornment::for_loading(true), Adornment::Spinner);
        assert_eq!(Adornment::for_loading(false), Adornment::SearchIcon);
    }
}
