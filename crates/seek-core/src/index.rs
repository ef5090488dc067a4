//! In-memory search index backing the search page

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A searchable entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Entry {
    fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.summary.to_lowercase().contains(needle)
            || self.tags.iter().any(|tag| tag.to_lowercase() == needle)
    }
}

/// Case-insensitive substring index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchIndex {
    entries: Vec<Entry>,
}

impl SearchIndex {
    #[must_use]
    pub const fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// Build from a JSON array of entries
    pub fn from_json(payload: &str) -> Result<Self> {
        let entries: Vec<Entry> = serde_json::from_str(payload)?;
        Ok(Self::new(entries))
    }

    /// Entries matching the query; a blank query matches nothing.
    ///
    /// Title matches are listed before summary or tag matches.
    #[must_use]
    pub fn search(&self, query: &str, limit: usize) -> Vec<Entry> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let (mut by_title, rest): (Vec<&Entry>, Vec<&Entry>) = self
            .entries
            .iter()
            .filter(|entry| entry.matches(&needle))
            .partition(|entry| entry.title.to_lowercase().contains(&needle));
        by_title.extend(rest);

        by_title.into_iter().take(limit).cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
