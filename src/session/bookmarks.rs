//! In-memory bookmark store
//!
//! Append-only, no dedup, lost at process exit.

/// A user-saved page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    pub url: String,
    pub title: String,
}

/// Ordered bookmark list.
#[derive(Debug, Default)]
pub struct BookmarkStore {
    entries: Vec<Bookmark>,
}

impl BookmarkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a bookmark. The URL stands in for a missing title.
    pub fn add(&mut self, url: impl Into<String>, title: impl Into<String>) {
        let url = url.into();
        let mut title = title.into();
        if title.trim().is_empty() {
            title = url.clone();
        }
        self.entries.push(Bookmark { url, title });
    }

    pub fn entries(&self) -> &[Bookmark] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_order_kept_no_dedup() {
        let mut store = BookmarkStore::new();
        store.add("https://a.example", "A");
        store.add("https://b.example", "B");
        store.add("https://a.example", "A");

        assert_eq!(store.len(), 3);
        assert_eq!(store.entries()[0].title, "A");
        assert_eq!(store.entries()[1].url, "https://b.example");
    }

    #[test]
    fn test_empty_title_falls_back_to_url() {
        let mut store = BookmarkStore::new();
        store.add("https://a.example", "  ");
        assert_eq!(store.entries()[0].title, "https://a.example");
    }
}
