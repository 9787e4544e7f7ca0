//! Navigation history: an ordered URL list plus a cursor
//!
//! Only `visit` mutates the entries; `back` and `forward` move the cursor.
//! Page bodies are never cached here, so the caller re-fetches after either
//! cursor move.

use crate::utils::{BrowseError, Result};

/// Browser navigation history.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<String>,
    /// Index of the current page; `None` iff `entries` is empty.
    cursor: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a navigation to `url`.
    ///
    /// Any forward branch past the cursor is discarded first, standard
    /// browser semantics. A URL equal to the current tail is not appended
    /// again, so immediate reloads collapse into one entry.
    pub fn visit(&mut self, url: &str) {
        if let Some(cursor) = self.cursor {
            self.entries.truncate(cursor + 1);
        }
        if self.entries.last().map(String::as_str) != Some(url) {
            self.entries.push(url.to_string());
        }
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Move the cursor one entry back and return the URL now under it.
    pub fn back(&mut self) -> Result<&str> {
        match self.cursor {
            Some(cursor) if cursor > 0 => {
                self.cursor = Some(cursor - 1);
                Ok(&self.entries[cursor - 1])
            }
            _ => Err(BrowseError::NoPriorEntry),
        }
    }

    /// Move the cursor one entry forward and return the URL now under it.
    pub fn forward(&mut self) -> Result<&str> {
        match self.cursor {
            Some(cursor) if cursor + 1 < self.entries.len() => {
                self.cursor = Some(cursor + 1);
                Ok(&self.entries[cursor + 1])
            }
            _ => Err(BrowseError::NoNextEntry),
        }
    }

    /// URL under the cursor, if any page has been visited.
    pub fn current(&self) -> Option<&str> {
        self.cursor.map(|i| self.entries[i].as_str())
    }

    /// The full ordered sequence with the cursor index, for display.
    pub fn list(&self) -> (&[String], Option<usize>) {
        (&self.entries, self.cursor)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
