//! Session history with push/replace and back/forward traversal

use serde::{Deserialize, Serialize};

/// State object stored with a history entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryState {
    pub page: String,
}

impl HistoryState {
    pub fn new(page: &str) -> Self {
        Self {
            page: page.to_string(),
        }
    }
}

/// One entry of the session history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub url: String,
    pub state: Option<HistoryState>,
}

/// Fired when traversal moves to another entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopStateEvent {
    pub state: Option<HistoryState>,
}

/// Session history stack
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<HistoryEntry>,
    index: usize,
}

impl History {
    /// Start a session at `url` with no state
    pub fn new(url: &str) -> Self {
        Self {
            entries: vec![HistoryEntry {
                url: url.to_string(),
                state: None,
            }],
            index: 0,
        }
    }

    /// Add an entry after the current one, dropping any forward entries
    pub fn push_state(&mut self, state: HistoryState, url: &str) {
        self.entries.truncate(self.index + 1);
        self.entries.push(HistoryEntry {
            url: url.to_string(),
            state: Some(state),
        });
        self.index = self.entries.len() - 1;
        tracing::debug!("pushState {} ({} entries)", url, self.entries.len());
    }

    /// Overwrite the current entry
    pub fn replace_state(&mut self, state: HistoryState, url: &str) {
        self.entries[self.index] = HistoryEntry {
            url: url.to_string(),
            state: Some(state),
        };
    }

    pub fn back(&mut self) -> Option<PopStateEvent> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(self.pop_event())
    }

    pub fn forward(&mut self) -> Option<PopStateEvent> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        Some(self.pop_event())
    }

    fn pop_event(&self) -> PopStateEvent {
        PopStateEvent {
            state: self.entries[self.index].state.clone(),
        }
    }

    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.index]
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn index(&self) -> usize {
        self.index
    }

}

impl Default for History {
    fn default() -> Self {
        Self::new("/")
    }
}
