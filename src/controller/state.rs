//! Session state owned by the controller

use crate::content::PostSummary;

/// Mutable state of one browsing session
#[derive(Debug, Clone)]
pub struct AppState {
    current_page: String,
    summaries: Vec<PostSummary>,
    summaries_loaded: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            current_page: "home".to_string(),
            summaries: Vec::new(),
            summaries_loaded: false,
        }
    }

    /// Identifier of the page last requested, whether or not it loaded
    pub fn current_page(&self) -> &str {
        &self.current_page
    }

    pub fn set_current_page(&mut self, page: &str) {
        self.current_page = page.to_string();
    }

    pub fn summaries(&self) -> &[PostSummary] {
        &self.summaries
    }

    pub fn summaries_loaded(&self) -> bool {
        self.summaries_loaded
    }

    /// Install the session's summaries; later loads are skipped
    pub fn set_summaries(&mut self, summaries: Vec<PostSummary>) {
        self.summaries = summaries;
        self.summaries_loaded = true;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
