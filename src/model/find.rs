//! Find dialog state

use crate::search::{MatchSet, SearchQuery};

/// The active query and the matches it produced
#[derive(Debug, Clone, Default)]
pub struct FindState {
    /// Query of the last Find (None before the first one)
    pub query: Option<SearchQuery>,
    /// Matches of the last Find; cycled by Next/Previous
    pub matches: MatchSet,
}

impl FindState {
    /// Whether `text` is the text the current matches were built for
    pub fn is_active_query(&self, text: &str) -> bool {
        self.query.as_ref().is_some_and(|q| q.text == text)
    }

    /// Drop the matches, e.g. when another note replaces the buffer
    pub fn clear(&mut self) {
        self.query = None;
        self.matches = MatchSet::empty();
    }
}
