//! Find engine - literal text search with case and whole-word options
//!
//! A [`MatchSet`] is built once per Find by scanning the whole document, then
//! cycled with [`MatchSet::next`] / [`MatchSet::previous`]. Cycling never
//! rescans: each candidate is re-validated against the current text instead,
//! so matches made stale by later edits are skipped.
//!
//! All offsets are character indices (not bytes) into the snapshot that was
//! searched.

use std::ops::Range;

/// Options captured from the find dialog for one search
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    /// Text to look for (must be non-empty to produce matches)
    pub text: String,
    /// Case-sensitive comparison
    pub match_case: bool,
    /// Reject matches touching an alphanumeric character on either side
    pub match_whole_word: bool,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            match_case: false,
            match_whole_word: false,
        }
    }

    pub fn match_case(mut self, value: bool) -> Self {
        self.match_case = value;
        self
    }

    pub fn whole_word(mut self, value: bool) -> Self {
        self.match_whole_word = value;
        self
    }

    /// Length of the query in characters
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Direction for match cycling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDirection {
    Forward,
    Backward,
}

/// Ordered match offsets plus the active match
///
/// Invariant: `cursor` is `None` iff `matches` is empty, otherwise it indexes
/// into `matches`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchSet {
    matches: Vec<usize>,
    cursor: Option<usize>,
    match_len: usize,
}

impl MatchSet {
    /// An empty set (nothing found, no active match)
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Match start offsets in ascending order
    pub fn matches(&self) -> &[usize] {
        &self.matches
    }

    /// Index of the active match
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Start offset of the active match
    pub fn current(&self) -> Option<usize> {
        self.cursor.map(|idx| self.matches[idx])
    }

    /// Character range of the active match, for selection
    pub fn current_range(&self) -> Option<Range<usize>> {
        self.current().map(|start| start..start + self.match_len)
    }

    /// Advance to the next match that still holds in `text`, wrapping around
    ///
    /// Returns the new active range, or `None` if no entry re-validates. In
    /// that case the cursor stays where it was.
    pub fn next(&mut self, text: &str, query: &SearchQuery) -> Option<Range<usize>> {
        self.step(text, query, SearchDirection::Forward)
    }

    /// Move back to the previous match that still holds in `text`, wrapping around
    pub fn previous(&mut self, text: &str, query: &SearchQuery) -> Option<Range<usize>> {
        self.step(text, query, SearchDirection::Backward)
    }

    /// Cycle in `direction`, bounded to one full pass over the set
    pub fn step(
        &mut self,
        text: &str,
        query: &SearchQuery,
        direction: SearchDirection,
    ) -> Option<Range<usize>> {
        let start = self.cursor?;
        let len = self.matches.len();

        let mut idx = start;
        for _ in 0..len {
            idx = match direction {
                SearchDirection::Forward => (idx + 1) % len,
                SearchDirection::Backward => (idx + len - 1) % len,
            };
            if is_valid_at(text, query, self.matches[idx]) {
                self.cursor = Some(idx);
                return self.current_range();
            }
        }

        tracing::debug!(
            query = %query.text,
            matches = len,
            "no match re-validated against current text, keeping cursor"
        );
        None
    }
}

/// Scan `text` for every occurrence of `query`
///
/// The scan resumes at `match_start + query_len` after every raw hit, whether
/// or not the whole-word filter accepted it, so overlapping occurrences are
/// skipped. An empty query yields an empty set.
pub fn find(text: &str, query: &SearchQuery) -> MatchSet {
    let needle: Vec<char> = query.text.chars().collect();
    if needle.is_empty() {
        return MatchSet::empty();
    }

    let haystack: Vec<char> = text.chars().collect();
    let mut matches = Vec::new();
    let mut pos = 0;

    while let Some(start) = index_of(&haystack, &needle, pos, query.match_case) {
        if !query.match_whole_word || is_word_bounded(&haystack, start, needle.len()) {
            matches.push(start);
        }
        pos = start + needle.len();
    }

    tracing::debug!(query = %query.text, found = matches.len(), "find");

    let cursor = if matches.is_empty() { None } else { Some(0) };
    MatchSet {
        matches,
        cursor,
        match_len: needle.len(),
    }
}

/// Whether `query` still matches at `offset` in `text`
///
/// Checks the whole-word boundary (when enabled) and that the query text
/// starts exactly at `offset` under the query's case rule. Only the
/// characters up to the end of the candidate are visited.
pub fn is_valid_at(text: &str, query: &SearchQuery, offset: usize) -> bool {
    if query.text.is_empty() {
        return false;
    }

    let mut window = text.chars().skip(offset.saturating_sub(1));
    let before = match offset {
        0 => None,
        _ => match window.next() {
            Some(ch) => Some(ch),
            None => return false,
        },
    };

    let body_matches = query.text.chars().all(|expected| {
        window
            .next()
            .is_some_and(|actual| chars_equal(actual, expected, query.match_case))
    });
    if !body_matches {
        return false;
    }

    if !query.match_whole_word {
        return true;
    }
    let after = window.next();
    let bounded = |ch: Option<char>| ch.map_or(true, |ch| !ch.is_alphanumeric());
    bounded(before) && bounded(after)
}

/// First occurrence of `needle` at or after `from`
fn index_of(haystack: &[char], needle: &[char], from: usize, match_case: bool) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }
    let last = haystack.len() - needle.len();
    (from..=last).find(|&start| {
        haystack[start..start + needle.len()]
            .iter()
            .zip(needle)
            .all(|(&a, &b)| chars_equal(a, b, match_case))
    })
}

/// Neither neighbour of `[start, start + len)` is alphanumeric
fn is_word_bounded(haystack: &[char], start: usize, len: usize) -> bool {
    let before_ok = start == 0 || !haystack[start - 1].is_alphanumeric();
    let after_ok = haystack
        .get(start + len)
        .map_or(true, |ch| !ch.is_alphanumeric());
    before_ok && after_ok
}

#[inline]
fn chars_equal(a: char, b: char, match_case: bool) -> bool {
    a == b || (!match_case && a.to_lowercase().eq(b.to_lowercase()))
}
