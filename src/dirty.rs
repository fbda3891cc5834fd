//! Unsaved-change tracking and title rendering
//!
//! A note is modified when its current text differs from the baseline captured
//! at open/new time or at the last successful save. Undoing back to the saved
//! text therefore clears the modified marker again.

/// Application name shown in the window title
pub const APP_NAME: &str = "Yanta";

/// Marker appended to the note label while it has unsaved changes
pub const MODIFIED_MARKER: &str = " *";

/// Baseline text for a single note
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirtyState {
    baseline: String,
}

impl DirtyState {
    /// Start tracking a freshly opened or created note
    pub fn on_load(text: impl Into<String>) -> Self {
        Self {
            baseline: text.into(),
        }
    }

    /// Compare the current text against the baseline without touching it
    pub fn on_text_changed(&self, current: &str) -> bool {
        self.is_modified(current)
    }

    /// Reset the baseline after the write to disk succeeded
    pub fn on_saved(&mut self, current: impl Into<String>) {
        self.baseline = current.into();
    }

    pub fn is_modified(&self, current: &str) -> bool {
        current != self.baseline
    }

    pub fn baseline(&self) -> &str {
        &self.baseline
    }
}

/// Add or strip the modified marker on a note label
///
/// Idempotent for a given `modified` value: the marker is never doubled and a
/// clean label is returned untouched.
pub fn render_title(label: &str, modified: bool) -> String {
    match (modified, label.strip_suffix(MODIFIED_MARKER)) {
        (true, Some(_)) => label.to_string(),
        (true, None) => format!("{}{}", label, MODIFIED_MARKER),
        (false, Some(clean)) => clean.to_string(),
        (false, None) => label.to_string(),
    }
}

/// Full window title for a rendered label
pub fn window_title(label: &str) -> String {
    format!("{}: {}", APP_NAME, label)
}
