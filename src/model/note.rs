//! Note model - file identity, label and unsaved-change state

use std::path::PathBuf;

use crate::dirty::{render_title, window_title, DirtyState};
use crate::file_io::{filename_for_display, NOTE_EXTENSION};

/// Label of a note that has never been saved
pub const UNTITLED_LABEL: &str = "New note";

/// Save-dialog default for a note that has never been saved
pub const UNTITLED_FILE_NAME: &str = "untitled.txt";

/// One open note, without its text (the editing widget owns that)
#[derive(Debug, Clone)]
pub struct Note {
    /// Path on disk (None until opened or saved)
    pub file_path: Option<PathBuf>,
    /// Tab label, including the modified marker when dirty
    pub label: String,
    /// Baseline for modified detection
    pub dirty: DirtyState,
    /// Result of the last comparison against the baseline
    pub is_modified: bool,
}

impl Default for Note {
    fn default() -> Self {
        Self::untitled()
    }
}

impl Note {
    /// A fresh empty note
    pub fn untitled() -> Self {
        Self {
            file_path: None,
            label: UNTITLED_LABEL.to_string(),
            dirty: DirtyState::on_load(""),
            is_modified: false,
        }
    }

    /// A note just read from `path`
    pub fn opened(path: PathBuf, text: &str) -> Self {
        Self {
            label: filename_for_display(&path),
            file_path: Some(path),
            dirty: DirtyState::on_load(text),
            is_modified: false,
        }
    }

    /// Recompute the modified flag for `current` and re-render the label
    pub fn text_changed(&mut self, current: &str) -> bool {
        self.set_modified(self.dirty.on_text_changed(current));
        self.is_modified
    }

    /// Record a successful write of `content` to `path`
    pub fn saved(&mut self, path: PathBuf, content: &str) {
        self.dirty.on_saved(content);
        self.label = filename_for_display(&path);
        self.file_path = Some(path);
        self.set_modified(false);
    }

    pub fn set_modified(&mut self, modified: bool) {
        self.is_modified = modified;
        self.label = render_title(&self.label, modified);
    }

    pub fn window_title(&self) -> String {
        window_title(&self.label)
    }

    /// File name offered by the save dialog
    pub fn suggested_file_name(&self) -> String {
        if self.file_path.is_none() && self.label.starts_with(UNTITLED_LABEL) {
            return UNTITLED_FILE_NAME.to_string();
        }
        let base = render_title(&self.label, false);
        if base.ends_with(&format!(".{}", NOTE_EXTENSION)) {
            base
        } else {
            format!("{}.{}", base, NOTE_EXTENSION)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untitled_is_clean() {
        let note = Note::untitled();
        assert!(!note.is_modified);
        assert_eq!(note.window_title(), "Yanta: New note");
    }

    #[test]
    fn test_opened_uses_file_name() {
        let note = Note::opened(PathBuf::from("/home/me/todo.txt"), "milk");
        assert_eq!(note.label, "todo.txt");
        assert_eq!(note.dirty.baseline(), "milk");
    }

    #[test]
    fn test_text_changed_toggles_marker() {
        let mut note = Note::opened(PathBuf::from("todo.txt"), "milk");
        assert!(note.text_changed("milk and eggs"));
        assert_eq!(note.label, "todo.txt *");
        assert!(note.text_changed("milk and eggs!"));
        assert_eq!(note.label, "todo.txt *");
        assert!(!note.text_changed("milk"));
        assert_eq!(note.label, "todo.txt");
    }

    #[test]
    fn test_saved_renames_and_cleans() {
        let mut note = Note::untitled();
        note.text_changed("draft");
        note.saved(PathBuf::from("/tmp/draft.txt"), "draft");
        assert_eq!(note.label, "draft.txt");
        assert!(!note.is_modified);
        assert!(!note.text_changed("draft"));
    }

    #[test]
    fn test_suggested_file_name() {
        let mut note = Note::untitled();
        note.text_changed("x");
        assert_eq!(note.suggested_file_name(), "untitled.txt");

        let note = Note::opened(PathBuf::from("plan.txt"), "");
        assert_eq!(note.suggested_file_name(), "plan.txt");
    }
}
