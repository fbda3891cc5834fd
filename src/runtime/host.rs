//! The platform side of the runtime
//!
//! A [`Host`] is the editing widget plus the dialogs and pickers around it.
//! Dialogs are plain request/response calls: the runtime asks and gets an
//! answer back, it never sees a modal loop.

use std::path::{Path, PathBuf};

use crate::commands::{NoticeKind, Prompt};
use crate::config::AppConfig;
use crate::file_io::{self, FileError};
use crate::stats::TextStats;

pub trait Host {
    // === Editing widget ===

    /// Snapshot of the full buffer text
    fn text(&self) -> String;
    fn set_text(&mut self, text: &str);
    /// Select the character range `[start, end)`
    fn select_range(&mut self, start: usize, end: usize);
    fn scroll_to(&mut self, offset: usize);
    fn set_title(&mut self, label: &str, window_title: &str);
    fn update_counters(&mut self, stats: &TextStats);
    fn set_font_size(&mut self, points: f64);
    fn set_word_wrap(&mut self, enabled: bool);

    // === Dialogs ===

    fn show_notice(&mut self, kind: NoticeKind, title: &str, message: &str);
    /// Ask a yes/no question; `true` means yes
    fn confirm(&mut self, prompt: &Prompt) -> bool;
    fn close_find_dialog(&mut self) {}
    /// Pick an existing `.txt` file, or None if cancelled
    fn choose_open_path(&mut self) -> Option<PathBuf>;
    /// Pick a `.txt` destination, or None if cancelled
    fn choose_save_path(&mut self, suggested_name: &str) -> Option<PathBuf>;
    /// Pick a `.css` file, or None if cancelled
    fn choose_stylesheet(&mut self) -> Option<PathBuf>;

    // === Platform ===

    /// Apply a stylesheet, or the default theme for `None`
    fn apply_stylesheet(&mut self, path: Option<&Path>) -> Result<(), String>;

    fn read_text_file(&mut self, path: &Path) -> Result<String, FileError> {
        file_io::read_text_file(path)
    }

    fn write_text_file(&mut self, path: &Path, content: &str) -> Result<(), FileError> {
        file_io::write_text_file(path, content)
    }

    fn save_config(&mut self, config: &AppConfig) -> Result<(), String> {
        config.save()
    }
}
