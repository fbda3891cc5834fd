//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use yanta::commands::{NoticeKind, Prompt};
use yanta::config::AppConfig;
use yanta::file_io::{self, FileError};
use yanta::model::{Note, NoteSession};
use yanta::runtime::{App, Host};
use yanta::stats::TextStats;

/// Host that records every call and answers dialogs from preset fields
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub text: String,

    pub selections: Vec<(usize, usize)>,
    pub scrolls: Vec<usize>,
    pub label: String,
    pub window_title: String,
    pub counters: Option<TextStats>,
    pub font_size: Option<f64>,
    pub word_wrap: Option<bool>,

    pub notices: Vec<(NoticeKind, String, String)>,
    pub prompts: Vec<Prompt>,
    pub find_dialog_closed: bool,
    pub suggested_names: Vec<String>,

    /// Answer to every yes/no prompt
    pub confirm_answer: bool,
    pub open_choice: Option<PathBuf>,
    pub save_choice: Option<PathBuf>,
    pub stylesheet_choice: Option<PathBuf>,

    /// Error returned when applying any custom stylesheet
    pub stylesheet_error: Option<String>,
    pub applied_stylesheets: Vec<Option<PathBuf>>,
    /// Make every file write fail
    pub fail_writes: bool,
    pub writes: Vec<(PathBuf, String)>,
    pub saved_configs: Vec<AppConfig>,
}

impl RecordingHost {
    pub fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Self::default()
        }
    }

    pub fn last_selection(&self) -> Option<(usize, usize)> {
        self.selections.last().copied()
    }

    pub fn notice_titles(&self) -> Vec<&str> {
        self.notices.iter().map(|(_, t, _)| t.as_str()).collect()
    }
}

impl Host for RecordingHost {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn select_range(&mut self, start: usize, end: usize) {
        self.selections.push((start, end));
    }

    fn scroll_to(&mut self, offset: usize) {
        self.scrolls.push(offset);
    }

    fn set_title(&mut self, label: &str, window_title: &str) {
        self.label = label.to_string();
        self.window_title = window_title.to_string();
    }

    fn update_counters(&mut self, stats: &TextStats) {
        self.counters = Some(*stats);
    }

    fn set_font_size(&mut self, points: f64) {
        self.font_size = Some(points);
    }

    fn set_word_wrap(&mut self, enabled: bool) {
        self.word_wrap = Some(enabled);
    }

    fn show_notice(&mut self, kind: NoticeKind, title: &str, message: &str) {
        self.notices
            .push((kind, title.to_string(), message.to_string()));
    }

    fn confirm(&mut self, prompt: &Prompt) -> bool {
        self.prompts.push(prompt.clone());
        self.confirm_answer
    }

    fn close_find_dialog(&mut self) {
        self.find_dialog_closed = true;
    }

    fn choose_open_path(&mut self) -> Option<PathBuf> {
        self.open_choice.clone()
    }

    fn choose_save_path(&mut self, suggested_name: &str) -> Option<PathBuf> {
        self.suggested_names.push(suggested_name.to_string());
        self.save_choice.clone()
    }

    fn choose_stylesheet(&mut self) -> Option<PathBuf> {
        self.stylesheet_choice.clone()
    }

    fn apply_stylesheet(&mut self, path: Option<&Path>) -> Result<(), String> {
        self.applied_stylesheets.push(path.map(Path::to_path_buf));
        match (path, &self.stylesheet_error) {
            (Some(_), Some(error)) => Err(error.clone()),
            _ => Ok(()),
        }
    }

    fn write_text_file(&mut self, path: &Path, content: &str) -> Result<(), FileError> {
        if self.fail_writes {
            return Err(FileError::PermissionDenied);
        }
        self.writes.push((path.to_path_buf(), content.to_string()));
        file_io::write_text_file(path, content)
    }

    fn save_config(&mut self, config: &AppConfig) -> Result<(), String> {
        self.saved_configs.push(config.clone());
        Ok(())
    }
}

/// App with an untitled note whose buffer holds `text`
///
/// The baseline stays empty, so any non-empty `text` counts as modified once
/// a change is reported.
pub fn untitled_app(text: &str) -> App<RecordingHost> {
    App::new(NoteSession::default(), RecordingHost::with_text(text))
}

/// App with a note opened from `path` whose saved text is `text`
pub fn opened_app(path: impl Into<PathBuf>, text: &str) -> App<RecordingHost> {
    let mut session = NoteSession::default();
    session.note = Note::opened(path.into(), text);
    App::new(session, RecordingHost::with_text(text))
}

/// Simulate the user editing the buffer
pub fn type_text(app: &mut App<RecordingHost>, text: &str) {
    app.host_mut().text = text.to_string();
    app.text_changed();
}
