//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! The runtime executes them against the host; some produce follow-up
//! messages (file results, prompt answers, picked paths).

use std::path::PathBuf;

use crate::config::AppConfig;
use crate::stats::TextStats;

/// A yes/no question the host must answer before the update can continue
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    /// The note has unsaved changes and the window is closing
    SaveBeforeClosing,
    /// The configured stylesheet failed to load at startup
    DiscardStylesheet { path: PathBuf, error: String },
}

impl Prompt {
    pub fn message(&self) -> String {
        match self {
            Prompt::SaveBeforeClosing => {
                "This file has been modified, do you wish to save it before closing?".to_string()
            }
            Prompt::DiscardStylesheet { path, error } => format!(
                "Error loading CSS file: {}\n\nDetails:\n{}\n\nDo you want to delete this custom CSS path from the configuration?",
                path.display(),
                error
            ),
        }
    }
}

/// What to do when a stylesheet cannot be applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StylesheetFailure {
    /// Ask whether to drop the path from the configuration
    AskToDiscard,
    /// Tell the user, drop the path and fall back to the default theme
    ResetToDefault,
    /// Only log it
    Log,
}

/// Severity of a notice dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Side effects requested by an update
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    /// Execute multiple commands in order
    Batch(Vec<Cmd>),

    // === Editing widget ===
    /// Select the character range `[start, end)`
    SelectRange { start: usize, end: usize },
    /// Scroll so the character offset is visible
    ScrollTo { offset: usize },
    /// Replace the whole buffer
    SetText(String),
    /// Tab label and window title
    SetTitle { label: String, window_title: String },
    /// Counter labels under the editor
    UpdateCounters(TextStats),
    /// Editor font size in points
    SetFontSize(f64),
    SetWordWrap(bool),

    // === Dialogs ===
    ShowNotice {
        kind: NoticeKind,
        title: String,
        message: String,
    },
    /// Ask a yes/no question; the answer comes back as `AppMsg::PromptAnswered`
    Confirm(Prompt),
    CloseFindDialog,
    /// Pick a `.txt` file to open; answered with `DocumentMsg::OpenPath`
    ShowOpenDialog,
    /// Pick a save path; answered with `DocumentMsg::SaveTo` carrying `content`
    ShowSaveDialog {
        suggested_name: String,
        content: String,
    },
    /// Pick a `.css` file; answered with `ViewMsg::StylesheetChosen`
    ShowStylesheetDialog,

    // === Platform ===
    /// Read a note; answered with `DocumentMsg::FileLoaded`
    LoadFile { path: PathBuf },
    /// Write a note; answered with `DocumentMsg::SaveCompleted`
    SaveFile { path: PathBuf, content: String },
    /// Apply a stylesheet, or the default theme for `None`
    ApplyStylesheet {
        path: Option<PathBuf>,
        on_failure: StylesheetFailure,
    },
    SaveConfig(AppConfig),
    /// Request application exit
    Quit,
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Select a match and bring it into view
    pub fn select_and_scroll(start: usize, end: usize) -> Self {
        Cmd::Batch(vec![
            Cmd::SelectRange { start, end },
            Cmd::ScrollTo { offset: start },
        ])
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Cmd::ShowNotice {
            kind: NoticeKind::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Cmd::ShowNotice {
            kind: NoticeKind::Error,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Flatten nested batches into a list of leaf commands
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            other => vec![other],
        }
    }
}
