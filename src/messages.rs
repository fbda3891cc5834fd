//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types. Messages that depend on
//! the note text carry a snapshot taken by the host at the moment the user
//! acted; the session never holds the live buffer.

use std::path::PathBuf;

use crate::commands::{Prompt, StylesheetFailure};
use crate::file_io::FileError;
use crate::search::SearchQuery;

/// Find dialog actions
#[derive(Debug, Clone)]
pub enum FindMsg {
    /// Scan the text and select the first match
    Find { text: String, query: SearchQuery },
    /// Cycle forward through the current matches
    Next { text: String, query: SearchQuery },
    /// Cycle backward through the current matches
    Previous { text: String, query: SearchQuery },
    /// Dismiss the dialog
    Cancel,
}

/// Note lifecycle and file messages
#[derive(Debug, Clone)]
pub enum DocumentMsg {
    /// The buffer changed (keystroke, paste, undo, ...)
    TextChanged(String),
    /// Replace the note with an empty untitled one
    New,
    /// Ask the host for a file to open
    Open,
    /// Open a specific file
    OpenPath(PathBuf),
    /// Result of reading a file
    FileLoaded {
        path: PathBuf,
        result: Result<String, FileError>,
    },
    /// Save to the known path, or ask for one
    Save { text: String },
    /// Always ask for a path
    SaveAs { text: String },
    /// The user picked a path to save to
    SaveTo { path: PathBuf, text: String },
    /// Result of writing a file
    SaveCompleted {
        path: PathBuf,
        text: String,
        result: Result<(), FileError>,
    },
}

/// View menu and theming
#[derive(Debug, Clone)]
pub enum ViewMsg {
    ZoomIn,
    ZoomOut,
    ResetZoom,
    ToggleWordWrap,
    /// Ask the host for a stylesheet to use
    UploadStylesheet,
    /// The user picked a stylesheet
    StylesheetChosen(PathBuf),
    /// Applying a stylesheet failed
    StylesheetFailed {
        path: PathBuf,
        error: String,
        policy: StylesheetFailure,
    },
}

/// Application lifecycle messages
#[derive(Debug, Clone)]
pub enum AppMsg {
    /// Window is up; push initial state to the host
    Startup,
    /// Window close / Quit menu
    Quit { text: String },
    /// Answer to a yes/no prompt
    PromptAnswered { prompt: Prompt, accepted: bool },
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    Find(FindMsg),
    Document(DocumentMsg),
    View(ViewMsg),
    App(AppMsg),
}

impl Msg {
    /// Short name for logging, without the text payload
    pub fn name(&self) -> &'static str {
        match self {
            Msg::Find(FindMsg::Find { .. }) => "Find",
            Msg::Find(FindMsg::Next { .. }) => "FindNext",
            Msg::Find(FindMsg::Previous { .. }) => "FindPrevious",
            Msg::Find(FindMsg::Cancel) => "FindCancel",
            Msg::Document(DocumentMsg::TextChanged(_)) => "TextChanged",
            Msg::Document(DocumentMsg::New) => "New",
            Msg::Document(DocumentMsg::Open) => "Open",
            Msg::Document(DocumentMsg::OpenPath(_)) => "OpenPath",
            Msg::Document(DocumentMsg::FileLoaded { .. }) => "FileLoaded",
            Msg::Document(DocumentMsg::Save { .. }) => "Save",
            Msg::Document(DocumentMsg::SaveAs { .. }) => "SaveAs",
            Msg::Document(DocumentMsg::SaveTo { .. }) => "SaveTo",
            Msg::Document(DocumentMsg::SaveCompleted { .. }) => "SaveCompleted",
            Msg::View(ViewMsg::ZoomIn) => "ZoomIn",
            Msg::View(ViewMsg::ZoomOut) => "ZoomOut",
            Msg::View(ViewMsg::ResetZoom) => "ResetZoom",
            Msg::View(ViewMsg::ToggleWordWrap) => "ToggleWordWrap",
            Msg::View(ViewMsg::UploadStylesheet) => "UploadStylesheet",
            Msg::View(ViewMsg::StylesheetChosen(_)) => "StylesheetChosen",
            Msg::View(ViewMsg::StylesheetFailed { .. }) => "StylesheetFailed",
            Msg::App(AppMsg::Startup) => "Startup",
            Msg::App(AppMsg::Quit { .. }) => "Quit",
            Msg::App(AppMsg::PromptAnswered { .. }) => "PromptAnswered",
        }
    }
}
