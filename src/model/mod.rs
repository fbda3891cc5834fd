//! Session model - the complete state behind one note window
//!
//! This module contains all the state types following the Elm Architecture
//! pattern. The note text itself lives in the host's editing widget and is
//! passed in by value with each message.

pub mod find;
pub mod note;

pub use find::FindState;
pub use note::{Note, UNTITLED_FILE_NAME, UNTITLED_LABEL};

use crate::config::AppConfig;
use crate::stats::TextStats;
use crate::zoom::Zoom;

/// The complete session state
#[derive(Debug, Clone, Default)]
pub struct NoteSession {
    /// File identity and unsaved-change state
    pub note: Note,
    /// Find dialog query and matches
    pub find: FindState,
    /// Counters for the last seen text
    pub stats: TextStats,
    /// Editor font size
    pub zoom: Zoom,
    /// Persisted preferences
    pub config: AppConfig,
    /// Text captured when closing was requested, awaiting the save prompt
    pub pending_close: Option<String>,
}

impl NoteSession {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn is_modified(&self) -> bool {
        self.note.is_modified
    }
}
