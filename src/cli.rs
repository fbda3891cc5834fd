//! Command-line argument parsing
//!
//! Supports:
//! - Opening a `.txt` note (e.g. from a file manager)
//! - Running a find right after startup

use clap::Parser;
use std::path::PathBuf;

use crate::file_io::is_note_file;
use crate::search::SearchQuery;

/// A small plain-text note editor
#[derive(Parser, Debug)]
#[command(name = "yanta", version, about = "A small plain-text note editor")]
pub struct CliArgs {
    /// Note to open (only existing .txt files are accepted)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Find this text after opening
    #[arg(long, value_name = "TEXT")]
    pub find: Option<String>,

    /// Case-sensitive find
    #[arg(long, requires = "find")]
    pub match_case: bool,

    /// Only match whole words
    #[arg(long, requires = "find")]
    pub whole_word: bool,

    /// Press Next this many times after the find
    #[arg(long, value_name = "N", default_value_t = 0, requires = "find")]
    pub next: usize,
}

/// What to open at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupMode {
    /// Start with an empty note
    Empty,
    /// Open an existing note
    Open(PathBuf),
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub mode: StartupMode,
    /// Find to run once the note is loaded
    pub query: Option<SearchQuery>,
    /// Number of Next presses after the find
    pub next_presses: usize,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    ///
    /// A path that is missing or not a `.txt` file is ignored, matching what
    /// the open dialog would allow.
    pub fn into_config(self) -> StartupConfig {
        let mode = match self.path {
            Some(path) if path.is_file() && is_note_file(&path) => StartupMode::Open(path),
            Some(path) => {
                tracing::warn!("Ignoring {}: not an existing .txt file", path.display());
                StartupMode::Empty
            }
            None => StartupMode::Empty,
        };

        let query = self.find.map(|text| {
            SearchQuery::new(text)
                .match_case(self.match_case)
                .whole_word(self.whole_word)
        });

        StartupConfig {
            mode,
            query,
            next_presses: self.next,
        }
    }
}
