//! Yanta - a small plain-text note editor
//!
//! This crate provides the UI-independent core of the editor in the Elm
//! Architecture style: find with case and whole-word options, unsaved-change
//! tracking, live counters, zoom and persisted preferences. A UI shell
//! implements [`runtime::Host`] and feeds user actions in as [`Msg`]s.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod dirty;
pub mod file_io;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod search;
pub mod stats;
pub mod tracing;
pub mod update;
pub mod zoom;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::AppConfig;
pub use messages::Msg;
pub use model::NoteSession;
pub use search::{MatchSet, SearchQuery};
