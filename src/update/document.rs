//! Note lifecycle handlers (new, open, save, text changes)

use std::path::Path;

use crate::commands::Cmd;
use crate::file_io::{filename_for_display, is_note_file, FileError};
use crate::messages::DocumentMsg;
use crate::model::{Note, NoteSession};
use crate::stats::TextStats;

use super::title_cmd;

/// Handle note lifecycle and file messages
pub fn update_document(model: &mut NoteSession, msg: DocumentMsg) -> Option<Cmd> {
    match msg {
        DocumentMsg::TextChanged(text) => {
            let was_modified = model.note.is_modified;
            let modified = model.note.text_changed(&text);
            if modified != was_modified {
                tracing::debug!(modified, "modified state changed");
            }
            model.stats = TextStats::compute(&text);
            Some(Cmd::batch(vec![
                title_cmd(model),
                Cmd::UpdateCounters(model.stats),
            ]))
        }

        DocumentMsg::New => Some(replace_note(model, Note::untitled(), String::new())),

        DocumentMsg::Open => Some(Cmd::ShowOpenDialog),

        DocumentMsg::OpenPath(path) => {
            if !is_note_file(&path) {
                tracing::warn!("Refusing to open {}: not a .txt file", path.display());
                return Some(open_failed(&path, &FileError::NotNoteFile));
            }
            Some(Cmd::LoadFile { path })
        }

        DocumentMsg::FileLoaded { path, result } => match result {
            Ok(content) => {
                tracing::info!("Opened {}", path.display());
                let note = Note::opened(path, &content);
                Some(replace_note(model, note, content))
            }
            Err(e) => {
                tracing::warn!("Failed to open {}: {}", path.display(), e);
                Some(open_failed(&path, &e))
            }
        },

        DocumentMsg::Save { text } => match model.note.file_path.clone() {
            Some(path) => Some(Cmd::SaveFile {
                path,
                content: text,
            }),
            None => Some(save_dialog(model, text)),
        },

        DocumentMsg::SaveAs { text } => Some(save_dialog(model, text)),

        DocumentMsg::SaveTo { path, text } => Some(Cmd::SaveFile {
            path,
            content: text,
        }),

        DocumentMsg::SaveCompleted { path, text, result } => match result {
            Ok(()) => {
                model.note.saved(path, &text);
                Some(title_cmd(model))
            }
            Err(e) => {
                // Baseline stays put so the note keeps showing as modified
                tracing::warn!("Failed to save {}: {}", path.display(), e);
                Some(Cmd::error(
                    "Error saving file",
                    e.user_message(&filename_for_display(&path)),
                ))
            }
        },
    }
}

/// Notice for an open that left the current note in place
fn open_failed(path: &Path, error: &FileError) -> Cmd {
    Cmd::error(
        "Error opening file",
        error.user_message(&filename_for_display(path)),
    )
}

fn save_dialog(model: &NoteSession, text: String) -> Cmd {
    Cmd::ShowSaveDialog {
        suggested_name: model.note.suggested_file_name(),
        content: text,
    }
}

/// Swap in another note and push its text, title and counters to the host
fn replace_note(model: &mut NoteSession, note: Note, text: String) -> Cmd {
    model.note = note;
    model.find.clear();
    model.stats = TextStats::compute(&text);
    Cmd::batch(vec![
        Cmd::SetText(text),
        title_cmd(model),
        Cmd::UpdateCounters(model.stats),
    ])
}
