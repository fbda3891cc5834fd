//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions. They never touch
//! the filesystem or the UI directly; side effects are returned as [`Cmd`]s.

mod app;
mod document;
mod find;
mod view;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::NoteSession;

pub use app::update_app;
pub use document::update_document;
pub use find::update_find;
pub use view::update_view;

/// Main update function - dispatches to sub-handlers
pub fn update(model: &mut NoteSession, msg: Msg) -> Option<Cmd> {
    tracing::trace!(msg = msg.name(), "update");

    match msg {
        Msg::Find(m) => find::update_find(model, m),
        Msg::Document(m) => document::update_document(model, m),
        Msg::View(m) => view::update_view(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Push the current label to the tab and the window title
pub(crate) fn title_cmd(model: &NoteSession) -> Cmd {
    Cmd::SetTitle {
        label: model.note.label.clone(),
        window_title: model.note.window_title(),
    }
}
