//! App message handlers (startup, quit, prompt answers)

use crate::commands::{Cmd, Prompt, StylesheetFailure};
use crate::messages::{AppMsg, DocumentMsg};
use crate::model::NoteSession;

use super::{title_cmd, update_document};

/// Handle application lifecycle messages
pub fn update_app(model: &mut NoteSession, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Startup => Some(Cmd::batch(vec![
            title_cmd(model),
            Cmd::UpdateCounters(model.stats),
            Cmd::SetWordWrap(model.config.word_wrap),
            Cmd::SetFontSize(model.zoom.level()),
            Cmd::ApplyStylesheet {
                path: model.config.stylesheet(),
                on_failure: StylesheetFailure::AskToDiscard,
            },
        ])),

        AppMsg::Quit { text } => {
            if model.note.dirty.is_modified(&text) {
                model.pending_close = Some(text);
                Some(Cmd::Confirm(Prompt::SaveBeforeClosing))
            } else {
                Some(shutdown(model))
            }
        }

        AppMsg::PromptAnswered { prompt, accepted } => match prompt {
            Prompt::SaveBeforeClosing => {
                let pending = model.pending_close.take();
                let mut cmds = Vec::new();
                if let (true, Some(text)) = (accepted, pending) {
                    cmds.extend(update_document(model, DocumentMsg::Save { text }));
                }
                cmds.push(shutdown(model));
                Some(Cmd::batch(cmds))
            }
            Prompt::DiscardStylesheet { path, .. } => {
                if !accepted {
                    return None;
                }
                tracing::info!("Removing stylesheet {} from config", path.display());
                model.config.clear_stylesheet();
                Some(Cmd::ApplyStylesheet {
                    path: None,
                    on_failure: StylesheetFailure::Log,
                })
            }
        },
    }
}

/// Persist the configuration, then exit
fn shutdown(model: &NoteSession) -> Cmd {
    Cmd::batch(vec![Cmd::SaveConfig(model.config.clone()), Cmd::Quit])
}
