//! View menu handlers (zoom, word wrap, stylesheet)

use crate::commands::{Cmd, Prompt, StylesheetFailure};
use crate::messages::ViewMsg;
use crate::model::NoteSession;

/// Handle view and theming messages
pub fn update_view(model: &mut NoteSession, msg: ViewMsg) -> Option<Cmd> {
    match msg {
        ViewMsg::ZoomIn => {
            let level = model.zoom.zoom_in();
            Some(zoom_cmd(model, level))
        }
        ViewMsg::ZoomOut => {
            let level = model.zoom.zoom_out();
            Some(zoom_cmd(model, level))
        }
        ViewMsg::ResetZoom => {
            let level = model.zoom.reset();
            Some(zoom_cmd(model, level))
        }

        ViewMsg::ToggleWordWrap => {
            model.config.word_wrap = !model.config.word_wrap;
            tracing::debug!(word_wrap = model.config.word_wrap, "toggled word wrap");
            Some(Cmd::SetWordWrap(model.config.word_wrap))
        }

        ViewMsg::UploadStylesheet => Some(Cmd::ShowStylesheetDialog),

        ViewMsg::StylesheetChosen(path) => {
            model.config.custom_css_path = path.to_string_lossy().to_string();
            Some(Cmd::ApplyStylesheet {
                path: Some(path),
                on_failure: StylesheetFailure::ResetToDefault,
            })
        }

        ViewMsg::StylesheetFailed {
            path,
            error,
            policy,
        } => {
            tracing::warn!("Failed to load stylesheet {}: {}", path.display(), error);
            match policy {
                StylesheetFailure::AskToDiscard => {
                    Some(Cmd::Confirm(Prompt::DiscardStylesheet { path, error }))
                }
                StylesheetFailure::ResetToDefault => {
                    model.config.clear_stylesheet();
                    Some(Cmd::batch(vec![
                        Cmd::error(
                            "Invalid CSS file",
                            "The selected CSS file contains errors and could not be loaded.\n\nFalling back to default theme.",
                        ),
                        Cmd::ApplyStylesheet {
                            path: None,
                            on_failure: StylesheetFailure::Log,
                        },
                    ]))
                }
                StylesheetFailure::Log => None,
            }
        }
    }
}

/// Apply the font size, then the custom stylesheet over it
fn zoom_cmd(model: &NoteSession, level: f64) -> Cmd {
    tracing::debug!(level, "zoom");
    let mut cmds = vec![Cmd::SetFontSize(level)];
    if let Some(path) = model.config.stylesheet() {
        cmds.push(Cmd::ApplyStylesheet {
            path: Some(path),
            on_failure: StylesheetFailure::Log,
        });
    }
    Cmd::batch(cmds)
}
