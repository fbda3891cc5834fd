//! Synchronous command loop
//!
//! Every message is handled to completion before control returns: commands
//! that need an answer (file reads, writes, prompts, pickers) call the host
//! and feed the result straight back through `update`.

use crate::commands::Cmd;
use crate::messages::{AppMsg, DocumentMsg, FindMsg, Msg, ViewMsg};
use crate::model::NoteSession;
use crate::search::SearchQuery;
use crate::update::update;

use super::host::Host;

pub struct App<H: Host> {
    model: NoteSession,
    host: H,
    quit_requested: bool,
}

impl<H: Host> App<H> {
    pub fn new(model: NoteSession, host: H) -> Self {
        Self {
            model,
            host,
            quit_requested: false,
        }
    }

    pub fn model(&self) -> &NoteSession {
        &self.model
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Whether a `Cmd::Quit` has been executed
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Run a message and all the commands it leads to
    pub fn dispatch(&mut self, msg: Msg) {
        if let Some(cmd) = update(&mut self.model, msg) {
            self.process_cmd(cmd);
        }
    }

    // === Host event helpers: snapshot the buffer, then dispatch ===

    pub fn startup(&mut self) {
        self.dispatch(Msg::App(AppMsg::Startup));
    }

    pub fn text_changed(&mut self) {
        let text = self.host.text();
        self.dispatch(Msg::Document(DocumentMsg::TextChanged(text)));
    }

    pub fn find(&mut self, query: SearchQuery) {
        let text = self.host.text();
        self.dispatch(Msg::Find(FindMsg::Find { text, query }));
    }

    pub fn find_next(&mut self, query: SearchQuery) {
        let text = self.host.text();
        self.dispatch(Msg::Find(FindMsg::Next { text, query }));
    }

    pub fn find_previous(&mut self, query: SearchQuery) {
        let text = self.host.text();
        self.dispatch(Msg::Find(FindMsg::Previous { text, query }));
    }

    pub fn save(&mut self) {
        let text = self.host.text();
        self.dispatch(Msg::Document(DocumentMsg::Save { text }));
    }

    pub fn save_as(&mut self) {
        let text = self.host.text();
        self.dispatch(Msg::Document(DocumentMsg::SaveAs { text }));
    }

    pub fn quit(&mut self) {
        let text = self.host.text();
        self.dispatch(Msg::App(AppMsg::Quit { text }));
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }

            Cmd::SelectRange { start, end } => self.host.select_range(start, end),
            Cmd::ScrollTo { offset } => self.host.scroll_to(offset),
            Cmd::SetText(text) => self.host.set_text(&text),
            Cmd::SetTitle {
                label,
                window_title,
            } => self.host.set_title(&label, &window_title),
            Cmd::UpdateCounters(stats) => self.host.update_counters(&stats),
            Cmd::SetFontSize(points) => self.host.set_font_size(points),
            Cmd::SetWordWrap(enabled) => self.host.set_word_wrap(enabled),

            Cmd::ShowNotice {
                kind,
                title,
                message,
            } => self.host.show_notice(kind, &title, &message),
            Cmd::Confirm(prompt) => {
                let accepted = self.host.confirm(&prompt);
                self.dispatch(Msg::App(AppMsg::PromptAnswered { prompt, accepted }));
            }
            Cmd::CloseFindDialog => self.host.close_find_dialog(),
            Cmd::ShowOpenDialog => {
                if let Some(path) = self.host.choose_open_path() {
                    self.dispatch(Msg::Document(DocumentMsg::OpenPath(path)));
                }
            }
            Cmd::ShowSaveDialog {
                suggested_name,
                content,
            } => {
                if let Some(path) = self.host.choose_save_path(&suggested_name) {
                    self.dispatch(Msg::Document(DocumentMsg::SaveTo {
                        path,
                        text: content,
                    }));
                }
            }
            Cmd::ShowStylesheetDialog => {
                if let Some(path) = self.host.choose_stylesheet() {
                    self.dispatch(Msg::View(ViewMsg::StylesheetChosen(path)));
                }
            }

            Cmd::LoadFile { path } => {
                let result = self.host.read_text_file(&path);
                self.dispatch(Msg::Document(DocumentMsg::FileLoaded { path, result }));
            }
            Cmd::SaveFile { path, content } => {
                let result = self.host.write_text_file(&path, &content);
                self.dispatch(Msg::Document(DocumentMsg::SaveCompleted {
                    path,
                    text: content,
                    result,
                }));
            }
            Cmd::ApplyStylesheet { path, on_failure } => {
                match (self.host.apply_stylesheet(path.as_deref()), path) {
                    (Ok(()), _) => {}
                    (Err(error), Some(path)) => {
                        self.dispatch(Msg::View(ViewMsg::StylesheetFailed {
                            path,
                            error,
                            policy: on_failure,
                        }));
                    }
                    (Err(error), None) => {
                        tracing::warn!("Failed to apply default theme: {}", error);
                    }
                }
            }
            Cmd::SaveConfig(config) => {
                if let Err(e) = self.host.save_config(&config) {
                    tracing::warn!("Failed to save config: {}", e);
                }
            }
            Cmd::Quit => {
                tracing::info!("Quit requested");
                self.quit_requested = true;
            }
        }
    }
}
