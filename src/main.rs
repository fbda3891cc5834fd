//! Console front-end
//!
//! Opens a note, reports its title and counters, optionally runs a find and
//! cycles through the matches, then closes like the window would.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use ropey::Rope;

use yanta::cli::{CliArgs, StartupMode};
use yanta::commands::{NoticeKind, Prompt};
use yanta::config::AppConfig;
use yanta::messages::{DocumentMsg, Msg};
use yanta::model::NoteSession;
use yanta::runtime::{App, Host};
use yanta::stats::TextStats;

/// Plays the editing widget and dialogs on stdin/stdout
struct ConsoleHost {
    buffer: Rope,
}

impl ConsoleHost {
    fn new() -> Self {
        Self {
            buffer: Rope::new(),
        }
    }

    /// 1-indexed line:column of a character offset
    fn line_col(&self, offset: usize) -> (usize, usize) {
        let clamped = offset.min(self.buffer.len_chars());
        let line = self.buffer.char_to_line(clamped);
        let col = clamped - self.buffer.line_to_char(line);
        (line + 1, col + 1)
    }

    fn ask(&self, question: &str) -> Option<String> {
        print!("{} ", question);
        io::stdout().flush().ok()?;
        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer).ok()?;
        let answer = answer.trim();
        (!answer.is_empty()).then(|| answer.to_string())
    }
}

impl Host for ConsoleHost {
    fn text(&self) -> String {
        self.buffer.to_string()
    }

    fn set_text(&mut self, text: &str) {
        self.buffer = Rope::from_str(text);
    }

    fn select_range(&mut self, start: usize, end: usize) {
        let (line, col) = self.line_col(start);
        let end = end.min(self.buffer.len_chars());
        let matched = self.buffer.slice(start.min(end)..end);
        println!("match at {}:{}  \"{}\"", line, col, matched);
    }

    fn scroll_to(&mut self, _offset: usize) {}

    fn set_title(&mut self, _label: &str, window_title: &str) {
        println!("{}", window_title);
    }

    fn update_counters(&mut self, stats: &TextStats) {
        println!("{}", stats);
    }

    fn set_font_size(&mut self, _points: f64) {}

    fn set_word_wrap(&mut self, _enabled: bool) {}

    fn show_notice(&mut self, kind: NoticeKind, title: &str, message: &str) {
        match kind {
            NoticeKind::Info => println!("{}: {}", title, message),
            NoticeKind::Error => eprintln!("{}: {}", title, message),
        }
    }

    fn confirm(&mut self, prompt: &Prompt) -> bool {
        self.ask(&format!("{} [y/N]", prompt.message()))
            .is_some_and(|a| a.eq_ignore_ascii_case("y") || a.eq_ignore_ascii_case("yes"))
    }

    fn choose_open_path(&mut self) -> Option<PathBuf> {
        self.ask("Open file:").map(PathBuf::from)
    }

    fn choose_save_path(&mut self, suggested_name: &str) -> Option<PathBuf> {
        let answer = self.ask(&format!("Save as [{}]:", suggested_name));
        Some(PathBuf::from(answer.as_deref().unwrap_or(suggested_name)))
    }

    fn choose_stylesheet(&mut self) -> Option<PathBuf> {
        self.ask("Stylesheet:").map(PathBuf::from)
    }

    fn apply_stylesheet(&mut self, path: Option<&Path>) -> Result<(), String> {
        // Nothing to style on a console; only check the file is usable
        match path {
            Some(path) => std::fs::read_to_string(path)
                .map(|_| ())
                .map_err(|e| e.to_string()),
            None => Ok(()),
        }
    }
}

fn main() -> Result<()> {
    yanta::tracing::init();

    let startup = CliArgs::parse().into_config();
    let config = AppConfig::load();

    let mut app = App::new(NoteSession::new(config), ConsoleHost::new());
    app.startup();

    if let StartupMode::Open(path) = startup.mode {
        app.dispatch(Msg::Document(DocumentMsg::OpenPath(path)));
    }

    if let Some(query) = startup.query {
        app.find(query.clone());
        for _ in 0..startup.next_presses {
            app.find_next(query.clone());
        }
        let matches = app.model().find.matches.matches().to_vec();
        if !matches.is_empty() {
            let positions: Vec<String> = matches
                .iter()
                .map(|&offset| {
                    let (line, col) = app.host().line_col(offset);
                    format!("{}:{}", line, col)
                })
                .collect();
            println!("{} matches: {}", matches.len(), positions.join(", "));
        }
    }

    app.quit();
    anyhow::ensure!(app.quit_requested(), "close was not completed");
    Ok(())
}
