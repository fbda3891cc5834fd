//! Find dialog handlers

use crate::commands::Cmd;
use crate::messages::FindMsg;
use crate::model::NoteSession;
use crate::search::{self, SearchDirection, SearchQuery};

/// Handle find dialog actions
pub fn update_find(model: &mut NoteSession, msg: FindMsg) -> Option<Cmd> {
    match msg {
        FindMsg::Find { text, query } => Some(run_find(model, &text, query)),
        FindMsg::Next { text, query } => cycle(model, &text, query, SearchDirection::Forward),
        FindMsg::Previous { text, query } => {
            cycle(model, &text, query, SearchDirection::Backward)
        }
        FindMsg::Cancel => Some(Cmd::CloseFindDialog),
    }
}

fn run_find(model: &mut NoteSession, text: &str, query: SearchQuery) -> Cmd {
    let matches = search::find(text, &query);
    let cmd = match matches.current_range() {
        Some(range) => Cmd::select_and_scroll(range.start, range.end),
        None => not_found(&query),
    };
    model.find.matches = matches;
    model.find.query = Some(query);
    cmd
}

fn cycle(
    model: &mut NoteSession,
    text: &str,
    query: SearchQuery,
    direction: SearchDirection,
) -> Option<Cmd> {
    // Matches built for another query text are meaningless here
    if !model.find.is_active_query(&query.text) {
        tracing::debug!(query = %query.text, "query changed since last find, rescanning");
        return Some(run_find(model, text, query));
    }

    if model.find.matches.is_empty() {
        return None;
    }

    // Checkbox changes apply to re-validation without a rescan
    let step = model.find.matches.step(text, &query, direction);
    let cmd = match step {
        Some(range) => Cmd::select_and_scroll(range.start, range.end),
        // Every stored match went stale; keep the set, select nothing
        None => not_found(&query),
    };
    model.find.query = Some(query);
    Some(cmd)
}

fn not_found(query: &SearchQuery) -> Cmd {
    Cmd::info("Not Found", format!("Text '{}' not found.", query.text))
}
