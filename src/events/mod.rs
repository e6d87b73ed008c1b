//! Keyboard handling for the TUI.
//!
//! `handle_event` applies the global bindings and delegates to the handler of the
//! focused pane.

use crossterm::event::{Event as CEvent, KeyCode, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::state::{AppState, Focus, QueryInput};

mod recent;
mod results;
mod search;

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(
    ev: CEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }
    if ke.code == KeyCode::Char('c') && ke.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }
    match ke.code {
        KeyCode::Tab => {
            cycle_focus(app, Focus::next);
            return false;
        }
        KeyCode::BackTab => {
            cycle_focus(app, Focus::prev);
            return false;
        }
        _ => {}
    }
    match app.focus {
        Focus::Search => search::handle_search_key(ke, app, query_tx),
        Focus::Recent => recent::handle_recent_key(ke, app, query_tx),
        Focus::Results => results::handle_results_key(ke, app, query_tx),
    }
}

/// What: Move focus with `step`, skipping the recent row when it shows nothing.
fn cycle_focus(app: &mut AppState, step: fn(Focus) -> Focus) {
    let mut next = step(app.focus);
    if next == Focus::Recent && !app.has_recent_row() {
        next = step(next);
    }
    app.focus = next;
    if next == Focus::Recent {
        app.recent_selected = 0;
    }
}

/// What: Build a plain key press for tests.
#[cfg(test)]
pub(crate) fn press(code: KeyCode) -> CEvent {
    CEvent::Key(crossterm::event::KeyEvent::new(code, KeyModifiers::NONE))
}
