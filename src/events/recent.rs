use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;

use crate::logic::search_last;
use crate::state::{AppState, Focus, QueryInput};

/// What: Handle a key while the last-searches row has focus.
///
/// Inputs:
/// - `ke`: Key event
/// - `app`: Mutable application state
/// - `query_tx`: Channel to the fetch worker
///
/// Output:
/// - Always `false`.
///
/// Details:
/// - Left/Right (or h/l) move between buttons; Enter searches the highlighted term.
/// - Esc returns to the search input.
pub fn handle_recent_key(
    ke: KeyEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) -> bool {
    let terms = app.last_searches();
    if terms.is_empty() {
        app.focus = Focus::Search;
        return false;
    }
    let max = terms.len() - 1;
    app.recent_selected = app.recent_selected.min(max);
    match ke.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Up | KeyCode::Char('k') => {
            app.recent_selected = app.recent_selected.saturating_sub(1);
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Down | KeyCode::Char('j') => {
            app.recent_selected = (app.recent_selected + 1).min(max);
        }
        KeyCode::Enter => {
            let term = terms[app.recent_selected].clone();
            search_last(app, query_tx, &term);
            // the row changes under the cursor once the new URL is recorded
            app.recent_selected = 0;
        }
        KeyCode::Esc => app.focus = Focus::Search,
        _ => {}
    }
    false
}
