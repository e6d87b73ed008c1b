use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::logic::submit_search;
use crate::state::{AppState, QueryInput};

/// What: Handle a key while the search input has focus.
///
/// Inputs:
/// - `ke`: Key event
/// - `app`: Mutable application state
/// - `query_tx`: Channel to the fetch worker
///
/// Output:
/// - Always `false`; exiting from the input is only possible with Ctrl+C.
///
/// Details:
/// - Characters and Backspace edit the term, which is persisted on every change.
/// - Enter submits; an empty term is ignored like a disabled button.
pub fn handle_search_key(
    ke: KeyEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) -> bool {
    match ke.code {
        KeyCode::Enter => {
            if !submit_search(app, query_tx) {
                tracing::debug!("[Search] Submit ignored for empty term");
            }
        }
        KeyCode::Backspace => app.search_term.pop(),
        KeyCode::Char(ch)
            if !ke
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.search_term.push(ch);
        }
        _ => {}
    }
    false
}
