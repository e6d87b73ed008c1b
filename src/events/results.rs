use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;

use crate::logic::{load_more, remove_story, select_sort_column};
use crate::state::{AppState, Focus, QueryInput, SortKey};

/// What: Handle a key while the stories list has focus.
///
/// Inputs:
/// - `ke`: Key event
/// - `app`: Mutable application state
/// - `query_tx`: Channel to the fetch worker
///
/// Output:
/// - `true` when the user asked to quit (`q`); otherwise `false`.
///
/// Details:
/// - Up/Down (j/k), Home/End move the highlight.
/// - `d`/Delete dismisses the highlighted story.
/// - `1`-`4` or `t`/`a`/`c`/`p` select a sort column; selecting it again reverses it.
/// - `m`/PageDown requests the next page.
pub fn handle_results_key(
    ke: KeyEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) -> bool {
    let len = app.stories.data.len();
    match ke.code {
        KeyCode::Char('q') => return true,
        KeyCode::Esc => app.focus = Focus::Search,
        KeyCode::Up | KeyCode::Char('k') => {
            app.selected = app.selected.saturating_sub(1);
            app.clamp_selection();
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if len > 0 {
                app.selected = (app.selected + 1).min(len - 1);
            }
            app.clamp_selection();
        }
        KeyCode::Home => {
            app.selected = 0;
            app.clamp_selection();
        }
        KeyCode::End => {
            app.selected = len.saturating_sub(1);
            app.clamp_selection();
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(story) = app.selected_story() {
                remove_story(app, story);
            }
        }
        KeyCode::Char('m') | KeyCode::PageDown => {
            if app.stories.is_loading {
                tracing::debug!("[Search] More ignored while loading");
            } else if !load_more(app, query_tx) {
                tracing::debug!("[Search] No further page to request");
            }
        }
        KeyCode::Char(ch) => {
            if let Some(key) = sort_key_for(ch) {
                select_sort_column(app, key);
            }
        }
        _ => {}
    }
    false
}

/// What: Map a shortcut character to its sort column.
const fn sort_key_for(ch: char) -> Option<SortKey> {
    match ch {
        '1' | 't' => Some(SortKey::Title),
        '2' | 'a' => Some(SortKey::Author),
        '3' | 'c' => Some(SortKey::Comment),
        '4' | 'p' => Some(SortKey::Point),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::super::{handle_event, press};
    use crate::state::{AppState, FetchPayload, Focus, SortKey, StoriesAction, Story};
    use crossterm::event::KeyCode;
    use tokio::sync::mpsc;

    fn story(id: &str, title: &str, points: u64) -> Story {
        Story {
            object_id: id.to_string(),
            title: title.to_string(),
            points,
            ..Story::default()
        }
    }

    fn loaded_app() -> AppState {
        let mut app = AppState::default();
        app.focus = Focus::Results;
        app.urls.push(app.endpoint.url("React", Some(0)));
        app.dispatch(StoriesAction::FetchSuccess(FetchPayload {
            list: vec![story("0", "React", 4), story("1", "Redux", 5), story("2", "Angular", 9)],
            page: Some(0),
        }));
        app
    }

    #[test]
    /// What: `d` removes the highlighted story, respecting the current sort order.
    ///
    /// Inputs:
    /// - Highlight on "React" (first row), then sorted by title (Angular, React, Redux).
    ///
    /// Output:
    /// - The highlight follows "React" to the second row; `d` removes it.
    fn delete_removes_highlighted_story() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = loaded_app();
        handle_event(press(KeyCode::Char('t')), &mut app, &tx);
        assert_eq!(app.selected, 1);
        handle_event(press(KeyCode::Char('d')), &mut app, &tx);

        let ids: Vec<_> = app.stories.data.iter().map(|s| s.object_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(app.selected, 1);
    }

    #[test]
    /// What: Pressing a sort key twice reverses the column.
    fn sort_keys_toggle_reverse() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = loaded_app();
        handle_event(press(KeyCode::Char('4')), &mut app, &tx);
        assert_eq!(app.sort.sort_key, SortKey::Point);
        assert!(!app.sort.is_reverse);
        assert_eq!(app.visible_stories()[0].object_id, "2");

        handle_event(press(KeyCode::Char('p')), &mut app, &tx);
        assert!(app.sort.is_reverse);
        assert_eq!(app.visible_stories()[0].object_id, "0");
    }

    #[test]
    /// What: `m` requests the next page of the last searched term.
    fn more_requests_next_page() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = loaded_app();
        handle_event(press(KeyCode::Char('m')), &mut app, &tx);
        let q = rx.try_recv().expect("query queued");
        assert_eq!(q.page, Some(1));
        assert!(q.url.ends_with("search?query=React&page=1"));
        // existing stories are kept while the next page loads
        assert_eq!(app.stories.data.len(), 3);
        assert!(app.stories.is_loading);
    }

    #[test]
    /// What: `q` quits from the list; navigation stays in bounds.
    fn navigation_and_quit() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = loaded_app();
        for _ in 0..5 {
            handle_event(press(KeyCode::Down), &mut app, &tx);
        }
        assert_eq!(app.selected, 2);
        handle_event(press(KeyCode::Home), &mut app, &tx);
        assert_eq!(app.selected, 0);
        assert!(handle_event(press(KeyCode::Char('q')), &mut app, &tx));
    }
}
