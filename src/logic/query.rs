use tokio::sync::mpsc;

use crate::state::{
    AppState, FetchPayload, FetchResult, QueryInput, SortState, StoriesAction, Story,
};

/// What: Record a request for `term`/`page`, mark the list as loading, and hand it to the worker.
///
/// Inputs:
/// - `app`: Mutable application state; updates `urls`, ids, and stories
/// - `query_tx`: Channel to the fetch worker
/// - `term`: Search term, used verbatim
/// - `page`: Page to request (ignored for unpaginated endpoints)
///
/// Output:
/// - Appends the URL to the history, dispatches `FetchInit`, sends a `QueryInput` with a fresh id.
///
/// Details:
/// - The list is replaced by the loading line, so its sort toggle and selection start over.
/// - Earlier in-flight requests are not cancelled; their results still arrive.
pub fn send_query(
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
    term: &str,
    page: u32,
) {
    let page = app.endpoint.page_param(page);
    let url = app.endpoint.url(term, page);
    app.urls.push(url.clone());
    app.dispatch(StoriesAction::FetchInit);
    app.sort = SortState::default();
    app.selected = 0;
    app.clamp_selection();

    let id = app.next_query_id;
    app.next_query_id += 1;
    app.latest_query_id = id;
    tracing::info!(id, term = %term, page = ?page, "[Fetch] Request queued");
    if query_tx.send(QueryInput { id, url, page }).is_err() {
        tracing::warn!(id, "[Fetch] Worker channel closed; request dropped");
        app.dispatch(StoriesAction::FetchFailure);
    }
}

/// What: Submit the search form.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `query_tx`: Channel to the fetch worker
///
/// Output:
/// - `true` when a request was issued; `false` when the term is empty.
pub fn submit_search(app: &mut AppState, query_tx: &mpsc::UnboundedSender<QueryInput>) -> bool {
    let term = app.search_term.get().to_string();
    if term.is_empty() {
        return false;
    }
    send_query(app, query_tx, &term, 0);
    true
}

/// What: Re-run one of the last searches.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `query_tx`: Channel to the fetch worker
/// - `term`: Term taken from the last-searches row
///
/// Output:
/// - Sets the input to `term` (persisting it) and requests its first page.
pub fn search_last(app: &mut AppState, query_tx: &mpsc::UnboundedSender<QueryInput>, term: &str) {
    app.search_term.set(term);
    send_query(app, query_tx, term, 0);
}

/// What: Request the next page of the most recently searched term.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `query_tx`: Channel to the fetch worker
///
/// Output:
/// - `true` when a request was issued; `false` for unpaginated endpoints or empty history.
///
/// Details:
/// - The term comes from the last requested URL, not from the input field.
pub fn load_more(app: &mut AppState, query_tx: &mpsc::UnboundedSender<QueryInput>) -> bool {
    if !app.endpoint.paginate {
        return false;
    }
    let Some(last_url) = app.urls.last() else {
        return false;
    };
    let term = app.endpoint.extract_term(last_url);
    let next_page = app.stories.page.map_or(0, |p| p.saturating_add(1));
    send_query(app, query_tx, &term, next_page);
    true
}

/// What: Dismiss a story from the list.
pub fn remove_story(app: &mut AppState, story: Story) {
    tracing::debug!(id = %story.object_id, "[Stories] remove");
    app.dispatch(StoriesAction::RemoveStory(story));
}

/// What: Apply a resolved request to the stories state.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `result`: Outcome reported by the fetch worker
///
/// Output:
/// - Dispatches `FetchSuccess` or `FetchFailure`; stale results are dropped only when
///   `discard_stale_responses` is enabled.
///
/// Details:
/// - Without the flag, whichever request resolves last determines the list contents.
pub fn apply_fetch_result(app: &mut AppState, result: FetchResult) {
    if result.id != app.latest_query_id {
        if app.discard_stale_responses {
            tracing::debug!(
                id = result.id,
                latest = app.latest_query_id,
                "[Fetch] Discarding stale response"
            );
            return;
        }
        tracing::debug!(
            id = result.id,
            latest = app.latest_query_id,
            "[Fetch] Applying out-of-date response"
        );
    }
    match result.outcome {
        Ok(resp) => {
            tracing::info!(
                id = result.id,
                hits = resp.hits.len(),
                page = ?result.page,
                "[Fetch] Request succeeded"
            );
            app.nb_pages = resp.nb_pages;
            app.dispatch(StoriesAction::FetchSuccess(FetchPayload {
                list: resp.hits,
                page: result.page,
            }));
        }
        Err(e) => {
            tracing::warn!(id = result.id, error = %e, "[Fetch] Request failed");
            app.dispatch(StoriesAction::FetchFailure);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::SearchEndpoint;
    use crate::state::SearchResponse;

    fn hit(id: &str, author: &str) -> Story {
        Story {
            object_id: id.to_string(),
            author: author.to_string(),
            ..Default::default()
        }
    }

    fn ok(id: u64, page: Option<u32>, hits: Vec<Story>) -> FetchResult {
        FetchResult {
            id,
            page,
            outcome: Ok(SearchResponse {
                hits,
                page,
                nb_pages: Some(10),
            }),
        }
    }

    #[tokio::test]
    /// What: Submitting increments ids, records the URL, and forwards the request.
    ///
    /// Inputs:
    /// - Default app with the term "React".
    ///
    /// Output:
    /// - Channel receives a `QueryInput` for `query=React&page=0`; state is loading.
    async fn submit_search_sends_query() {
        let mut app = AppState::default();
        let (tx, mut rx) = mpsc::unbounded_channel();
        assert!(submit_search(&mut app, &tx));
        assert_eq!(app.latest_query_id, 1);
        assert!(app.stories.is_loading);
        let q = tokio::time::timeout(std::time::Duration::from_millis(50), rx.recv())
            .await
            .ok()
            .flatten()
            .expect("query sent");
        assert_eq!(q.id, 1);
        assert_eq!(q.page, Some(0));
        assert!(q.url.ends_with("search?query=React&page=0"));
        assert_eq!(app.urls, vec![q.url]);
    }

    #[test]
    /// What: An empty term does not submit.
    fn submit_search_ignores_empty_term() {
        let mut app = AppState::default();
        app.search_term.set("");
        let (tx, _rx) = mpsc::unbounded_channel();
        assert!(!submit_search(&mut app, &tx));
        assert!(app.urls.is_empty());
        assert!(!app.stories.is_loading);
    }

    #[test]
    /// What: Load more uses the last URL's term and the next page.
    ///
    /// Inputs:
    /// - History ending with "Rust" page 0, input changed to "Go", stories at page 0.
    ///
    /// Output:
    /// - Request for "Rust" page 1.
    fn load_more_uses_last_url_term() {
        let mut app = AppState::default();
        let (tx, mut rx) = mpsc::unbounded_channel();
        search_last(&mut app, &tx, "Rust");
        app.stories.page = Some(0);
        app.search_term.set("Go");
        assert!(load_more(&mut app, &tx));
        let _first = rx.try_recv().expect("first");
        let second = rx.try_recv().expect("second");
        assert_eq!(second.page, Some(1));
        assert!(second.url.ends_with("query=Rust&page=1"));
    }

    #[test]
    /// What: Load more is a no-op for unpaginated endpoints.
    fn load_more_requires_pagination() {
        let mut app = AppState::default();
        app.endpoint = SearchEndpoint::new("http://h", false);
        let (tx, _rx) = mpsc::unbounded_channel();
        send_query(&mut app, &tx, "React", 0);
        assert!(!load_more(&mut app, &tx));
        assert_eq!(app.urls.len(), 1);
    }

    #[test]
    /// What: Last resolved response wins by default, even if it is stale.
    ///
    /// Inputs:
    /// - Two requests; the newer resolves first, then the older one.
    ///
    /// Output:
    /// - The older (stale) response's stories are shown.
    fn stale_response_wins_by_default() {
        let mut app = AppState::default();
        let (tx, _rx) = mpsc::unbounded_channel();
        send_query(&mut app, &tx, "React", 0);
        send_query(&mut app, &tx, "JavaScript", 0);
        apply_fetch_result(&mut app, ok(2, Some(0), vec![hit("js", "brendan")]));
        apply_fetch_result(&mut app, ok(1, Some(0), vec![hit("r", "jordan")]));
        assert_eq!(app.stories.data, vec![hit("r", "jordan")]);
    }

    #[test]
    /// What: A new request starts the results list with no sort and the first row selected.
    ///
    /// Inputs:
    /// - React results sorted by title (reversed), second row selected, then a JavaScript search.
    ///
    /// Output:
    /// - Sort back to default and selection at 0 while loading and after the results arrive.
    fn new_request_resets_sort_and_selection() {
        let mut app = AppState::default();
        let (tx, _rx) = mpsc::unbounded_channel();
        send_query(&mut app, &tx, "React", 0);
        apply_fetch_result(
            &mut app,
            ok(1, Some(0), vec![hit("a", "jordan"), hit("b", "dan")]),
        );
        crate::logic::select_sort_column(&mut app, crate::state::SortKey::Title);
        crate::logic::select_sort_column(&mut app, crate::state::SortKey::Title);
        app.selected = 1;
        assert!(app.sort.is_reverse);

        send_query(&mut app, &tx, "JavaScript", 0);
        assert_eq!(app.sort, SortState::default());
        assert_eq!(app.selected, 0);

        apply_fetch_result(&mut app, ok(2, Some(0), vec![hit("js", "brendan")]));
        assert_eq!(app.sort, SortState::default());
        assert_eq!(app.selected_story().map(|s| s.object_id), Some("js".to_string()));
    }

    #[test]
    /// What: With `discard_stale_responses`, only the latest request is applied.
    fn stale_response_dropped_when_enabled() {
        let mut app = AppState {
            discard_stale_responses: true,
            ..AppState::default()
        };
        let (tx, _rx) = mpsc::unbounded_channel();
        send_query(&mut app, &tx, "React", 0);
        send_query(&mut app, &tx, "JavaScript", 0);
        apply_fetch_result(&mut app, ok(2, Some(0), vec![hit("js", "brendan")]));
        apply_fetch_result(&mut app, ok(1, Some(0), vec![hit("r", "jordan")]));
        assert_eq!(app.stories.data, vec![hit("js", "brendan")]);
        assert!(!app.stories.is_loading);
    }

    #[test]
    /// What: A failed request sets the error flag and keeps existing stories.
    fn failure_keeps_stories() {
        let mut app = AppState::default();
        let (tx, _rx) = mpsc::unbounded_channel();
        send_query(&mut app, &tx, "React", 0);
        apply_fetch_result(&mut app, ok(1, Some(0), vec![hit("r", "jordan")]));
        send_query(&mut app, &tx, "React", 1);
        apply_fetch_result(
            &mut app,
            FetchResult {
                id: 2,
                page: Some(1),
                outcome: Err("HTTP 503".into()),
            },
        );
        assert!(app.stories.is_error);
        assert!(!app.stories.is_loading);
        assert_eq!(app.stories.data.len(), 1);
    }

    #[test]
    /// What: A closed worker channel turns into a failure instead of a stuck loading state.
    fn closed_channel_fails_request() {
        let mut app = AppState::default();
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        send_query(&mut app, &tx, "React", 0);
        assert!(app.stories.is_error);
        assert!(!app.stories.is_loading);
    }
}
