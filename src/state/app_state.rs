//! Central `AppState` container.

use ratatui::widgets::ListState;

use crate::logic::{SearchEndpoint, last_searches, sort_stories, stories_reducer};
use crate::state::types::{Focus, SortState, StoriesAction, StoriesState, Story};
use crate::storage::{MemoryStore, SEARCH_KEY, SemiPersistentState};

/// Search term used when nothing has been persisted yet.
pub const DEFAULT_SEARCH_TERM: &str = "React";

/// Application state shared by the event, fetch, and UI layers.
///
/// Owned by the event loop and mutated sequentially; stories change only through
/// [`AppState::dispatch`].
#[derive(Debug)]
pub struct AppState {
    /// Search input, mirrored into the key-value store on every edit.
    pub search_term: SemiPersistentState,
    /// Every requested URL, oldest first.
    pub urls: Vec<String>,
    /// Reducer-owned stories state.
    pub stories: StoriesState,
    /// Results list sort toggle.
    pub sort: SortState,
    /// Highlighted row in the sorted view.
    pub selected: usize,
    /// Selection state for the results list widget.
    pub list_state: ListState,
    /// Highlighted entry in the last-searches row.
    pub recent_selected: usize,
    /// Which pane is currently focused.
    pub focus: Focus,
    /// Endpoint used to build and parse request URLs.
    pub endpoint: SearchEndpoint,
    /// Drop results whose id is not the latest request's id.
    pub discard_stale_responses: bool,
    /// Render the last-searches row.
    pub show_recent_searches: bool,
    /// Identifier of the latest request sent to the fetch worker.
    pub latest_query_id: u64,
    /// Next request identifier to allocate.
    pub next_query_id: u64,
    /// Total pages reported by the API for the current term.
    pub nb_pages: Option<u32>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            SemiPersistentState::new(SEARCH_KEY, DEFAULT_SEARCH_TERM, Box::new(MemoryStore::new())),
            SearchEndpoint::default(),
        )
    }
}

impl AppState {
    /// What: Build a fresh state around a loaded search term and endpoint.
    ///
    /// Inputs:
    /// - `search_term`: Persistent term (already resolved from the store)
    /// - `endpoint`: API endpoint description
    ///
    /// Output:
    /// - State with empty stories, no history, and focus on the search input.
    #[must_use]
    pub fn new(search_term: SemiPersistentState, endpoint: SearchEndpoint) -> Self {
        Self {
            search_term,
            urls: Vec::new(),
            stories: StoriesState::default(),
            sort: SortState::default(),
            selected: 0,
            list_state: ListState::default(),
            recent_selected: 0,
            focus: Focus::default(),
            endpoint,
            discard_stale_responses: false,
            show_recent_searches: true,
            latest_query_id: 0,
            next_query_id: 1,
            nb_pages: None,
        }
    }

    /// What: Run `action` through the stories reducer.
    ///
    /// Details:
    /// - Keeps the list selection inside the new data bounds.
    pub fn dispatch(&mut self, action: StoriesAction) {
        tracing::debug!(action = action.tag(), "[Stories] dispatch");
        let prev = std::mem::take(&mut self.stories);
        self.stories = stories_reducer(prev, action);
        self.clamp_selection();
    }

    /// What: Stories in display order (current sort applied).
    #[must_use]
    pub fn visible_stories(&self) -> Vec<Story> {
        sort_stories(&self.stories.data, self.sort)
    }

    /// What: Story under the list highlight, if any.
    #[must_use]
    pub fn selected_story(&self) -> Option<Story> {
        self.visible_stories().into_iter().nth(self.selected)
    }

    /// What: Clamp `selected` to the data length and sync the list widget state.
    pub fn clamp_selection(&mut self) {
        let len = self.stories.data.len();
        self.selected = self.selected.min(len.saturating_sub(1));
        self.list_state
            .select(if len == 0 { None } else { Some(self.selected) });
    }

    /// What: Recent-search shortcuts derived from the URL history.
    #[must_use]
    pub fn last_searches(&self) -> Vec<String> {
        last_searches(&self.endpoint, &self.urls)
    }

    /// What: Whether the last-searches row is enabled and has at least one entry.
    #[must_use]
    pub fn has_recent_row(&self) -> bool {
        self.show_recent_searches && !self.last_searches().is_empty()
    }

    /// What: Whether another page can be requested for the current term.
    #[must_use]
    pub fn has_more_pages(&self) -> bool {
        if !self.endpoint.paginate || self.urls.is_empty() {
            return false;
        }
        match (self.stories.page, self.nb_pages) {
            (Some(page), Some(total)) => page.saturating_add(1) < total,
            _ => true,
        }
    }
}
