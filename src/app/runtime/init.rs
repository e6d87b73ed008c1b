use crate::logic::SearchEndpoint;
use crate::state::AppState;
use crate::storage::{FileStore, KeyValueStore, MemoryStore, SEARCH_KEY, SemiPersistentState};
use crate::theme::{Settings, state_path};

/// Startup options taken from the command line.
#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    /// API base URL overriding `settings.conf`.
    pub api_base: Option<String>,
    /// Keep the search term in memory only.
    pub no_persist: bool,
}

/// What: Build the initial application state from settings and CLI overrides.
///
/// Inputs:
/// - `opts`: Command-line options
/// - `settings`: Parsed `settings.conf`
///
/// Output:
/// - `AppState` with the search term loaded from the store and the endpoint set.
///
/// Details:
/// - The persisted term wins over `default_search`.
pub fn initialize_app_state(opts: &RunOptions, settings: &Settings) -> AppState {
    let store: Box<dyn KeyValueStore> = if opts.no_persist {
        tracing::info!("[Persist] Persistence disabled; term kept in memory");
        Box::new(MemoryStore::new())
    } else {
        let store = FileStore::open(state_path());
        tracing::debug!(path = %store.path().display(), "[Persist] Using state file");
        Box::new(store)
    };
    let term = SemiPersistentState::new(SEARCH_KEY, &settings.default_search, store);

    let base = opts.api_base.as_deref().unwrap_or(&settings.api_base);
    let endpoint = SearchEndpoint::new(base, settings.paginate);
    tracing::info!(
        base = %endpoint.base,
        paginate = endpoint.paginate,
        term = %term.get(),
        "[Runtime] Initialized"
    );

    let mut app = AppState::new(term, endpoint);
    app.discard_stale_responses = settings.discard_stale_responses;
    app.show_recent_searches = settings.show_recent_searches;
    app
}
