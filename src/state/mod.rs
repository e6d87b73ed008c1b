//! Application state: value types and the central [`AppState`].

pub mod app_state;
pub mod types;

pub use app_state::{AppState, DEFAULT_SEARCH_TERM};
pub use types::{
    FetchPayload, FetchResult, Focus, QueryInput, SearchResponse, SortKey, SortState,
    StoriesAction, StoriesState, Story,
};

