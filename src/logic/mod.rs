//! Core search logic: reducer, URL building, recent searches, sorting, and request flow.

pub mod last_searches;
pub mod query;
pub mod reducer;
pub mod sort;
pub mod url;

pub use last_searches::last_searches;
pub use query::{
    apply_fetch_result, load_more, remove_story, search_last, send_query, submit_search,
};
pub use reducer::stories_reducer;
pub use sort::{select_sort_column, sort_stories};
pub use url::{DEFAULT_API_BASE, SearchEndpoint};
