//! Network data retrieval from the story search API.

mod search;

pub use search::{Fetcher, fetch_stories, http_fetcher};

/// Result type alias for network fetching operations.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;
