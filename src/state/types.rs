//! Core value types used by Hacker Stories state.

use serde::{Deserialize, Deserializer, Serialize};

/// What: Decode a JSON value that may be `null` into `T`, using `T::default()` for `null`.
///
/// Inputs:
/// - `de`: Serde deserializer positioned at the field value
///
/// Output:
/// - The decoded value, or the default when the API sent `null`.
fn null_as_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}

/// A single search hit as rendered in the results list.
///
/// Stories are immutable once fetched; identity is [`Story::object_id`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    /// Identifier assigned by the search API.
    #[serde(rename = "objectID")]
    pub object_id: String,
    /// Link to the story (may be empty for text posts).
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    /// Story headline.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Submitter's user name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    /// Number of comments on the story.
    #[serde(default, deserialize_with = "null_as_default")]
    pub num_comments: u64,
    /// Score of the story.
    #[serde(default, deserialize_with = "null_as_default")]
    pub points: u64,
}

/// Body returned by `GET {base}/search`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SearchResponse {
    /// Matching stories for the requested page.
    #[serde(default)]
    pub hits: Vec<Story>,
    /// Zero-based page number echoed by the API.
    #[serde(default)]
    pub page: Option<u32>,
    /// Total number of pages available for the query.
    #[serde(default, rename = "nbPages")]
    pub nb_pages: Option<u32>,
}

/// Payload of a successful fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FetchPayload {
    /// Stories returned for the request.
    pub list: Vec<Story>,
    /// Page the stories belong to; `None` for unpaginated requests.
    pub page: Option<u32>,
}

/// Stories list state owned by the reducer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoriesState {
    /// Stories currently shown, in fetch order.
    pub data: Vec<Story>,
    /// `true` while a request is outstanding.
    pub is_loading: bool,
    /// `true` after the last resolved request failed.
    pub is_error: bool,
    /// Page of the most recent successful fetch (paginated mode only).
    pub page: Option<u32>,
}

/// Actions accepted by [`crate::logic::stories_reducer`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoriesAction {
    /// A request was issued.
    FetchInit,
    /// A request resolved with a decoded body.
    FetchSuccess(FetchPayload),
    /// A request failed for any reason.
    FetchFailure,
    /// The user dismissed a story.
    RemoveStory(Story),
}

impl StoriesAction {
    /// What: Stable tag naming the action, used in log output.
    ///
    /// Output:
    /// - One of `STORIES_FETCH_INIT`, `STORIES_FETCH_SUCCESS`, `STORIES_FETCH_FAILURE`, `REMOVE_STORY`.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::FetchInit => "STORIES_FETCH_INIT",
            Self::FetchSuccess(_) => "STORIES_FETCH_SUCCESS",
            Self::FetchFailure => "STORIES_FETCH_FAILURE",
            Self::RemoveStory(_) => "REMOVE_STORY",
        }
    }
}

/// Column the results list is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Keep fetch order.
    #[default]
    None,
    /// Title, ascending.
    Title,
    /// Author, ascending.
    Author,
    /// Comment count, descending.
    Comment,
    /// Points, descending.
    Point,
}

impl SortKey {
    /// Columns that can be clicked/selected, in header order.
    pub const COLUMNS: [Self; 4] = [Self::Title, Self::Author, Self::Comment, Self::Point];

    /// What: Header label of the column.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Title => "Title",
            Self::Author => "Author",
            Self::Comment => "Comments",
            Self::Point => "Points",
        }
    }
}

/// Local sort toggle of the results list. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    /// Active column.
    pub sort_key: SortKey,
    /// Whether the column's baseline order is reversed.
    pub is_reverse: bool,
}

/// Which pane currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Search input.
    #[default]
    Search,
    /// Last-searches row.
    Recent,
    /// Stories list.
    Results,
}

impl Focus {
    /// What: Next pane in Tab order.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Search => Self::Recent,
            Self::Recent => Self::Results,
            Self::Results => Self::Search,
        }
    }

    /// What: Previous pane in Tab order.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Search => Self::Results,
            Self::Recent => Self::Search,
            Self::Results => Self::Recent,
        }
    }
}

/// Request sent to the background fetch worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryInput {
    /// Monotonic identifier used to correlate responses.
    pub id: u64,
    /// Fully built request URL.
    pub url: String,
    /// Page requested, if the endpoint is paginated.
    pub page: Option<u32>,
}

/// Result corresponding to a prior [`QueryInput`].
#[derive(Clone, Debug)]
pub struct FetchResult {
    /// Echoed identifier from the originating query.
    pub id: u64,
    /// Page echoed from the originating query.
    pub page: Option<u32>,
    /// Decoded response, or the error text of the failure.
    pub outcome: Result<SearchResponse, String>,
}
