//! Story search over HTTP.

use std::sync::{Arc, LazyLock};
use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;

use crate::state::SearchResponse;

type Result<T> = super::Result<T>;

/// Function performing one GET for a request URL, swappable in tests.
pub type Fetcher = Arc<dyn Fn(String) -> BoxFuture<'static, Result<SearchResponse>> + Send + Sync>;

/// Shared HTTP client with connection pooling for search requests.
///
/// Only a connect timeout is set; a response that never completes keeps the request pending.
static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(15))
        .user_agent(format!("hacker-stories/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "[Fetch] Falling back to default HTTP client");
            reqwest::Client::new()
        })
});

/// What: Fetch and decode one page of search results.
///
/// Inputs:
/// - `url`: Fully built request URL
///
/// Output:
/// - `Ok(SearchResponse)` with the hits; `Err` on network error, non-2xx status, or invalid JSON.
///
/// # Errors
/// - Returns `Err` when the request cannot be sent or the body cannot be read
/// - Returns `Err` when the server answers with a non-success status
/// - Returns `Err` when the body is not a valid search response
pub async fn fetch_stories(url: String) -> Result<SearchResponse> {
    fetch_with(&HTTP_CLIENT, url).await
}

/// What: Perform the search GET with an explicit client.
async fn fetch_with(client: &reqwest::Client, url: String) -> Result<SearchResponse> {
    tracing::debug!(url = %url, "[Fetch] GET");
    let resp = client
        .get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;
    let status = resp.status();
    if !status.is_success() {
        return Err(format!("HTTP {status} from {url}").into());
    }
    let body = resp
        .json::<SearchResponse>()
        .await
        .map_err(|e| format!("Invalid search response: {e}"))?;
    Ok(body)
}

/// What: The production [`Fetcher`] backed by [`fetch_stories`].
#[must_use]
pub fn http_fetcher() -> Fetcher {
    Arc::new(|url| fetch_stories(url).boxed())
}
