use super::url::SearchEndpoint;

/// Window of distinct terms considered, including the current one.
const LAST_SEARCHES_WINDOW: usize = 6;

/// What: Derive the recent-search shortcuts from the request history.
///
/// Inputs:
/// - `endpoint`: Endpoint used to recover terms from URLs
/// - `urls`: Requested URLs, oldest first
///
/// Output:
/// - At most five prior terms, oldest first, excluding the current (latest) term.
///
/// Details:
/// - Only adjacent repeats collapse ("a, b, a" keeps both `a`s), so page loads of the same
///   term never show up as separate entries.
#[must_use]
pub fn last_searches(endpoint: &SearchEndpoint, urls: &[String]) -> Vec<String> {
    let mut terms: Vec<String> = Vec::with_capacity(urls.len());
    for url in urls {
        let term = endpoint.extract_term(url);
        if terms.last() != Some(&term) {
            terms.push(term);
        }
    }
    let start = terms.len().saturating_sub(LAST_SEARCHES_WINDOW);
    let mut window = terms.split_off(start);
    window.pop();
    window
}
