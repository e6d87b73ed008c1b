//! Command-line search mode: print one page of results and exit.

use crate::logic::SearchEndpoint;
use crate::sources::fetch_stories;
use crate::state::{SearchResponse, Story};
use crate::theme::Settings;
use crate::ui::{column_widths, fit_width};

/// Width of the printed table in columns.
const TABLE_WIDTH: u16 = 100;

/// What: Run a single search from the command line and print the results.
///
/// Inputs:
/// - `term`: Search term
/// - `page`: Requested page (ignored when pagination is disabled)
/// - `api_base`: Optional API base overriding the settings
/// - `settings`: Parsed settings
///
/// Output:
/// - Process exit code: `0` on success, `1` when the request fails or the term is empty.
///
/// Details:
/// - Does not touch the saved search term or the URL history.
pub async fn handle_search(
    term: &str,
    page: u32,
    api_base: Option<&str>,
    settings: &Settings,
) -> i32 {
    if term.is_empty() {
        eprintln!("Search term must not be empty");
        return 1;
    }
    let endpoint = SearchEndpoint::new(api_base.unwrap_or(&settings.api_base), settings.paginate);
    let url = endpoint.url(term, endpoint.page_param(page));
    tracing::info!(term = %term, url = %url, "Search mode requested from CLI");

    match fetch_stories(url).await {
        Ok(resp) => {
            for line in format_table(&resp, TABLE_WIDTH) {
                println!("{line}");
            }
            0
        }
        Err(e) => {
            eprintln!("Search failed: {e}");
            tracing::error!(error = %e, "[Fetch] CLI search failed");
            1
        }
    }
}

/// What: Lay out a search response as a plain-text table.
///
/// Inputs:
/// - `resp`: Decoded response
/// - `width`: Total table width
///
/// Output:
/// - Header line, one line per story, and a page summary when the response carries one.
#[must_use]
pub fn format_table(resp: &SearchResponse, width: u16) -> Vec<String> {
    let widths = column_widths(width);
    let row = |cells: [&str; 4]| {
        cells
            .iter()
            .zip(widths)
            .map(|(c, w)| fit_width(c, w))
            .collect::<String>()
            .trim_end()
            .to_string()
    };
    let mut out = vec![row(["Title:", "Author:", "Comments:", "Points:"])];
    out.extend(resp.hits.iter().map(|s: &Story| {
        row([
            &s.title,
            &s.author,
            &s.num_comments.to_string(),
            &s.points.to_string(),
        ])
    }));
    if resp.hits.is_empty() {
        out.push("No stories found.".to_string());
    }
    if let (Some(page), Some(total)) = (resp.page, resp.nb_pages) {
        out.push(format!("Page {} of {total}", page.saturating_add(1)));
    }
    out
}
