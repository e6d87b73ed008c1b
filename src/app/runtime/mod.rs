use std::sync::atomic::Ordering;

use ratatui::{Terminal, backend::CrosstermBackend};

use crate::logic::submit_search;
use crate::sources::{Fetcher, http_fetcher};

use super::terminal::{restore_terminal, setup_terminal};

mod channels;
mod event_loop;
mod init;
mod workers;

use channels::Channels;
use event_loop::run_event_loop;
use init::initialize_app_state;
use workers::spawn_event_thread;

pub use init::RunOptions;
pub use workers::spawn_fetch_worker;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Run the Hacker Stories TUI end-to-end against the live search API.
///
/// Inputs:
/// - `opts`: Command-line overrides
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal errors.
///
/// # Errors
/// - Returns `Err` when the terminal cannot be set up or restored
pub async fn run(opts: RunOptions) -> Result<()> {
    run_with_fetcher(opts, http_fetcher()).await
}

/// What: Run the TUI with a caller-supplied fetcher.
///
/// Inputs:
/// - `opts`: Command-line overrides
/// - `fetcher`: Performs each search request
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal errors.
///
/// # Errors
/// - Returns `Err` when the terminal cannot be set up or restored
///
/// Details:
/// - Config/state: Loads `settings.conf` and the persisted search term.
/// - Startup: Issues the first search for the current term, as if it had been submitted.
/// - Headless: With `HACKER_STORIES_TEST_HEADLESS=1` no terminal is touched and no input
///   thread is started.
/// - Cleanup: Stops the input thread and restores terminal modes before returning.
pub async fn run_with_fetcher(opts: RunOptions, fetcher: Fetcher) -> Result<()> {
    let headless = std::env::var("HACKER_STORIES_TEST_HEADLESS").ok().as_deref() == Some("1");

    let settings = crate::theme::settings();
    let mut app = initialize_app_state(&opts, &settings);

    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let mut channels = Channels::new(fetcher);
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );

    if !submit_search(&mut app, &channels.query_tx) {
        tracing::info!("[Runtime] Empty initial term; no request sent");
    }

    run_event_loop(&mut app, &mut channels, &mut terminal).await;

    channels.event_thread_cancelled.store(true, Ordering::Relaxed);

    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
