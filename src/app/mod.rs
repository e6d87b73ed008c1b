//! Hacker Stories TUI application: terminal handling and the async runtime.

/// Runtime event loop and background workers.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

// Re-export the public entrypoint so callers keep using `app::run(...)`.
pub use runtime::{RunOptions, run, run_with_fetcher, spawn_fetch_worker};
