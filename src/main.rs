//! Hacker Stories binary entrypoint kept minimal. The full runtime lives in `app`.

use std::fmt;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use hacker_stories::{app, args, theme};

/// Log timestamp format, e.g. `2026-10-16-T 14:03:59`.
struct StoriesTimer;

impl tracing_subscriber::fmt::time::FormatTime for StoriesTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S").to_string();
        w.write_str(&ts)
    }
}

/// What: Open `path` for appending behind a non-blocking writer.
///
/// Output:
/// - The writer and the guard that flushes buffered lines when dropped.
fn open_log_writer(
    path: &Path,
) -> std::io::Result<(
    tracing_appender::non_blocking::NonBlocking,
    tracing_appender::non_blocking::WorkerGuard,
)> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    Ok(tracing_appender::non_blocking(file))
}

/// What: Initialize tracing into `logs/hacker-stories.log`, falling back to stderr.
///
/// Inputs:
/// - `level`: Default filter used when `RUST_LOG` is not set
///
/// Output:
/// - Guard for the file writer; dropping it flushes pending lines.
fn init_logging(level: &str) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let mut log_path = theme::logs_dir();
    log_path.push("hacker-stories.log");
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    match open_log_writer(&log_path) {
        Ok((non_blocking, guard)) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(StoriesTimer)
                .init();
            tracing::info!(path = %log_path.display(), "logging initialized");
            Some(guard)
        }
        Err(e) => {
            // Fallback: stderr logger so startup is never blocked
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(StoriesTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
            None
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = args::Args::parse();
    let _log_guard = init_logging(&args::determine_log_level(&args));

    if let Some(term) = &args.search {
        let settings = theme::settings();
        let code =
            args::search::handle_search(term, args.page, args.api_base.as_deref(), &settings).await;
        return ExitCode::from(u8::try_from(code).unwrap_or(1));
    }

    tracing::info!(no_persist = args.no_persist, "Hacker Stories starting");
    if let Err(err) = app::run(args.run_options()).await {
        tracing::error!(error = ?err, "Application error");
        eprintln!("hacker-stories: {err}");
    }
    tracing::info!("Hacker Stories exited");
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    /// What: FormatTime impl writes a non-empty timestamp without panicking
    ///
    /// - Input: Tracing writer buffer
    /// - Output: Buffer receives some content
    #[test]
    fn stories_timer_formats_time_without_panic() {
        use tracing_subscriber::fmt::time::FormatTime;
        let mut buf = String::new();
        let mut writer = tracing_subscriber::fmt::format::Writer::new(&mut buf);
        let t = super::StoriesTimer;
        let _ = t.format_time(&mut writer);
        assert!(buf.contains("-T "));
    }

    /// What: Lines written through the non-blocking log writer reach the file once the guard drops
    ///
    /// - Input: Temp log file, one line written, guard dropped
    /// - Output: File contains the line
    #[test]
    fn log_writer_flushes_on_guard_drop() {
        use std::io::Write;
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("hacker-stories.log");
        let (mut writer, guard) = super::open_log_writer(&path).expect("open log file");
        writer
            .write_all(b"search failed\n")
            .expect("write log line");
        drop(guard);
        let written = std::fs::read_to_string(&path).expect("read log file");
        assert!(written.contains("search failed"));
    }
}
