//! Command-line argument definition.

use clap::Parser;

use crate::app::RunOptions;

/// Hacker Stories - search Hacker News stories from the terminal
#[derive(Parser, Debug)]
#[command(name = "hacker-stories")]
#[command(version)]
#[command(about = "Search Hacker News stories from the terminal", long_about = None)]
pub struct Args {
    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Print one page of results for TERM and exit instead of starting the TUI
    #[arg(short, long, value_name = "TERM")]
    pub search: Option<String>,

    /// Page to print in search mode (0-based)
    #[arg(short, long, default_value_t = 0)]
    pub page: u32,

    /// Do not read or write the saved search term
    #[arg(long)]
    pub no_persist: bool,

    /// Search API base URL (overrides `api_base` in settings.conf)
    #[arg(long, value_name = "URL")]
    pub api_base: Option<String>,
}

impl Args {
    /// What: Options for the interactive runtime derived from these arguments.
    #[must_use]
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            api_base: self.api_base.clone(),
            no_persist: self.no_persist,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Flags parse into the expected fields.
    fn parses_search_mode_flags() {
        let args = Args::try_parse_from([
            "hacker-stories",
            "--search",
            "Rust",
            "-p",
            "2",
            "--api-base",
            "http://127.0.0.1:8080/api",
            "--no-persist",
            "-v",
        ])
        .expect("valid arguments");
        assert_eq!(args.search.as_deref(), Some("Rust"));
        assert_eq!(args.page, 2);
        assert!(args.verbose);
        let opts = args.run_options();
        assert!(opts.no_persist);
        assert_eq!(opts.api_base.as_deref(), Some("http://127.0.0.1:8080/api"));
    }

    #[test]
    /// What: Defaults start the TUI at info level.
    fn defaults_start_tui() {
        let args = Args::try_parse_from(["hacker-stories"]).expect("no arguments");
        assert!(args.search.is_none());
        assert_eq!(args.page, 0);
        assert_eq!(args.log_level, "info");
        assert!(!args.no_persist);
    }
}
