use std::fs;
use std::path::Path;

use super::parsing::{normalize_key, parse_bool, strip_inline_comment};
use super::paths::settings_path;
use super::types::Settings;

/// Skeleton written on first run so users can discover the available keys.
pub(crate) const SKELETON_SETTINGS_CONTENT: &str = "\
# Hacker Stories settings
# Lines are `key = value`; `#` starts a comment.

# Search API base URL (the `/search` path is appended).
api_base = https://hn.algolia.com/api/v1

# Term searched on first start, before anything has been typed.
default_search = React

# Request results page by page and enable the \"More\" action.
paginate = true

# Drop responses of superseded requests instead of applying whichever resolves last.
discard_stale_responses = false

# Show the row of recent searches below the search form.
show_recent_searches = true
";

/// What: Parse settings text into a [`Settings`] value.
///
/// Inputs:
/// - `content`: Full text of a settings file
///
/// Output:
/// - Settings with every recognised, valid key applied over the defaults.
///
/// Details:
/// - Unknown keys and unparsable values are logged and skipped.
#[must_use]
pub fn parse_settings(content: &str) -> Settings {
    let mut out = Settings::default();
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        let Some((raw_key, raw_val)) = trimmed.split_once('=') else {
            continue;
        };
        let key = normalize_key(raw_key);
        let val = strip_inline_comment(raw_val.trim());
        match key.as_str() {
            "api_base" | "api_endpoint" => {
                if val.is_empty() {
                    tracing::warn!(key = %key, "[Config] Empty API base ignored");
                } else {
                    out.api_base = val.trim_end_matches('/').to_string();
                }
            }
            "default_search" | "initial_search" => {
                out.default_search = val.to_string();
            }
            "paginate" | "pagination" => apply_bool(&key, val, &mut out.paginate),
            "discard_stale_responses" => {
                apply_bool(&key, val, &mut out.discard_stale_responses);
            }
            "show_recent_searches" | "show_recent" => {
                apply_bool(&key, val, &mut out.show_recent_searches);
            }
            _ => tracing::debug!(key = %key, "[Config] Unknown settings key ignored"),
        }
    }
    out
}

/// What: Store a parsed boolean into `slot`, logging invalid values.
fn apply_bool(key: &str, val: &str, slot: &mut bool) {
    match parse_bool(val) {
        Some(b) => *slot = b,
        None => tracing::warn!(key = %key, value = %val, "[Config] Invalid boolean ignored"),
    }
}

/// What: Load settings from `path`, writing the skeleton first when the file is missing.
///
/// Inputs:
/// - `path`: Settings file location
///
/// Output:
/// - Parsed settings, or defaults when the file cannot be read.
pub fn load_settings_from(path: &Path) -> Settings {
    if !path.exists() {
        if let Some(dir) = path.parent() {
            let _ = fs::create_dir_all(dir);
        }
        match fs::write(path, SKELETON_SETTINGS_CONTENT) {
            Ok(()) => tracing::info!(path = %path.display(), "[Config] Wrote settings skeleton"),
            Err(e) => tracing::warn!(
                path = %path.display(),
                error = %e,
                "[Config] Failed to write settings skeleton"
            ),
        }
    }
    match fs::read_to_string(path) {
        Ok(content) => parse_settings(&content),
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "[Config] Failed to read settings; using defaults"
            );
            Settings::default()
        }
    }
}

/// Load user settings from `$HOME/.config/hacker-stories/settings.conf`.
/// Falls back to `Settings::default()` when missing or invalid.
pub fn settings() -> Settings {
    load_settings_from(&settings_path())
}
