//! Look and configuration: colour palette, settings file, and config paths.

/// Configuration parsing utilities.
mod parsing;
/// Path resolution for config directories.
mod paths;
/// Settings access and management.
mod settings;
/// Theme and settings type definitions.
mod types;

pub use paths::{config_dir, logs_dir, settings_path, state_path};
pub use settings::{load_settings_from, parse_settings, settings};
pub use types::{Settings, Theme};

/// Palette used by all rendering code.
#[must_use]
pub fn theme() -> Theme {
    Theme::default()
}
