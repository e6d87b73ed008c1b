use ratatui::style::Color;

use crate::logic::DEFAULT_API_BASE;
use crate::state::DEFAULT_SEARCH_TERM;

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Subtle surface color for component backgrounds.
    pub surface1: Color,
    /// Highlight background for the selected row.
    pub surface2: Color,
    /// Muted overlay color for secondary text.
    pub overlay1: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext0: Color,
    /// Accent color for interactive highlights.
    pub sapphire: Color,
    /// Accent color for focused borders and headings.
    pub mauve: Color,
    /// Success/positive state color.
    pub green: Color,
    /// Warning/attention state color.
    pub yellow: Color,
    /// Error/danger state color.
    pub red: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Catppuccin Mocha
        Self {
            base: Color::Rgb(0x1e, 0x1e, 0x2e),
            surface1: Color::Rgb(0x45, 0x47, 0x5a),
            surface2: Color::Rgb(0x58, 0x5b, 0x70),
            overlay1: Color::Rgb(0x7f, 0x84, 0x9c),
            text: Color::Rgb(0xcd, 0xd6, 0xf4),
            subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
            sapphire: Color::Rgb(0x74, 0xc7, 0xec),
            mauve: Color::Rgb(0xcb, 0xa6, 0xf7),
            green: Color::Rgb(0xa6, 0xe3, 0xa1),
            yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
            red: Color::Rgb(0xf3, 0x8b, 0xa8),
        }
    }
}

/// User-configurable application settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Search API base URL.
    pub api_base: String,
    /// Search term used when none has been persisted yet.
    pub default_search: String,
    /// Request pages and offer "More".
    pub paginate: bool,
    /// Ignore responses that belong to superseded requests.
    pub discard_stale_responses: bool,
    /// Show the last-searches row.
    pub show_recent_searches: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            default_search: DEFAULT_SEARCH_TERM.to_string(),
            paginate: true,
            discard_stale_responses: false,
            show_recent_searches: true,
        }
    }
}
