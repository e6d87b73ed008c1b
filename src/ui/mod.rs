//! Terminal rendering of the search screen.
//!
//! Top to bottom: headline, search form, recent searches, results, key hints.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Paragraph},
};

use crate::state::AppState;
use crate::theme::theme;

/// Shared text helpers (column fitting).
mod helpers;
/// Last-searches button row.
mod recent;
/// Results header, rows, and status lines.
mod results;
/// Search form with label and submit button.
mod search;

pub use helpers::{column_widths, fit_width};

/// Headline shown on the first line.
pub const HEADLINE: &str = "My Hacker Stories.";

/// What: Render the whole screen for the current state.
///
/// Inputs:
/// - `f`: Frame to draw into
/// - `app`: Application state; the list widget state is updated while rendering
///
/// Details:
/// - The recent-searches row takes no space when disabled or empty.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();

    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let recent_h: u16 = if app.has_recent_row() { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(recent_h),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    let headline = Paragraph::new(Span::styled(
        HEADLINE,
        Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
    ))
    .style(Style::default().bg(th.base));
    f.render_widget(headline, chunks[0]);

    search::render_search(f, app, chunks[1]);
    if recent_h > 0 {
        recent::render_recent(f, app, chunks[2]);
    }
    results::render_results(f, app, chunks[3]);
    render_footer(f, app, chunks[4]);
}

/// What: Key hints for the focused pane.
fn render_footer(f: &mut Frame, app: &AppState, area: ratatui::prelude::Rect) {
    let th = theme();
    let hints = match app.focus {
        crate::state::Focus::Search => "Enter search  Tab switch pane  Ctrl+C quit",
        crate::state::Focus::Recent => "←/→ choose  Enter search  Esc back  Ctrl+C quit",
        crate::state::Focus::Results => {
            "↑/↓ move  d remove  1-4 sort  m more  Esc back  q quit"
        }
    };
    let footer = Paragraph::new(Span::styled(hints, Style::default().fg(th.overlay1)))
        .style(Style::default().bg(th.base));
    f.render_widget(footer, area);
}
