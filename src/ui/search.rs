use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::state::{AppState, Focus};
use crate::theme::theme;

/// Label in front of the input.
const LABEL: &str = "Search: ";
/// Submit button text.
const BUTTON: &str = "[ Submit ]";

/// What: Render the labelled search input and its submit button.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (term, focus)
/// - `area`: Target rectangle
///
/// Details:
/// - The button is dimmed while the term is empty, mirroring a disabled submit.
/// - The cursor is placed after the term when the input is focused.
pub fn render_search(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let focused = app.focus == Focus::Search;
    let term = app.search_term.get();

    let button_w = u16::try_from(BUTTON.len()).unwrap_or(u16::MAX);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(button_w + 2)])
        .split(area);

    let input_line = Line::from(vec![
        Span::styled(
            LABEL,
            Style::default()
                .fg(if focused { th.sapphire } else { th.overlay1 })
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            term.to_string(),
            Style::default().fg(if focused { th.text } else { th.subtext0 }),
        ),
    ]);
    let input = Paragraph::new(input_line)
        .style(Style::default().bg(th.base))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(if focused { th.mauve } else { th.surface1 })),
        );
    f.render_widget(input, cols[0]);

    let button_style = if term.is_empty() {
        Style::default().fg(th.surface2)
    } else {
        Style::default().fg(th.green).add_modifier(Modifier::BOLD)
    };
    let button = Paragraph::new(Span::styled(BUTTON, button_style))
        .style(Style::default().bg(th.base))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.surface1)),
        );
    f.render_widget(button, cols[1]);

    if focused {
        let used = u16::try_from(LABEL.width() + term.width()).unwrap_or(u16::MAX);
        let right = cols[0].x + cols[0].width.saturating_sub(2);
        let x = (cols[0].x + 1).saturating_add(used).min(right);
        f.set_cursor_position(Position::new(x, cols[0].y + 1));
    }
}
