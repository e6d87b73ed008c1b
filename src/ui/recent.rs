use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::state::{AppState, Focus};
use crate::theme::theme;

/// What: Render the last searches as a row of buttons.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (URL history, focus, highlighted button)
/// - `area`: Target rectangle
///
/// Details:
/// - The highlighted button is only emphasised while the row has focus.
pub fn render_recent(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let focused = app.focus == Focus::Recent;
    let mut spans = Vec::new();
    for (i, term) in app.last_searches().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let style = if focused && i == app.recent_selected {
            Style::default()
                .fg(th.text)
                .bg(th.surface2)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(if focused { th.text } else { th.subtext0 })
        };
        spans.push(Span::styled(format!("[{term}]"), style));
    }
    let row = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(th.base))
        .block(
            Block::default()
                .title(Span::styled(
                    "Recent Searches:",
                    Style::default().fg(if focused { th.mauve } else { th.overlay1 }),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(if focused { th.mauve } else { th.surface1 })),
        );
    f.render_widget(row, area);
}
