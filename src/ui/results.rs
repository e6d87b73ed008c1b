use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use super::helpers::{column_widths, fit_width};
use crate::state::{AppState, Focus, SortKey, Story};
use crate::theme::{Theme, theme};

/// Shown above the list after a failed request.
pub const ERROR_TEXT: &str = "Something went wrong ...";
/// Shown instead of the list while a request is pending.
pub const LOADING_TEXT: &str = "Loading ...";
/// Highlight marker of the selected row.
const HIGHLIGHT: &str = "> ";

/// What: Render the results section: status lines, header, rows, and the "More" hint.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (stories, sort, selection)
/// - `area`: Target rectangle
///
/// Details:
/// - The error line is shown above the list, not instead of it.
/// - While loading, the list is replaced by the loading line.
pub fn render_results(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let focused = app.focus == Focus::Results;
    let block = Block::default()
        .title(Span::styled(
            "Search Results:",
            Style::default()
                .fg(if focused { th.mauve } else { th.overlay1 })
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { th.mauve } else { th.surface1 }));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let show_more = !app.stories.is_loading && app.has_more_pages();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(u16::from(app.stories.is_error)),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(u16::from(show_more)),
        ])
        .split(inner);

    if app.stories.is_error {
        f.render_widget(
            Paragraph::new(Span::styled(ERROR_TEXT, Style::default().fg(th.red))),
            rows[0],
        );
    }

    if app.stories.is_loading {
        f.render_widget(
            Paragraph::new(Span::styled(LOADING_TEXT, Style::default().fg(th.yellow))),
            rows[1],
        );
        return;
    }

    let widths = column_widths(inner.width.saturating_sub(2));
    f.render_widget(Paragraph::new(header_line(app, &th, &widths)), rows[1]);

    let items: Vec<ListItem> = app
        .visible_stories()
        .iter()
        .map(|s| ListItem::new(story_line(s, &th, &widths)))
        .collect();
    let list = List::new(items)
        .style(Style::default().fg(th.text).bg(th.base))
        .highlight_style(if focused {
            Style::default().fg(th.text).bg(th.surface2)
        } else {
            Style::default()
        })
        .highlight_symbol(HIGHLIGHT);
    f.render_stateful_widget(list, rows[2], &mut app.list_state);

    if show_more {
        f.render_widget(
            Paragraph::new(Span::styled(
                "[ More ]  (m)",
                Style::default().fg(th.sapphire),
            )),
            rows[3],
        );
    }
}

/// What: Column header with the active sort indicator.
fn header_line<'a>(app: &AppState, th: &Theme, widths: &[usize; 5]) -> Line<'a> {
    let mut spans = vec![Span::raw(" ".repeat(HIGHLIGHT.len()))];
    for (key, width) in SortKey::COLUMNS.iter().zip(widths) {
        let text = format!("{}:{}", key.label(), app.sort.indicator(*key));
        let style = if app.sort.sort_key == *key {
            Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.subtext0).add_modifier(Modifier::BOLD)
        };
        spans.push(Span::styled(fit_width(&text, *width), style));
    }
    spans.push(Span::styled(
        fit_width("Remove:", widths[4]),
        Style::default().fg(th.subtext0).add_modifier(Modifier::BOLD),
    ));
    Line::from(spans)
}

/// What: One story row laid out in the five columns.
fn story_line<'a>(story: &Story, th: &Theme, widths: &[usize; 5]) -> Line<'a> {
    Line::from(vec![
        Span::styled(
            fit_width(&story.title, widths[0]),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(fit_width(&story.author, widths[1]), Style::default().fg(th.subtext0)),
        Span::raw(fit_width(&story.num_comments.to_string(), widths[2])),
        Span::raw(fit_width(&story.points.to_string(), widths[3])),
        Span::styled(fit_width("[x]", widths[4]), Style::default().fg(th.red)),
    ])
}
