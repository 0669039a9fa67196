use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode;

const NAVIGATE_HINTS: &str = "a new \u{00B7} space toggle \u{00B7} / search \u{00B7} ? help \u{00B7} q quit";

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let dim = Style::default().fg(app.theme.dim).bg(bg);

    let line = match app.mode {
        Mode::Search => {
            // Search prompt: /pattern▌
            let spans = vec![
                Span::styled(
                    format!("/{}", app.search_input),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ),
                Span::styled("\u{258C}", Style::default().fg(app.theme.highlight).bg(bg)),
            ];
            with_right_hint(app, spans, "Enter search  Esc cancel", width)
        }
        _ if app.status_message.is_some() => {
            let message = app.status_message.as_deref().unwrap_or_default();
            Line::from(Span::styled(
                format!(" {}", unicode::truncate_to_width(message, width.saturating_sub(1))),
                Style::default().fg(app.theme.yellow).bg(bg),
            ))
        }
        Mode::Navigate => {
            if let Some(ref pattern) = app.last_search {
                // Active search stays visible, dimmed
                let spans = vec![Span::styled(format!("/{}", pattern), dim)];
                with_right_hint(app, spans, "n/N next/prev", width)
            } else if app.config.ui.show_key_hints {
                Line::from(Span::styled(
                    format!(" {}", unicode::truncate_to_width(NAVIGATE_HINTS, width.saturating_sub(1))),
                    dim,
                ))
            } else {
                Line::from("")
            }
        }
        Mode::Form => Line::from(""),
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Append `hint` right-aligned if it fits after `spans`
fn with_right_hint<'a>(app: &App, mut spans: Vec<Span<'a>>, hint: &'a str, width: usize) -> Line<'a> {
    let bg = app.theme.background;
    let content_width: usize = spans.iter().map(|s| unicode::display_width(&s.content)).sum();
    let hint_width = unicode::display_width(hint);
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
    }
    Line::from(spans)
}
