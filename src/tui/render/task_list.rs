use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use regex::Regex;

use crate::model::{Task, TaskStatus};
use crate::tui::app::App;
use crate::util::unicode;

use super::{pad_to_width, push_highlighted_spans};

/// Width of the type label column (longest label is "Background")
const LABEL_WIDTH: usize = 10;

/// Description lines shown per card
const DESCRIPTION_LINES: usize = 2;

/// Render the visible tasks as cards, or the empty placeholder
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let visible = app.visible_tasks();

    if visible.is_empty() {
        let empty = Paragraph::new(" No tasks found")
            .style(Style::default().fg(app.theme.dim).bg(app.theme.background));
        frame.render_widget(empty, area);
        return;
    }

    // Clamp cursor
    let cursor = app.cursor.min(visible.len() - 1);
    let search_re = app.active_search_re();

    let mut lines: Vec<Line> = Vec::new();
    let mut cursor_range = (0, 0);
    for (i, task) in visible.iter().enumerate() {
        let start = lines.len();
        lines.extend(card_lines(app, task, i == cursor, area.width as usize, search_re.as_ref()));
        if i == cursor {
            cursor_range = (start, lines.len());
        }
        lines.push(Line::from(""));
    }
    drop(visible);

    app.cursor = cursor;
    app.scroll_offset = adjust_scroll(
        app.scroll_offset,
        cursor_range,
        area.height as usize,
        lines.len(),
    );

    let shown: Vec<Line> = lines
        .into_iter()
        .skip(app.scroll_offset)
        .take(area.height as usize)
        .collect();
    let paragraph = Paragraph::new(shown).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}

/// New scroll offset keeping rows `card.0..card.1` on screen
fn adjust_scroll(scroll: usize, card: (usize, usize), height: usize, total: usize) -> usize {
    let (start, end) = card;
    let mut scroll = scroll.min(total.saturating_sub(height));
    if start < scroll {
        scroll = start;
    } else if end > scroll + height {
        // Tall cards keep their first line visible
        scroll = end.saturating_sub(height).min(start);
    }
    scroll
}

/// Lines for a single card:
///
/// ```text
/// ▎Bug Fix    Crash on save
///             Stack trace attached
///             Open · 2024-06-12
/// ```
fn card_lines(
    app: &App,
    task: &Task,
    is_cursor: bool,
    width: usize,
    search_re: Option<&Regex>,
) -> Vec<Line<'static>> {
    let theme = &app.theme;
    let bg = if is_cursor { theme.selection_bg } else { theme.background };
    let bg_style = Style::default().bg(bg);
    let closed = task.status() == TaskStatus::Closed;
    let hl_style = Style::default()
        .fg(theme.search_match_fg)
        .bg(theme.search_match_bg)
        .add_modifier(Modifier::BOLD);
    let indent = 1 + LABEL_WIDTH + 1;
    let text_width = width.saturating_sub(indent + 1);

    let gutter = || {
        if is_cursor {
            Span::styled(
                "\u{258E}",
                Style::default().fg(theme.selection_border).bg(bg),
            )
        } else {
            Span::styled(" ", bg_style)
        }
    };

    let mut lines = Vec::new();

    // Type label + title
    let mut spans = vec![gutter()];
    spans.push(Span::styled(
        format!("{:<w$} ", task.task_type().label(), w = LABEL_WIDTH),
        Style::default()
            .fg(theme.type_color(task.task_type()))
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    ));
    let mut title_style = Style::default().fg(theme.text_bright).bg(bg);
    if closed {
        title_style = title_style.fg(theme.dim).add_modifier(Modifier::CROSSED_OUT);
    } else if is_cursor {
        title_style = title_style.add_modifier(Modifier::BOLD);
    }
    let title = unicode::truncate_to_width(task.title(), text_width);
    push_highlighted_spans(&mut spans, &title, title_style, hl_style, search_re);
    pad_to_width(&mut spans, width, bg_style);
    lines.push(Line::from(spans));

    // Description
    if let Some(description) = task.description() {
        let desc_style = Style::default().fg(theme.text).bg(bg);
        for text in unicode::wrap_to_width(description, text_width, DESCRIPTION_LINES) {
            let mut spans = vec![gutter(), Span::styled(" ".repeat(indent - 1), bg_style)];
            push_highlighted_spans(&mut spans, &text, desc_style, hl_style, search_re);
            pad_to_width(&mut spans, width, bg_style);
            lines.push(Line::from(spans));
        }
    }

    // Status + creation date
    let created = app.clock.local_date(&task.created_at());
    let mut spans = vec![
        gutter(),
        Span::styled(" ".repeat(indent - 1), bg_style),
        Span::styled(
            task.status().label(),
            Style::default().fg(theme.status_color(task.status())).bg(bg),
        ),
        Span::styled(
            format!(" \u{00B7} {}", created.format("%Y-%m-%d")),
            Style::default().fg(theme.dim).bg(bg),
        ),
    ];
    pad_to_width(&mut spans, width, bg_style);
    lines.push(Line::from(spans));

    lines
}
