use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_segmentation::UnicodeSegmentation;

use crate::tui::app::{App, FormField, Mode};
use crate::util::unicode;

use super::pad_to_width;

/// Width of the field label column
const LABEL_WIDTH: usize = 13;

const TITLE_PLACEHOLDER: &str = "Task title";
const DESCRIPTION_PLACEHOLDER: &str = "Description (optional)";

/// Render the creation form: title, description, type selector and a hint line
pub fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            " New Task ",
            Style::default()
                .fg(theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(theme.dim).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    let width = inner.width as usize;
    let focused = app.mode == Mode::Form;
    let draft = app.task_view.draft();

    let lines = vec![
        text_row(
            app,
            "Title",
            &draft.title,
            TITLE_PLACEHOLDER,
            focused && app.form_field == FormField::Title,
            width,
        ),
        text_row(
            app,
            "Description",
            &draft.description,
            DESCRIPTION_PLACEHOLDER,
            focused && app.form_field == FormField::Description,
            width,
        ),
        type_row(app, focused && app.form_field == FormField::Type, width),
        Line::from(Span::styled(
            " Enter create \u{00B7} Esc cancel \u{00B7} Tab next field",
            Style::default().fg(theme.dim).bg(bg),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn label_span(app: &App, label: &str, is_focused: bool) -> Span<'static> {
    let mut style = Style::default().bg(app.theme.background);
    style = if is_focused {
        style.fg(app.theme.highlight).add_modifier(Modifier::BOLD)
    } else {
        style.fg(app.theme.text)
    };
    Span::styled(format!(" {:<w$}", label, w = LABEL_WIDTH - 1), style)
}

fn text_row(
    app: &App,
    label: &str,
    text: &str,
    placeholder: &str,
    is_focused: bool,
    width: usize,
) -> Line<'static> {
    let theme = &app.theme;
    let bg = theme.background;
    let avail = width.saturating_sub(LABEL_WIDTH + 1);
    let text_style = Style::default().fg(theme.text_bright).bg(bg);
    let cursor_style = Style::default().fg(theme.highlight).bg(bg);
    let placeholder_style = Style::default().fg(theme.dim).bg(bg);

    let mut spans = vec![label_span(app, label, is_focused)];
    if is_focused {
        let (before, after) = window_around_cursor(text, app.form_cursor, avail);
        spans.push(Span::styled(before, text_style));
        spans.push(Span::styled("\u{258C}", cursor_style));
        if text.is_empty() {
            spans.push(Span::styled(
                unicode::truncate_to_width(placeholder, avail.saturating_sub(1)),
                placeholder_style,
            ));
        } else {
            spans.push(Span::styled(after, text_style));
        }
    } else if text.is_empty() {
        spans.push(Span::styled(
            unicode::truncate_to_width(placeholder, avail),
            placeholder_style,
        ));
    } else {
        spans.push(Span::styled(
            unicode::truncate_to_width(text, avail),
            text_style,
        ));
    }
    pad_to_width(&mut spans, width, Style::default().bg(bg));
    Line::from(spans)
}

fn type_row(app: &App, is_focused: bool, width: usize) -> Line<'static> {
    let theme = &app.theme;
    let bg = theme.background;
    let task_type = app.task_view.draft().effective_type();
    let arrow_style = if is_focused {
        Style::default().fg(theme.highlight).bg(bg)
    } else {
        Style::default().fg(theme.dim).bg(bg)
    };
    let mut spans = vec![
        label_span(app, "Type", is_focused),
        Span::styled("\u{2039} ", arrow_style),
        Span::styled(
            task_type.label(),
            Style::default()
                .fg(theme.type_color(task_type))
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" \u{203A}", arrow_style),
    ];
    pad_to_width(&mut spans, width, Style::default().bg(bg));
    Line::from(spans)
}

/// Split `text` at the byte offset `cursor` into the parts drawn before and
/// after the cursor glyph, scrolled horizontally so that everything fits in
/// `avail` cells with the cursor on screen.
fn window_around_cursor(text: &str, cursor: usize, avail: usize) -> (String, String) {
    let cursor = cursor.min(text.len());
    let (head, tail) = text.split_at(cursor);
    let room = avail.saturating_sub(1);

    // Drop graphemes from the left until the text before the cursor fits
    let mut before = head;
    let mut head_width = unicode::display_width(before);
    while head_width > room {
        let Some(g) = before.graphemes(true).next() else {
            break;
        };
        head_width -= unicode::display_width(g);
        before = &before[g.len()..];
    }

    let after = unicode::truncate_to_width(tail, room - head_width);
    (before.to_string(), after)
}
