use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::ViewMode;
use crate::tui::app::App;
use crate::util::unicode;

/// Render the tab bar: one tab per time window, the new-task button on the
/// right, and a separator line below
pub fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // tabs
            Constraint::Length(1), // separator
        ])
        .split(area);

    let sep_cols = render_tabs(frame, app, chunks[0]);
    render_separator(frame, app, chunks[1], &sep_cols);
}

/// Render tabs and return the column positions of each separator character.
fn render_tabs(frame: &mut Frame, app: &App, area: Rect) -> Vec<usize> {
    let bg = app.theme.background;
    let width = area.width as usize;
    let mut spans: Vec<Span> = Vec::new();
    let mut sep_cols: Vec<usize> = Vec::new();
    let sep = Span::styled("\u{2502}", Style::default().fg(app.theme.dim).bg(bg));

    spans.push(Span::styled(" ", Style::default().bg(bg)));
    let current = app.task_view.view();
    for (i, mode) in ViewMode::TABS.into_iter().enumerate() {
        let is_current = current == mode;
        spans.push(Span::styled(
            format!(" {} {} ", i + 1, mode.label()),
            tab_style(app, is_current),
        ));
        sep_cols.push(spans.iter().map(|s| unicode::display_width(&s.content)).sum());
        spans.push(sep.clone());
    }

    // `All` has no tab of its own; show it as a marker when selected
    if current == ViewMode::All {
        spans.push(Span::styled(
            format!(" {} ", ViewMode::All.label()),
            tab_style(app, true),
        ));
    }

    // New-task button, right-aligned
    let button = if app.task_view.is_form_open() {
        "[Esc] Cancel "
    } else {
        "[a] New Task "
    };
    let used: usize = spans.iter().map(|s| unicode::display_width(&s.content)).sum();
    let button_width = unicode::display_width(button);
    if used + button_width < width {
        spans.push(Span::styled(
            " ".repeat(width - used - button_width),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(
            button,
            Style::default().fg(app.theme.purple).bg(bg),
        ));
    }

    let tabs = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(tabs, area);
    sep_cols
}

fn render_separator(frame: &mut Frame, app: &App, area: Rect, sep_cols: &[usize]) {
    let width = area.width as usize;
    let line: String = (0..width)
        .map(|col| {
            if sep_cols.contains(&col) {
                '\u{2534}'
            } else {
                '\u{2500}'
            }
        })
        .collect();
    let sep_widget =
        Paragraph::new(line).style(Style::default().fg(app.theme.dim).bg(app.theme.background));
    frame.render_widget(sep_widget, area);
}

/// Style for a tab: highlighted if current, normal otherwise
fn tab_style(app: &App, is_current: bool) -> Style {
    if is_current {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.selection_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.text).bg(app.theme.background)
    }
}
