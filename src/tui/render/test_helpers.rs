use chrono::DateTime;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::{Config, TaskType, ViewMode};
use crate::ops::TaskView;
use crate::tui::app::{App, Clock};

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// App on the Today tab with the clock pinned to 2024-06-12 15:00 UTC and
/// three open tasks created at that instant, one of each type:
/// "Crash on save" (bug, with description), the welcome task, "Rotate logs".
pub fn app_with_tasks() -> App {
    let now = DateTime::parse_from_rfc3339("2024-06-12T15:00:00+00:00").unwrap();
    let mut tv = TaskView::with_welcome_task(ViewMode::Today, now.to_utc());

    let draft = tv.draft_mut();
    draft.title = "Crash on save".into();
    draft.description = "Stack trace attached".into();
    draft.task_type = Some(TaskType::SuddenBugFix);
    tv.submit_draft(now.to_utc()).unwrap();

    let draft = tv.draft_mut();
    draft.title = "Rotate logs".into();
    draft.task_type = Some(TaskType::BackgroundTask);
    tv.submit_draft(now.to_utc()).unwrap();

    App::new(tv, Config::default()).with_clock(Clock::Fixed(now))
}
